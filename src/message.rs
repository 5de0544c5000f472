// Message module - error-broadcast channel shared across the app
//
// A single string slot holding the latest error message, plus an optional
// setter. The top-level app owns the provider; services receive a clone of
// the handle through the service locator and write into it on failure.
// Last writer wins, there is no history.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Shared slot holding the latest message
pub type SharedMessage = Arc<Mutex<String>>;

/// Setter bound to a message slot
pub type MessageSetter = Arc<dyn Fn(String) + Send + Sync>;

/// Handle to the error-broadcast channel
///
/// Cloning shares the underlying slot. A context built with
/// `MessageContext::default()` has no setter, so writes through
/// `set_message` are dropped.
#[derive(Clone, Default)]
pub struct MessageContext {
    message: SharedMessage,
    setter: Option<MessageSetter>,
}

impl MessageContext {
    /// Create a context with an empty slot and a setter writing into it
    pub fn provider() -> Self {
        let message: SharedMessage = Arc::new(Mutex::new(String::new()));
        let slot = message.clone();
        let setter: MessageSetter = Arc::new(move |value: String| {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = value;
        });

        Self {
            message,
            setter: Some(setter),
        }
    }

    /// Current message (empty string if nothing was written)
    pub fn message(&self) -> String {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The setter, if this context was created by a provider
    pub fn setter(&self) -> Option<&MessageSetter> {
        self.setter.as_ref()
    }

    /// Overwrite the message through the setter
    ///
    /// Returns false when there is no setter.
    pub fn set_message(&self, value: impl Into<String>) -> bool {
        match &self.setter {
            Some(setter) => {
                setter(value.into());
                true
            }
            None => false,
        }
    }

    /// Reset the message to the empty string
    pub fn clear(&self) -> bool {
        self.set_message(String::new())
    }
}

impl fmt::Debug for MessageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageContext")
            .field("message", &self.message())
            .field("has_setter", &self.setter.is_some())
            .finish()
    }
}
