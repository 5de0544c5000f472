//! Error-handling base behaviour shared by services
//!
//! Services own a `MessageContext` and expose it through
//! `message_context()`; `handle_error` then comes for free.

use crate::message::MessageContext;

/// Trait for services that report failures through the error channel
///
/// # Example
///
/// ```ignore
/// struct UserService {
///     context: MessageContext,
/// }
///
/// impl ErrorHandling for UserService {
///     fn message_context(&self) -> &MessageContext {
///         &self.context
///     }
/// }
///
/// // UserService now has handle_error()
/// ```
pub trait ErrorHandling {
    /// The injected error channel
    fn message_context(&self) -> &MessageContext;

    /// Publish `message` to the error channel
    ///
    /// No-op when the context has no setter.
    fn handle_error(&self, message: &str) {
        if let Some(setter) = self.message_context().setter() {
            setter(message.to_string());
        }
    }
}
