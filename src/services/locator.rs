//! Service locator
//!
//! Hands out service instances wired to the current API client and error
//! channel. Every call builds a fresh instance; services are cheap handles.

use crate::api::ApiClient;
use crate::message::MessageContext;

/// Services that can be built from the shared dependencies
pub trait Injectable {
    fn inject(client: ApiClient, context: MessageContext) -> Self;
}

/// Factory for injectable services
#[derive(Debug, Clone)]
pub struct ServiceLocator {
    client: ApiClient,
    context: MessageContext,
}

impl ServiceLocator {
    pub fn new(client: ApiClient, context: MessageContext) -> Self {
        Self { client, context }
    }

    /// Build a new `S` with the current client and error channel
    pub fn service<S: Injectable>(&self) -> S {
        S::inject(self.client.clone(), self.context.clone())
    }

    /// The error channel injected into services
    pub fn context(&self) -> &MessageContext {
        &self.context
    }
}
