//! Data services
//!
//! # Architecture
//!
//! ```text
//! ServiceLocator ── inject(ApiClient, MessageContext) ──▶ JokeService
//!                                                          │
//!            Service::get ── GET /jokes/{category}/ten ────┤
//!                                                          │ on failure
//!                                      ErrorHandling::handle_error("Joke error")
//! ```
//!
//! The read path (`Service`) and the write path (`WriteService`) are
//! separate capability sets. Only reads are backed by the joke API; the
//! write operations report `ServiceError::NotImplemented` up front.

mod error_handling;
mod joke;
mod locator;

#[cfg(test)]
pub(crate) mod test_support;

pub use error_handling::ErrorHandling;
pub use joke::JokeService;
#[cfg(test)]
pub use joke::JOKE_ERROR;
pub use locator::{Injectable, ServiceLocator};

use futures::stream::BoxStream;
use std::fmt;

/// Asynchronous sequence of record batches produced by a service call
pub type Batches<T> = BoxStream<'static, Vec<T>>;

/// Read capability: fetch many records
pub trait Service {
    /// Record type
    type Item;
    /// Query parameter for `get`
    type Query;

    /// Fetch records matching `query`
    ///
    /// Yields zero or more batches. A failed fetch yields nothing and is
    /// reported through the error channel instead.
    fn get(&self, query: Self::Query) -> Batches<Self::Item>;
}

/// Write capability: create, update and delete records
#[allow(dead_code)] // Write capability, not backed by the joke API
pub trait WriteService: Service {
    fn post(&self, item: Self::Item) -> Result<Batches<Self::Item>, ServiceError>;

    fn patch(&self, item: Self::Item) -> Result<Batches<Self::Item>, ServiceError>;

    fn delete(&self, id: u64) -> Result<Batches<Self::Item>, ServiceError>;
}

/// Errors raised synchronously by service operations
#[allow(dead_code)] // Only produced by the write capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The operation is not supported by this service
    NotImplemented {
        service: &'static str,
        operation: &'static str,
    },
}

#[allow(dead_code)]
impl ServiceError {
    pub fn not_implemented(service: &'static str, operation: &'static str) -> Self {
        Self::NotImplemented { service, operation }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented { service, operation } => {
                write!(f, "{} is not implemented for {}", operation, service)
            }
        }
    }
}

impl std::error::Error for ServiceError {}
