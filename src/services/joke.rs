//! Joke service: the `Service` implementation for the joke resource

use super::{Batches, ErrorHandling, Injectable, Service, ServiceError, WriteService};
use crate::api::ApiClient;
use crate::message::MessageContext;
use crate::models::{Category, Joke};
use futures::{future, stream, StreamExt};

/// Message published to the error channel when a fetch fails
pub const JOKE_ERROR: &str = "Joke error";

/// Service for `/jokes/{category}/ten`
///
/// Holds no state beyond the shared client and error channel, so it is
/// cheap to create per use.
#[derive(Debug, Clone)]
pub struct JokeService {
    client: ApiClient,
    context: MessageContext,
}

impl JokeService {
    pub fn new(client: ApiClient, context: MessageContext) -> Self {
        Self { client, context }
    }

    /// Request path for a category
    pub fn path(category: Category) -> String {
        format!("/jokes/{}/ten", category.as_str())
    }

    /// One fetch; `None` after reporting a failure
    async fn fetch(&self, category: Category) -> Option<Vec<Joke>> {
        match self
            .client
            .get_json::<Vec<Joke>>(&Self::path(category))
            .await
        {
            Ok(jokes) => {
                tracing::debug!("Fetched {} {} jokes", jokes.len(), category);
                Some(jokes)
            }
            Err(e) => {
                tracing::warn!("Joke fetch failed for {}: {}", category, e);
                self.handle_error(JOKE_ERROR);
                None
            }
        }
    }
}

impl Service for JokeService {
    type Item = Joke;
    type Query = Category;

    fn get(&self, category: Category) -> Batches<Joke> {
        let this = self.clone();
        stream::once(async move { this.fetch(category).await })
            .filter_map(future::ready)
            .boxed()
    }
}

impl WriteService for JokeService {
    fn post(&self, _joke: Joke) -> Result<Batches<Joke>, ServiceError> {
        Err(ServiceError::not_implemented("jokes", "post"))
    }

    fn patch(&self, _joke: Joke) -> Result<Batches<Joke>, ServiceError> {
        Err(ServiceError::not_implemented("jokes", "patch"))
    }

    fn delete(&self, _id: u64) -> Result<Batches<Joke>, ServiceError> {
        Err(ServiceError::not_implemented("jokes", "delete"))
    }
}

impl ErrorHandling for JokeService {
    fn message_context(&self) -> &MessageContext {
        &self.context
    }
}

impl Injectable for JokeService {
    fn inject(client: ApiClient, context: MessageContext) -> Self {
        Self::new(client, context)
    }
}
