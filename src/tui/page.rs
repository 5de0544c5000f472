// Joke page state machine
//
// Holds the selected category and the current joke list. Fetches run on
// their own tasks and report back through `PageEvent`s; the event loop
// applies them one at a time. There is no cancellation or sequencing:
// whichever response is delivered last wins, even if the category changed
// after the button was pressed.

use crate::models::{Category, Joke};
use crate::services::Service;
use futures::StreamExt;
use tokio::sync::mpsc;

/// Messages from fetch tasks to the event loop
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// A batch of jokes arrived; replaces the list
    Loaded(Vec<Joke>),
    /// A fetch task finished (successfully or not)
    Finished,
}

/// Page state
#[derive(Debug, Clone, PartialEq)]
pub struct JokePage {
    category: Category,
    jokes: Vec<Joke>,
    in_flight: usize,
}

impl JokePage {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            jokes: Vec::new(),
            in_flight: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    /// Change the selected category; does not fetch
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
    }

    /// Button press: capture the category to fetch and mark a fetch in flight
    pub fn begin_fetch(&mut self) -> Category {
        self.in_flight += 1;
        self.category
    }

    /// Apply a message from a fetch task
    pub fn apply(&mut self, event: PageEvent) {
        match event {
            PageEvent::Loaded(jokes) => self.jokes = jokes,
            PageEvent::Finished => self.in_flight = self.in_flight.saturating_sub(1),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Rendered rows: punchline then setup, in response order
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.jokes
            .iter()
            .map(|joke| (joke.punchline.as_str(), joke.setup.as_str()))
    }
}

/// Drive one `get` to completion, forwarding batches to the page
pub async fn run_fetch<S>(service: S, category: Category, tx: mpsc::Sender<PageEvent>)
where
    S: Service<Item = Joke, Query = Category>,
{
    let mut batches = service.get(category);
    while let Some(jokes) = batches.next().await {
        if tx.send(PageEvent::Loaded(jokes)).await.is_err() {
            // Event loop is gone (app quitting)
            return;
        }
    }
    let _ = tx.send(PageEvent::Finished).await;
}
