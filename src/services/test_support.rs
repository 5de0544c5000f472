//! In-process joke API for tests
//!
//! Serves `/jokes/{category}/ten` from an axum router bound to an ephemeral
//! port and records every request it sees.

use crate::models::Joke;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Delay before a slow server answers
pub const SLOW_RESPONSE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy)]
enum Mode {
    Ok,
    Fail,
    Malformed,
    Slow,
}

#[derive(Clone)]
struct MockState {
    mode: Mode,
    hits: Arc<Mutex<Vec<String>>>,
    content_type: Arc<Mutex<Option<String>>>,
}

/// Running mock server
pub struct MockJokeApi {
    pub base_url: String,
    state: MockState,
}

impl MockJokeApi {
    /// Server answering with canned jokes
    pub async fn spawn() -> Self {
        Self::start(Mode::Ok).await
    }

    /// Server answering 500 to everything
    pub async fn failing() -> Self {
        Self::start(Mode::Fail).await
    }

    /// Server answering 200 with a body that is not JSON
    pub async fn malformed() -> Self {
        Self::start(Mode::Malformed).await
    }

    /// Server that answers normally after `SLOW_RESPONSE`
    pub async fn slow() -> Self {
        Self::start(Mode::Slow).await
    }

    async fn start(mode: Mode) -> Self {
        let state = MockState {
            mode,
            hits: Arc::new(Mutex::new(Vec::new())),
            content_type: Arc::new(Mutex::new(None)),
        };

        let app = Router::new()
            .route("/jokes/:category/ten", get(jokes_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock joke api");
        let addr = listener.local_addr().expect("mock api address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Jokes this server returns for a category
    pub fn jokes_for(&self, category: &str) -> Vec<Joke> {
        canned_jokes(category)
    }

    /// Request paths received so far, in order
    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }

    /// Content-Type header of the most recent request
    pub fn last_content_type(&self) -> Option<String> {
        self.state.content_type.lock().unwrap().clone()
    }
}

/// Base URL of a port nothing listens on
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}", addr)
}

fn canned_jokes(category: &str) -> Vec<Joke> {
    match category {
        "general" => vec![Joke {
            id: 1,
            setup: "S1".to_string(),
            punchline: "P1".to_string(),
        }],
        _ => vec![
            Joke {
                id: 10,
                setup: "Why do programmers prefer dark mode?".to_string(),
                punchline: "Because light attracts bugs.".to_string(),
            },
            Joke {
                id: 11,
                setup: "How many programmers does it take to change a light bulb?".to_string(),
                punchline: "None, that's a hardware problem.".to_string(),
            },
        ],
    }
}

async fn jokes_handler(
    State(state): State<MockState>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> Response {
    state
        .hits
        .lock()
        .unwrap()
        .push(format!("/jokes/{}/ten", category));
    *state.content_type.lock().unwrap() = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    match state.mode {
        Mode::Ok => Json(canned_jokes(&category)).into_response(),
        Mode::Fail => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Mode::Malformed => (StatusCode::OK, "not json").into_response(),
        Mode::Slow => {
            tokio::time::sleep(SLOW_RESPONSE).await;
            Json(canned_jokes(&category)).into_response()
        }
    }
}
