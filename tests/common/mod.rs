//! Shared helpers for integration tests: a scripted stub quote server.

#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::get, Router};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Canned responses served in order; the last one repeats once the script runs out.
#[derive(Clone)]
pub struct StubState {
    script: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    last: Arc<Mutex<(StatusCode, String)>>,
    hits: Arc<AtomicUsize>,
}

impl StubState {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn quote_handler(State(state): State<StubState>) -> (StatusCode, String) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let next = state.script.lock().pop_front();
    match next {
        Some(response) => {
            *state.last.lock() = response.clone();
            response
        }
        None => state.last.lock().clone(),
    }
}

/// Start a stub quote service on an ephemeral port, returning its base URL.
pub async fn spawn_quote_server(
    script: Vec<(StatusCode, &str)>,
) -> std::io::Result<(String, StubState)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let state = StubState {
        script: Arc::new(Mutex::new(
            script
                .into_iter()
                .map(|(status, body)| (status, body.to_string()))
                .collect(),
        )),
        last: Arc::new(Mutex::new((StatusCode::NOT_FOUND, String::new()))),
        hits: Arc::new(AtomicUsize::new(0)),
    };

    let app = Router::new()
        .route("/quote", get(quote_handler))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{}", addr), state))
}
