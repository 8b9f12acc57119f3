use crate::quote::QuoteSource;
use crate::render::protocol::{FetchCommand, FetchResponse};
use std::sync::Arc;
use tokio::sync::mpsc::{Receiver, Sender};

/// Run the fetch worker, serving commands from the coordinator until shutdown.
///
/// Exits quietly when the coordinator has gone away, dropping any result that can
/// no longer be delivered.
pub async fn fetch_worker_loop(
    mut rx: Receiver<FetchCommand>,
    tx: Sender<FetchResponse>,
    source: Arc<dyn QuoteSource>,
) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            FetchCommand::Fetch { request_id } => {
                let result = source.fetch_quote().await;
                let response = FetchResponse::Completed { request_id, result };
                if tx.send(response).await.is_err() {
                    log::debug!("dropping fetch result {}: view is gone", request_id);
                    break;
                }
            }
            FetchCommand::Shutdown => break,
        }
    }
}
