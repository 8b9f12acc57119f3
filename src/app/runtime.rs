//! The application event loop.
//!
//! Everything that mutates the controller runs here, on one task: user actions from
//! the input thread, results from the fetch worker and animation ticks. Redraws are
//! driven by the controller's snapshot channel.

use crate::app::timer::AnimationTimer;
use crate::controller::QuoteController;
use crate::error::Result;
use crate::input::InputAction;
use crate::quote::{fetch_worker_loop, QuoteSource};
use crate::render::{FetchCommand, RenderLoopState};
use crate::render::ui::UIRenderer;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

const FETCH_CHANNEL_CAPACITY: usize = 8;

/// Run until a quit action arrives or the input channel closes.
///
/// The fetch worker and animation timer live only as long as this call; both are
/// torn down before returning, whether the loop ended normally or with an error.
pub async fn run_event_loop(
    controller: &mut QuoteController,
    renderer: &mut dyn UIRenderer,
    source: Arc<dyn QuoteSource>,
    mut input_rx: UnboundedReceiver<InputAction>,
) -> Result<()> {
    let (fetch_tx, fetch_rx) = mpsc::channel(FETCH_CHANNEL_CAPACITY);
    let (response_tx, mut response_rx) = mpsc::channel(FETCH_CHANNEL_CAPACITY);
    let worker = tokio::spawn(fetch_worker_loop(fetch_rx, response_tx, source));

    let (tick_tx, mut tick_rx) = mpsc::channel(1);
    let mut timer = AnimationTimer::start(AnimationTimer::PERIOD, tick_tx);

    let mut snapshots = controller.subscribe();
    let mut loop_state = RenderLoopState::new();

    let result: Result<()> = async {
        let initial = Arc::clone(&snapshots.borrow_and_update());
        renderer.render(&initial)?;

        loop {
            // Redraw pending changes before handling anything else
            tokio::select! {
                biased;

                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = Arc::clone(&snapshots.borrow_and_update());
                    renderer.render(&snapshot)?;
                }
                action = input_rx.recv() => {
                    let Some(action) = action else {
                        log::debug!("input channel closed");
                        break;
                    };
                    if !loop_state.process_action(action, controller, &fetch_tx).await? {
                        break;
                    }
                }
                Some(response) = response_rx.recv() => {
                    loop_state.handle_response(response, controller);
                }
                Some(_) = tick_rx.recv() => {
                    controller.tick();
                }
            }
        }
        Ok(())
    }
    .await;

    log::debug!("tearing down event loop");
    timer.stop();
    // An in-flight fetch is abandoned; its result has nowhere to go
    let _ = fetch_tx.try_send(FetchCommand::Shutdown);
    worker.abort();

    result
}
