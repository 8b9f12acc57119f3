//! Render coordination.
//!
//! Mediates between input actions, the controller, and the fetch worker. This is
//! where the view's trigger guards live: "Get Quote" is ignored while loading and
//! "Favorite" is ignored while the placeholder is shown.

use crate::controller::QuoteController;
use crate::error::{Result, RquoteError};
use crate::input::InputAction;
use crate::particles::viewport_from_cells;
use crate::quote::service::STATUS_FAILURE_MESSAGE;
use crate::render::protocol::{FetchCommand, FetchResponse, RequestId};
use tokio::sync::mpsc;

/// Tracks render-related state that must persist across input actions and worker responses.
#[derive(Debug, Default)]
pub struct RenderLoopState {
    next_request_id: RequestId,
    latest_fetch_request: Option<RequestId>,
}

impl RenderLoopState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the fetch whose response is awaited, if any
    pub fn pending_fetch(&self) -> Option<RequestId> {
        self.latest_fetch_request
    }

    /// Apply one user intent. Returns false when the view should close.
    pub async fn process_action(
        &mut self,
        action: InputAction,
        controller: &mut QuoteController,
        fetch_tx: &mpsc::Sender<FetchCommand>,
    ) -> Result<bool> {
        match action {
            InputAction::Quit => Ok(false),
            InputAction::FetchQuote => {
                if !controller.state().fetch_enabled() {
                    return Ok(true);
                }
                let request_id = self.next_request_id;
                self.next_request_id += 1;
                self.latest_fetch_request = Some(request_id);
                controller.begin_fetch();

                if fetch_tx
                    .send(FetchCommand::Fetch { request_id })
                    .await
                    .is_err()
                {
                    log::error!("fetch worker is gone; request {} dropped", request_id);
                    self.latest_fetch_request = None;
                    controller.complete_fetch(Err(RquoteError::fetch(STATUS_FAILURE_MESSAGE)));
                }
                Ok(true)
            }
            InputAction::ToggleFavorite => {
                if controller.state().favorite_enabled() {
                    controller.toggle_favorite();
                }
                Ok(true)
            }
            InputAction::RemoveFavorite(slot) => {
                let target = controller.state().recent_favorites().get(slot).cloned();
                if let Some(quote) = target {
                    controller.remove_favorite(&quote);
                }
                Ok(true)
            }
            InputAction::ToggleTheme => {
                controller.toggle_theme();
                Ok(true)
            }
            InputAction::Resize { width, height } => {
                let (width, height) = viewport_from_cells(width, height);
                controller.resize(width, height);
                Ok(true)
            }
            InputAction::NoAction | InputAction::InvalidInput => Ok(true),
        }
    }

    /// Apply a fetch worker response, ignoring any that are no longer awaited
    pub fn handle_response(&mut self, response: FetchResponse, controller: &mut QuoteController) {
        match response {
            FetchResponse::Completed { request_id, result } => {
                if Some(request_id) != self.latest_fetch_request {
                    log::debug!("ignoring stale fetch response {}", request_id);
                    return;
                }
                self.latest_fetch_request = None;
                controller.complete_fetch(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::ParticleField;
    use crate::quote::Quote;
    use crate::store::{FavoritesStore, MemoryStore, FAVORITES_KEY};
    use std::sync::Arc;

    fn controller(store: MemoryStore) -> QuoteController {
        QuoteController::new(
            "t",
            FavoritesStore::new(Arc::new(store)),
            ParticleField::new(80.0, 24.0),
            false,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fetch_sends_command_and_enters_loading() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());
        let (tx, mut rx) = mpsc::channel(4);

        assert!(state
            .process_action(InputAction::FetchQuote, &mut controller, &tx)
            .await
            .unwrap());

        assert!(controller.state().loading);
        assert_eq!(rx.recv().await, Some(FetchCommand::Fetch { request_id: 0 }));
        assert_eq!(state.pending_fetch(), Some(0));
    }

    #[tokio::test]
    async fn fetch_ignored_while_loading() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());
        let (tx, mut rx) = mpsc::channel(4);

        state
            .process_action(InputAction::FetchQuote, &mut controller, &tx)
            .await
            .unwrap();
        state
            .process_action(InputAction::FetchQuote, &mut controller, &tx)
            .await
            .unwrap();

        assert_eq!(rx.recv().await, Some(FetchCommand::Fetch { request_id: 0 }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn response_completes_pending_fetch() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());
        let (tx, _rx) = mpsc::channel(4);

        state
            .process_action(InputAction::FetchQuote, &mut controller, &tx)
            .await
            .unwrap();
        state.handle_response(
            FetchResponse::Completed {
                request_id: 0,
                result: Ok(Quote::new("hello")),
            },
            &mut controller,
        );

        assert!(!controller.state().loading);
        assert_eq!(controller.state().current_quote.as_str(), "hello");
        assert_eq!(state.pending_fetch(), None);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());

        state.handle_response(
            FetchResponse::Completed {
                request_id: 41,
                result: Ok(Quote::new("late")),
            },
            &mut controller,
        );

        assert!(controller.state().current_quote.is_placeholder());
        assert_eq!(controller.state().quote_count, 0);
    }

    #[tokio::test]
    async fn favorite_guarded_on_placeholder() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());
        let (tx, _rx) = mpsc::channel(4);

        state
            .process_action(InputAction::ToggleFavorite, &mut controller, &tx)
            .await
            .unwrap();
        assert!(controller.state().favorites.is_empty());

        controller.complete_fetch(Ok(Quote::new("real")));
        state
            .process_action(InputAction::ToggleFavorite, &mut controller, &tx)
            .await
            .unwrap();
        assert!(controller.state().is_favorite());
    }

    #[tokio::test]
    async fn fetched_placeholder_text_cannot_be_favorited() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());
        let (tx, _rx) = mpsc::channel(4);

        // Guard compares text, so a real quote equal to the placeholder is blocked too
        controller.complete_fetch(Ok(Quote::placeholder()));
        assert_eq!(controller.state().quote_count, 1);
        state
            .process_action(InputAction::ToggleFavorite, &mut controller, &tx)
            .await
            .unwrap();

        assert!(!controller.state().favorite_enabled());
        assert!(controller.state().favorites.is_empty());
    }

    #[tokio::test]
    async fn dead_worker_surfaces_as_fetch_failure() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());
        let (tx, rx) = mpsc::channel(4);
        drop(rx);

        let keep_running = state
            .process_action(InputAction::FetchQuote, &mut controller, &tx)
            .await
            .unwrap();

        assert!(keep_running);
        assert!(!controller.state().loading);
        assert_eq!(
            controller.state().error.as_deref(),
            Some(STATUS_FAILURE_MESSAGE)
        );
        assert_eq!(state.pending_fetch(), None);

        // Nothing stuck: the next attempt is accepted again
        assert!(controller.state().fetch_enabled());
    }

    #[tokio::test]
    async fn remove_favorite_by_listed_slot() {
        let store = MemoryStore::with_item(FAVORITES_KEY, r#"["a","b","c","d"]"#);
        let mut state = RenderLoopState::new();
        let mut controller = controller(store);
        let (tx, _rx) = mpsc::channel(4);

        // Slot 0 of the recent list is "b"; "a" is not shown
        state
            .process_action(InputAction::RemoveFavorite(0), &mut controller, &tx)
            .await
            .unwrap();
        state
            .process_action(InputAction::RemoveFavorite(2), &mut controller, &tx)
            .await
            .unwrap();

        let left: Vec<String> = controller
            .state()
            .favorites
            .iter()
            .map(|q| q.to_string())
            .collect();
        assert_eq!(left, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn quit_stops_loop_and_resize_updates_bounds() {
        let mut state = RenderLoopState::new();
        let mut controller = controller(MemoryStore::new());
        let (tx, _rx) = mpsc::channel(4);

        state
            .process_action(
                InputAction::Resize {
                    width: 100,
                    height: 50,
                },
                &mut controller,
                &tx,
            )
            .await
            .unwrap();
        assert_eq!(
            (
                controller.state().particles.width(),
                controller.state().particles.height()
            ),
            viewport_from_cells(100, 50)
        );

        assert!(!state
            .process_action(InputAction::Quit, &mut controller, &tx)
            .await
            .unwrap());
    }
}
