//! Application orchestration layer
//!
//! Wires configuration, storage, the quote service and the renderer together, then
//! hands control to the event loop in [`runtime`].

pub mod runtime;
pub mod timer;

use crate::config::AppConfig;
use crate::controller::QuoteController;
use crate::error::Result;
use crate::input::{spawn_input_thread, InputAction};
use crate::particles::{viewport_from_cells, ParticleField};
use crate::quote::{HttpQuoteService, QuoteSource};
use crate::render::ui::UIRenderer;
use crate::store::{FavoritesStore, JsonFileStore, KeyValueStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub use timer::AnimationTimer;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application orchestrator
pub struct Application {
    config: AppConfig,
    controller: QuoteController,
    quote_source: Arc<dyn QuoteSource>,
    ui_renderer: Box<dyn UIRenderer>,
}

impl Application {
    /// Create the application with the HTTP quote service and the on-disk store
    pub fn new(config: AppConfig, ui_renderer: Box<dyn UIRenderer>) -> Result<Self> {
        let store_path = config
            .store_path
            .clone()
            .unwrap_or_else(JsonFileStore::default_path);
        log::debug!("using store at {}", store_path.display());

        let source = Arc::new(HttpQuoteService::new(config.api_url.clone()));
        let store = Arc::new(JsonFileStore::new(store_path));
        Self::with_components(config, source, store, ui_renderer)
    }

    /// Create the application from explicit parts
    pub fn with_components(
        config: AppConfig,
        quote_source: Arc<dyn QuoteSource>,
        store: Arc<dyn KeyValueStore>,
        ui_renderer: Box<dyn UIRenderer>,
    ) -> Result<Self> {
        let (cols, rows) = ui_renderer.get_terminal_size()?;
        let (width, height) = viewport_from_cells(cols, rows);

        let controller = QuoteController::new(
            config.app_title.clone(),
            FavoritesStore::new(store),
            ParticleField::new(width, height),
            config.dark,
        )?;

        Ok(Self {
            config,
            controller,
            quote_source,
            ui_renderer,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn controller(&self) -> &QuoteController {
        &self.controller
    }

    /// Run with keyboard input from the terminal
    pub async fn run(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread = spawn_input_thread(tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let result = self.run_with_input(rx).await;

        shutdown.store(true, Ordering::SeqCst);
        if input_thread.join().is_err() {
            log::error!("input thread panicked");
        }
        result
    }

    /// Run with actions from an arbitrary channel. The terminal is restored even when
    /// the loop fails.
    pub async fn run_with_input(&mut self, input_rx: UnboundedReceiver<InputAction>) -> Result<()> {
        self.ui_renderer.initialize()?;
        if let Err(err) = self.ui_renderer.set_title(&self.config.app_title) {
            log::warn!("could not set window title: {}", err);
        }

        let result = runtime::run_event_loop(
            &mut self.controller,
            self.ui_renderer.as_mut(),
            Arc::clone(&self.quote_source),
            input_rx,
        )
        .await;

        let cleanup = self.ui_renderer.cleanup();
        result.and(cleanup)
    }
}
