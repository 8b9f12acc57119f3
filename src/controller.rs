//! Quote view controller.
//!
//! Owns every piece of application state and applies all state transitions. After
//! each change it publishes an immutable [`QuoteViewState`] snapshot; the render
//! surface subscribes and redraws whenever a new snapshot arrives.
//!
//! The controller performs no UI-level guarding: it will happily start a second
//! fetch while one is loading, or favorite the placeholder. Disabling those triggers
//! is the render surface's job (see [`QuoteViewState::fetch_enabled`] and
//! [`QuoteViewState::favorite_enabled`]).

use crate::error::Result;
use crate::favorites::{Favorites, RECENT_FAVORITES_SHOWN};
use crate::particles::ParticleField;
use crate::quote::{Quote, QuoteSource};
use crate::store::FavoritesStore;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable snapshot of everything the view displays.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteViewState {
    pub app_title: String,
    pub current_quote: Quote,
    pub loading: bool,
    /// Message of the last failed fetch, cleared by the next fetch attempt
    pub error: Option<String>,
    /// Successful fetches this session
    pub quote_count: u64,
    pub favorites: Favorites,
    pub is_dark: bool,
    pub particles: ParticleField,
}

impl QuoteViewState {
    /// Whether the current quote is a favorite
    pub fn is_favorite(&self) -> bool {
        self.favorites.contains(&self.current_quote)
    }

    /// "Get Quote" is disabled while a fetch is in flight
    pub fn fetch_enabled(&self) -> bool {
        !self.loading
    }

    /// "Favorite" is disabled while the placeholder is displayed.
    ///
    /// This compares text, so a fetched quote identical to the placeholder cannot be
    /// favorited either.
    pub fn favorite_enabled(&self) -> bool {
        !self.current_quote.is_placeholder()
    }

    /// The quote block and the error message are never shown together
    pub fn shows_quote(&self) -> bool {
        self.error.is_none()
    }

    /// Favorites listed in the view, oldest first
    pub fn recent_favorites(&self) -> &[Quote] {
        self.favorites.most_recent(RECENT_FAVORITES_SHOWN)
    }
}

/// The single stateful unit of the application.
pub struct QuoteController {
    state: QuoteViewState,
    favorites_store: FavoritesStore,
    snapshots: watch::Sender<Arc<QuoteViewState>>,
}

impl QuoteController {
    /// Create the controller, loading favorites from `favorites_store` once.
    pub fn new(
        app_title: impl Into<String>,
        favorites_store: FavoritesStore,
        particles: ParticleField,
        is_dark: bool,
    ) -> Result<Self> {
        let favorites = favorites_store.load()?;
        log::debug!("loaded {} favorite quotes", favorites.len());

        let state = QuoteViewState {
            app_title: app_title.into(),
            current_quote: Quote::placeholder(),
            loading: false,
            error: None,
            quote_count: 0,
            favorites,
            is_dark,
            particles,
        };
        let (snapshots, _) = watch::channel(Arc::new(state.clone()));

        Ok(Self {
            state,
            favorites_store,
            snapshots,
        })
    }

    /// Receive a new snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<Arc<QuoteViewState>> {
        self.snapshots.subscribe()
    }

    /// Current state, borrowed
    pub fn state(&self) -> &QuoteViewState {
        &self.state
    }

    /// Current state as a shareable snapshot
    pub fn snapshot(&self) -> Arc<QuoteViewState> {
        Arc::new(self.state.clone())
    }

    /// Fetch a new quote from `source`, start to finish.
    ///
    /// Failures are never returned: they end up in [`QuoteViewState::error`].
    pub async fn request_quote(&mut self, source: &dyn QuoteSource) {
        self.begin_fetch();
        let result = source.fetch_quote().await;
        self.complete_fetch(result);
    }

    /// Enter the loading state and clear any previous error
    pub fn begin_fetch(&mut self) {
        self.state.loading = true;
        self.state.error = None;
        self.publish();
    }

    /// Apply the outcome of a fetch and leave the loading state
    pub fn complete_fetch(&mut self, result: Result<Quote>) {
        match result {
            Ok(quote) => {
                self.state.current_quote = quote;
                self.state.quote_count += 1;
                self.state.error = None;
            }
            Err(err) => {
                log::warn!("quote fetch failed: {}", err);
                self.state.error = Some(err.to_string());
            }
        }
        self.state.loading = false;
        self.publish();
    }

    /// Add the current quote to favorites, or remove it if already there
    pub fn toggle_favorite(&mut self) {
        let quote = self.state.current_quote.clone();
        self.state.favorites.toggle(&quote);
        self.persist_favorites();
        self.publish();
    }

    /// Remove every occurrence of `quote` from favorites
    pub fn remove_favorite(&mut self, quote: &Quote) {
        if self.state.favorites.remove(quote) {
            self.persist_favorites();
            self.publish();
        }
    }

    pub fn toggle_theme(&mut self) {
        self.state.is_dark = !self.state.is_dark;
        self.publish();
    }

    /// Advance the particle animation by one step
    pub fn tick(&mut self) {
        self.state.particles.tick();
        self.publish();
    }

    /// New viewport bounds for the particle field
    pub fn resize(&mut self, width: f64, height: f64) {
        self.state.particles.resize(width, height);
        self.publish();
    }

    fn persist_favorites(&self) {
        if let Err(err) = self.favorites_store.save(self.state.favorites.as_slice()) {
            log::warn!("failed to persist favorites: {}", err);
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(Arc::new(self.state.clone()));
    }
}
