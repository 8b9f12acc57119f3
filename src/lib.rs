//! # rquote - Random Quote Viewer
//!
//! A terminal application that fetches random quotes from an HTTP service, keeps a
//! persisted list of favorites and draws a slowly drifting particle field behind
//! the content.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Layered configuration (defaults, TOML file, environment, CLI)
//! - [`quote`] - The quote type, the HTTP quote service and the fetch worker
//! - [`store`] - Key-value storage and the favorites store built on it
//! - [`favorites`] - The ordered, duplicate-free favorites list
//! - [`particles`] - The decorative particle field
//! - [`controller`] - The single owner of application state
//! - [`input`] - Terminal input collection and key mapping
//! - [`render`] - Loop coordination and the ratatui renderer
//! - [`app`] - Application wiring and the async event loop

// Core modules
pub mod config;
pub mod error;

// Domain
pub mod controller;
pub mod favorites;
pub mod particles;
pub mod quote;
pub mod store;

// Subsystems
pub mod app;
pub mod input;
pub mod render;

// Re-export commonly used types for convenience
pub use error::{Result, RquoteError};

// Public API surface for external usage
pub use app::Application;
pub use config::{AppConfig, CliOverrides};
pub use controller::{QuoteController, QuoteViewState};
pub use quote::{HttpQuoteService, Quote, QuoteSource};
pub use store::{FavoritesStore, JsonFileStore, KeyValueStore, MemoryStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
