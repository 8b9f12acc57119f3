//! Terminal rendering components.
//!
//! The concrete ratatui renderer, the renderer trait it implements, and the two
//! color themes.

pub mod renderer;
pub mod terminal;
pub mod theme;

pub use renderer::UIRenderer;
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
