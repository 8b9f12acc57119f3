//! UI renderer trait
//!
//! This module defines the `UIRenderer` trait: the render surface that draws
//! controller snapshots and owns terminal setup and teardown.

use crate::controller::QuoteViewState;
use crate::error::Result;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Draw a snapshot of the view state
    ///
    /// This method should:
    /// - Draw the particle field behind everything else
    /// - Show either the quote or the error, never both
    /// - Reflect disabled triggers (loading, placeholder)
    fn render(&mut self, view_state: &QuoteViewState) -> Result<()>;

    /// Take over the terminal
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enter the alternate screen
    /// - Hide cursor
    fn initialize(&mut self) -> Result<()>;

    /// Leave the alternate screen and restore the cursor
    fn cleanup(&mut self) -> Result<()>;

    /// Size in cells, used to derive the particle viewport
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)

    /// Set the window title, where the surface has one
    fn set_title(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }
}
