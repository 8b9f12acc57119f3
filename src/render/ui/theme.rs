//! Color themes using ratatui colors.
//!
//! The view has exactly two themes, light and dark, switched at runtime.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    /// Screen background
    pub background: Color,

    /// Body text
    pub text: Color,

    /// Application title
    pub title: Style,

    /// Counters under the title
    pub stats: Color,

    /// Quote block text
    pub quote: Style,

    /// Enabled control hint
    pub control: Style,

    /// Disabled control hint
    pub control_disabled: Style,

    /// Favorite marker when the current quote is a favorite
    pub favorite_active: Color,

    /// Error message text
    pub error_text: Color,

    /// Card border
    pub border: Color,

    /// Small particles
    pub particle: Color,

    /// Large particles
    pub particle_large: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorTheme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 250),
            text: Color::Rgb(40, 40, 60),
            title: Style::default()
                .fg(Color::Rgb(88, 60, 200))
                .add_modifier(Modifier::BOLD),
            stats: Color::Rgb(110, 110, 130),
            quote: Style::default()
                .fg(Color::Rgb(30, 30, 50))
                .add_modifier(Modifier::ITALIC),
            control: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(88, 60, 200)),
            control_disabled: Style::default()
                .fg(Color::Rgb(160, 160, 170))
                .bg(Color::Rgb(220, 220, 228)),
            favorite_active: Color::Red,
            error_text: Color::Rgb(200, 30, 30),
            border: Color::Rgb(180, 180, 200),
            particle: Color::Rgb(170, 150, 230),
            particle_large: Color::Rgb(120, 90, 220),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 28),
            text: Color::Rgb(220, 220, 235),
            title: Style::default()
                .fg(Color::Rgb(180, 160, 255))
                .add_modifier(Modifier::BOLD),
            stats: Color::Rgb(150, 150, 170),
            quote: Style::default()
                .fg(Color::Rgb(240, 240, 250))
                .add_modifier(Modifier::ITALIC),
            control: Style::default()
                .fg(Color::Rgb(18, 18, 28))
                .bg(Color::Rgb(180, 160, 255)),
            control_disabled: Style::default()
                .fg(Color::Rgb(90, 90, 105))
                .bg(Color::Rgb(40, 40, 55)),
            favorite_active: Color::LightRed,
            error_text: Color::LightRed,
            border: Color::Rgb(70, 70, 95),
            particle: Color::Rgb(90, 80, 140),
            particle_large: Color::Rgb(150, 130, 230),
        }
    }

    /// Theme for the given mode
    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
