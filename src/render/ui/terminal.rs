//! Terminal UI implementation using ratatui
//!
//! Draws the particle field full-screen, then a centered card holding the title,
//! counters, controls, the quote (or error) and the recent favorites.

use crate::controller::QuoteViewState;
use crate::error::Result;
use crate::render::ui::{ColorTheme, UIRenderer};
use ratatui::crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Widest the card is allowed to grow.
const MAX_CARD_WIDTH: u16 = 76;
/// Particles at least this large use the bright color.
const LARGE_PARTICLE: f64 = 2.5;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Ok(Self { terminal: None })
    }

    /// Draw one frame of the view
    pub fn draw(frame: &mut Frame, view_state: &QuoteViewState) {
        let theme = ColorTheme::for_mode(view_state.is_dark);
        let area = frame.size();

        Self::render_particles(frame, area, view_state, &theme);
        Self::render_card(frame, area, view_state, &theme);
    }

    fn render_particles(
        frame: &mut Frame,
        area: Rect,
        view_state: &QuoteViewState,
        theme: &ColorTheme,
    ) {
        let field = &view_state.particles;
        let (width, height) = (field.width(), field.height());

        // Canvas y grows upward; the field's y grows downward like screen rows
        let mut small = Vec::new();
        let mut large = Vec::new();
        for p in field.particles() {
            let point = (p.x, height - p.y);
            if p.size >= LARGE_PARTICLE {
                large.push(point);
            } else {
                small.push(point);
            }
        }

        let particle_color = theme.particle;
        let large_color = theme.particle_large;
        let canvas = Canvas::default()
            .background_color(theme.background)
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &small,
                    color: particle_color,
                });
                ctx.draw(&Points {
                    coords: &large,
                    color: large_color,
                });
            });
        frame.render_widget(canvas, area);
    }

    fn render_card(frame: &mut Frame, area: Rect, view_state: &QuoteViewState, theme: &ColorTheme) {
        let card_width = area.width.saturating_sub(4).min(MAX_CARD_WIDTH).max(1);
        let inner_width = card_width.saturating_sub(2).max(1);
        let lines = Self::card_lines(view_state, theme);

        let wrapped_rows: usize = lines
            .iter()
            .map(|line| line.width().max(1).div_ceil(inner_width as usize))
            .sum();
        let card_height = (wrapped_rows as u16).saturating_add(2).min(area.height);

        let card = Rect {
            x: area.x + (area.width.saturating_sub(card_width)) / 2,
            y: area.y + (area.height.saturating_sub(card_height)) / 2,
            width: card_width.min(area.width),
            height: card_height,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background).fg(theme.text));
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, card);
        frame.render_widget(paragraph, card);
    }

    /// Text content of the card, one entry per logical line
    pub fn card_lines(view_state: &QuoteViewState, theme: &ColorTheme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(view_state.app_title.clone(), theme.title)),
            Line::from(Span::styled(
                format!(
                    "Quotes fetched: {}   Favorites: {}",
                    view_state.quote_count,
                    view_state.favorites.len()
                ),
                Style::default().fg(theme.stats),
            )),
            Line::default(),
            Self::controls_line(view_state, theme),
            Line::default(),
        ];

        match &view_state.error {
            Some(message) => lines.push(Line::from(Span::styled(
                message.clone(),
                Style::default()
                    .fg(theme.error_text)
                    .add_modifier(Modifier::BOLD),
            ))),
            None => lines.push(Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", view_state.current_quote),
                theme.quote,
            ))),
        }

        let recent = view_state.recent_favorites();
        if !recent.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Your Favorite Quotes",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )));
            for (slot, favorite) in recent.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("[{}] \u{2715} ", slot + 1),
                        Style::default().fg(theme.stats),
                    ),
                    Span::styled(
                        format!("\"{}\"", favorite),
                        Style::default().fg(theme.text),
                    ),
                ]));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "[q] quit",
            Style::default().fg(theme.stats),
        )));
        lines
    }

    fn controls_line(view_state: &QuoteViewState, theme: &ColorTheme) -> Line<'static> {
        let style_for = |enabled: bool| {
            if enabled {
                theme.control
            } else {
                theme.control_disabled
            }
        };

        let fetch_label = if view_state.loading {
            " Loading\u{2026} ".to_string()
        } else {
            " [g] Get Quote ".to_string()
        };

        let favorite_enabled = view_state.favorite_enabled();
        let heart = if view_state.is_favorite() {
            Span::styled(
                "\u{2665}",
                style_for(favorite_enabled).fg(theme.favorite_active),
            )
        } else {
            Span::styled("\u{2661}", style_for(favorite_enabled))
        };

        let theme_icon = if view_state.is_dark { "\u{2600}" } else { "\u{263e}" };

        Line::from(vec![
            Span::styled(fetch_label, style_for(view_state.fetch_enabled())),
            Span::raw("  "),
            Span::styled(" [f] ", style_for(favorite_enabled)),
            heart,
            Span::styled(" Favorite ", style_for(favorite_enabled)),
            Span::raw("  "),
            Span::styled(format!(" [t] {} Theme ", theme_icon), theme.control),
        ])
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &QuoteViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            terminal.draw(|frame| Self::draw(frame, view_state))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, Show)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(io::stdout(), SetTitle(title))?;
        Ok(())
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
