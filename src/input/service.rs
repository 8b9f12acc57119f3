//! Key mapping and the input thread.
//!
//! Consumes coalesced raw events, maps keys through the [`KeyMap`], and yields
//! `InputAction`s for the event loop.

use crate::error::Result;
use crate::favorites::RECENT_FAVORITES_SHOWN;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level user intents.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// "Get Quote"
    FetchQuote,
    ToggleFavorite,
    ToggleTheme,
    /// Remove the favorite shown in this slot of the recent list (0-based)
    RemoveFavorite(usize),
    Quit,
    Resize {
        width: u16,
        height: u16,
    },
    NoAction,
    InvalidInput,
}

/// Key bindings for the quote view.
///
/// | key | action |
/// |---|---|
/// | `g`, `Enter`, `Space` | get quote |
/// | `f` | toggle favorite |
/// | `t` | toggle theme |
/// | `1`..`3` | remove listed favorite |
/// | `q`, `Esc`, `Ctrl-C` | quit |
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap;

impl KeyMap {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputAction::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc if plain => InputAction::Quit,
            KeyCode::Char('g') | KeyCode::Char(' ') | KeyCode::Enter if plain => {
                InputAction::FetchQuote
            }
            KeyCode::Char('f') if plain => InputAction::ToggleFavorite,
            KeyCode::Char('t') if plain => InputAction::ToggleTheme,
            KeyCode::Char(ch @ '1'..='9') if plain => {
                let slot = ch as usize - '1' as usize;
                if slot < RECENT_FAVORITES_SHOWN {
                    InputAction::RemoveFavorite(slot)
                } else {
                    InputAction::InvalidInput
                }
            }
            _ => InputAction::InvalidInput,
        }
    }
}

/// Turns terminal events into `InputAction`s.
pub struct InputService {
    key_map: KeyMap,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            key_map: KeyMap::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.try_flush() {
                if let Some(action) = self.process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.try_flush() {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.key_map.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the event loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
