//! Low-level input collection: crossterm polling, resize coalescing, and translation
//! into primitive events that the higher-level input service can consume.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyEvent};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default coalescing window in milliseconds for resize events.
const DEFAULT_COALESCE_WINDOW_MS: u64 = 30;
/// How long `poll_event` waits when no timeout is given.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Key presses and settled terminal sizes.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
}

/// Collapses a burst of resize events into the last size seen.
///
/// Dragging a terminal corner emits dozens of resizes; only the final one matters.
#[derive(Debug, Clone)]
pub struct ResizeCoalescer {
    window: Duration,
    pending: Option<PendingResize>,
}

#[derive(Debug, Clone)]
struct PendingResize {
    width: u16,
    height: u16,
    last_event: Instant,
}

impl ResizeCoalescer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn with_default_window() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COALESCE_WINDOW_MS))
    }

    /// Register a resize, replacing any pending one
    pub fn push(&mut self, width: u16, height: u16, now: Instant) {
        self.pending = Some(PendingResize {
            width,
            height,
            last_event: now,
        });
    }

    /// Flush the pending resize if the coalescing window has expired.
    pub fn flush_if_stale(&mut self, now: Instant) -> Option<(u16, u16)> {
        if let Some(pending) = &self.pending {
            if now.duration_since(pending.last_event) >= self.window {
                return self.flush();
            }
        }
        None
    }

    /// Flush the pending resize immediately.
    pub fn flush(&mut self) -> Option<(u16, u16)> {
        self.pending
            .take()
            .map(|pending| (pending.width, pending.height))
    }

    /// Return true when there is no pending resize.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

/// Collector that polls crossterm for events and applies resize coalescing.
#[derive(Debug)]
pub struct RawInputCollector {
    coalescer: ResizeCoalescer,
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    /// Collector with the 30 ms resize window
    pub fn new() -> Self {
        Self {
            coalescer: ResizeCoalescer::with_default_window(),
            pending_events: VecDeque::new(),
        }
    }

    /// Collector whose resize window is `window`
    pub fn with_window(window: Duration) -> Self {
        Self {
            coalescer: ResizeCoalescer::new(window),
            pending_events: VecDeque::new(),
        }
    }

    /// Check whether the collector has no pending events or resize accumulation.
    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty() && self.coalescer.is_empty()
    }

    /// Feed an event without polling the terminal
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Attempt to flush a coalesced resize or a queued event without polling crossterm.
    pub fn try_flush(&mut self) -> Option<RawInputEvent> {
        self.pop_pending().or_else(|| {
            self.coalescer
                .flush_if_stale(Instant::now())
                .map(|(width, height)| RawInputEvent::Resize { width, height })
        })
    }

    /// Wait up to `timeout` for the next key press or settled resize
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.try_flush() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));

        if !event::poll(poll_timeout)? {
            return Ok(self.try_flush());
        }

        let event = event::read()?;
        self.enqueue_event(event);
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                // Keys act on the latest layout, so a pending resize goes first
                self.flush_pending_resize();
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                self.coalescer.push(width, height, Instant::now());
            }
            _ => {}
        }
    }

    fn flush_pending_resize(&mut self) {
        if let Some((width, height)) = self.coalescer.flush() {
            self.pending_events
                .push_back(RawInputEvent::Resize { width, height });
        }
    }

    /// Next queued event; a pending resize stays pending
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}

impl Default for RawInputCollector {
    fn default() -> Self {
        Self::new()
    }
}
