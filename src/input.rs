//! Input subsystem.
//!
//! `raw` turns crossterm events into primitive key/resize events, coalescing resize
//! bursts. `service` maps those onto the application's [`InputAction`]s and runs the
//! blocking input thread.

pub mod raw;
pub mod service;

pub use service::{spawn_input_thread, InputAction, InputService, KeyMap};
