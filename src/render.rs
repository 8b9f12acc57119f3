//! Rendering subsystem.
//!
//! Holds the fetch protocol shared with the worker, the loop state that applies
//! input actions to the controller, and the terminal renderer.

pub mod protocol;
pub mod service;
pub mod ui;

pub use protocol::{FetchCommand, FetchResponse, RequestId};
pub use service::RenderLoopState;
