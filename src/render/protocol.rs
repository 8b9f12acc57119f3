//! Protocol definitions shared between the render coordinator and the fetch worker.

use crate::error::Result;
use crate::quote::Quote;

/// Identifier attached to fetch requests so responses can be correlated.
pub type RequestId = u64;

/// Commands sent from the render coordinator to the fetch worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCommand {
    Fetch { request_id: RequestId },
    Shutdown,
}

/// Responses emitted by the fetch worker back to the coordinator.
#[derive(Debug)]
pub enum FetchResponse {
    Completed {
        request_id: RequestId,
        result: Result<Quote>,
    },
}
