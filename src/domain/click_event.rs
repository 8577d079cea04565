//! Click event model for asynchronous click counting.

/// A request to add one click to a mapping.
///
/// Created by the resolver once a short code has been resolved to a URL, sent
/// over a bounded channel and consumed by
/// [`crate::domain::click_worker::run_click_worker`]. Sending never blocks the
/// redirect; if the queue is full the event is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
