//! Board feed state and the abort-previous-fetch slot.
//!
//! DESIGN
//! ======
//! Starting a fetch aborts the one before it, so a slow stale response can
//! never overwrite a newer one. The aborted call resolves to
//! `ApiError::Canceled`, which leaves the feed untouched: the newer fetch owns
//! the loading flag by then.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use futures::future::{AbortHandle, AbortRegistration};

use crate::net::error::ApiError;
use crate::net::types::BoardPost;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to see the board.";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load posts. Please try again in a moment.";

/// Message for a failed load, or `None` when nothing should be shown.
pub fn feed_error_message(err: &ApiError) -> Option<&'static str> {
    match err {
        ApiError::Canceled => None,
        ApiError::Auth { .. } => Some(LOGIN_REQUIRED_MESSAGE),
        _ => Some(LOAD_FAILED_MESSAGE),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFeed {
    pub posts: Vec<BoardPost>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for BoardFeed {
    fn default() -> Self {
        Self { posts: Vec::new(), loading: true, error: None }
    }
}

impl BoardFeed {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a fetch.
    pub fn settle(&mut self, outcome: Result<Vec<BoardPost>, ApiError>) {
        match outcome {
            Ok(posts) => {
                self.posts = posts;
                self.loading = false;
            }
            Err(ApiError::Canceled) => {}
            Err(err) => {
                self.error = feed_error_message(&err).map(str::to_owned);
                self.loading = false;
            }
        }
    }
}

/// Holds the abort handle of the most recent fetch.
#[derive(Debug, Default)]
pub struct LatestFetch {
    current: Option<AbortHandle>,
}

impl LatestFetch {
    /// Abort the previous fetch, if any, and register a new one.
    pub fn start(&mut self) -> AbortRegistration {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some(handle);
        registration
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }
}
