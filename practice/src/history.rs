//! Graded attempts remembered by the browser, newest first.

use serde::{Deserialize, Serialize};

pub const MAX_ATTEMPTS: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub word: String,
    pub score: f64,
    /// Milliseconds since the epoch when the session was saved.
    pub at: f64,
}

pub fn record_attempt(attempts: &mut Vec<Attempt>, attempt: Attempt) {
    attempts.insert(0, attempt);
    attempts.truncate(MAX_ATTEMPTS);
}
