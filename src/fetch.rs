//! Request Bookkeeping
//!
//! Generation tokens for in-flight fetches. A view takes a token before
//! awaiting and re-checks it after every await; starting a newer request
//! invalidates all earlier tokens, so a superseded response is dropped
//! instead of rendered as current.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic request generation shared by one view's fetch tasks
#[derive(Clone, Default)]
pub struct FetchGen(Rc<Cell<u32>>);

impl FetchGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier token
    pub fn begin(&self) -> u32 {
        let token = self.0.get().wrapping_add(1);
        self.0.set(token);
        token
    }

    /// True while `token` still belongs to the newest request
    pub fn is_current(&self, token: u32) -> bool {
        self.0.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_token_is_current() {
        let fetches = FetchGen::new();
        let token = fetches.begin();
        assert!(fetches.is_current(token));
    }

    #[test]
    fn newer_request_invalidates_earlier_tokens() {
        let fetches = FetchGen::new();
        let first = fetches.begin();
        let second = fetches.begin();
        assert!(!fetches.is_current(first));
        assert!(fetches.is_current(second));
    }

    #[test]
    fn clones_share_one_counter() {
        let fetches = FetchGen::new();
        let token = fetches.begin();
        let task_copy = fetches.clone();
        fetches.begin();
        assert!(!task_copy.is_current(token));
    }
}
