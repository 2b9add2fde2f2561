//! Run a side effect once per distinct value of a watched input.
//!
//! This is the bookkeeping behind "log the error when it changes": the watcher
//! remembers the last value it saw and only fires when a new one differs from
//! it. It holds no reactive state of its own, so it can be driven from an
//! `Effect`, an event handler, or a plain test.

#[derive(Debug)]
pub struct Watcher<T> {
    last: Option<T>,
}

impl<T> Default for Watcher<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq> Watcher<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records `value` and runs `effect` on it when it differs from the
    /// previously observed value. Returns whether the effect ran.
    pub fn observe(&mut self, value: T, effect: impl FnOnce(&T)) -> bool {
        if self.last.as_ref() == Some(&value) {
            return false;
        }
        effect(&value);
        self.last = Some(value);
        true
    }

    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }
}
