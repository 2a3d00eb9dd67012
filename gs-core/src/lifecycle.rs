//! Request bookkeeping shared by every async operation in the UI.
//!
//! Requests started later may complete earlier. Each logical operation
//! (one search field, the calculation, the history fetch) therefore stamps
//! its requests from a [`RequestSeq`] and drops completions that are no
//! longer current.

/// Monotonic sequence numbers for one logical operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Stamp a new request; every earlier stamp becomes stale.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

/// Loading / error / value state of a request-backed view.
///
/// `loading` and `error` are never set together, and a failed request never
/// leaves an older value behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle<T> {
    loading: bool,
    error: Option<String>,
    value: Option<T>,
    seq: RequestSeq,
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            value: None,
            seq: RequestSeq::default(),
        }
    }
}

impl<T> Lifecycle<T> {
    /// Clear the previous value and error, enter loading, and return the
    /// sequence number the completion must present.
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.value = None;
        self.seq.issue()
    }

    /// Apply a completion. Returns `false` (and changes nothing) when a newer
    /// request or a [`replace`](Self::replace) has superseded `seq`.
    pub fn finish(&mut self, seq: u64, outcome: Result<T, String>) -> bool {
        if !self.seq.is_current(seq) {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(message) => {
                self.value = None;
                self.error = Some(message);
            }
        }
        true
    }

    /// Install a value directly and void any in-flight request.
    pub fn replace(&mut self, value: T) {
        self.seq.issue();
        self.loading = false;
        self.error = None;
        self.value = Some(value);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}
