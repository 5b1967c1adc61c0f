use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// Pixels computed or coloured between two polls of a [`CancelToken`].
pub const CANCEL_CHECK_INTERVAL_PIXELS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Polled by the compute and render passes. Polling is cheap and never
/// changes the values of pixels already produced.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Shared stop switch. Clones observe the same state, so one clone can be
/// handed to a running plot while another stays with the caller.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl CancelToken for CancelFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_flag_starts_clear() {
        assert!(!CancelFlag::new().is_cancelled());
        assert!(!NeverCancel.is_cancelled());
    }

    #[test]
    fn test_cancel_is_seen_by_every_clone() {
        let flag = CancelFlag::new();
        let handed_out = flag.clone();

        flag.cancel();

        assert!(handed_out.is_cancelled());
        assert!(flag.is_cancelled());
    }

    #[test]
    fn test_flag_cancelled_from_another_thread() {
        let flag = CancelFlag::new();
        let remote = flag.clone();

        std::thread::spawn(move || remote.cancel()).join().unwrap();

        assert!(flag.is_cancelled());
    }

    #[test]
    fn test_closure_token_after_budget_of_polls() {
        let polls = AtomicUsize::new(0);
        let token = || polls.fetch_add(1, Ordering::Relaxed) >= 2;

        assert!(!token.is_cancelled());
        assert!(!token.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancelled_message() {
        assert_eq!(Cancelled.to_string(), "operation cancelled");
    }
}
