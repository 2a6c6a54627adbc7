//! Outbound seam for submissions
//!
//! There is no translation backend. [`LogDispatcher`] is the only shipped
//! implementation and just records the request in the log.

use thiserror::Error;
use tracing::info;

use super::Submission;

/// Failure reported by a [`Dispatcher`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dispatch failed: {0}")]
pub struct DispatchError(pub String);

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReceipt {
    /// 1-based count of submissions accepted by this dispatcher
    pub sequence: u64,
}

/// Something that accepts finished submissions.
pub trait Dispatcher {
    /// Hand off a submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission could not be accepted.
    fn dispatch(&mut self, submission: &Submission) -> Result<DispatchReceipt, DispatchError>;
}

/// Dispatcher that logs each submission and accepts it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDispatcher {
    sent: u64,
}

impl LogDispatcher {
    /// Create a dispatcher with nothing sent yet
    #[must_use]
    pub const fn new() -> Self {
        Self { sent: 0 }
    }

    /// Number of submissions accepted so far
    #[must_use]
    pub const fn sent(&self) -> u64 {
        self.sent
    }
}

impl Dispatcher for LogDispatcher {
    fn dispatch(&mut self, submission: &Submission) -> Result<DispatchReceipt, DispatchError> {
        self.sent += 1;
        info!(
            sequence = self.sent,
            provider = submission.provider(),
            model = submission.model(),
            from = submission.from_language(),
            to = submission.to_language(),
            text = submission.text(),
            "Translation requested"
        );
        Ok(DispatchReceipt {
            sequence: self.sent,
        })
    }
}
