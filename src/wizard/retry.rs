//! Caller-side finalize retry policy
//!
//! The controller itself never retries: a gateway failure surfaces as a
//! retryable `Persistence` error with state and draft preserved. This policy
//! wraps the retry loop for callers that want one, keeping it decoupled from
//! the wizard's own state machine.

use crate::error::{OutsetError, OutsetResult};

use super::controller::{Advance, WizardController};

/// Retry policy for the finalize advance
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    /// Allow up to `max_retries` additional attempts after the first failure
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Drive `advance` until it finalizes, rejects, or exhausts retries
    ///
    /// Only retryable (`Persistence`) errors are retried. When retries run
    /// out, `on_exhausted` is invoked with the final error before it is
    /// returned. Validation rejections and caller-misuse errors pass through
    /// untouched.
    pub async fn finalize<F>(
        &self,
        controller: &mut WizardController,
        mut on_exhausted: F,
    ) -> OutsetResult<Advance>
    where
        F: FnMut(&OutsetError),
    {
        let mut retries_left = self.max_retries;
        loop {
            match controller.advance().await {
                Err(err) if err.is_retryable() && retries_left > 0 => {
                    retries_left -= 1;
                }
                Err(err) if err.is_retryable() => {
                    on_exhausted(&err);
                    return Err(err);
                }
                other => return other,
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
