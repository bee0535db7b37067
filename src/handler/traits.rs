//! Trait abstraction for the signup submit handler to enable mocking in tests

use crate::state::{FormValues, SubmissionError};
use async_trait::async_trait;

/// Receives validated signup values on behalf of the form's caller
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupHandler: Send {
    /// Accept or reject a submission; rejections carry an error code the
    /// form may display
    async fn handle_signup(&mut self, values: &FormValues) -> Result<(), SubmissionError>;
}
