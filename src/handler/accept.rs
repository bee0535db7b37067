//! Handler that accepts every submission

use super::traits::SignupHandler;
use crate::state::{FormValues, SubmissionError, EMAIL};
use async_trait::async_trait;

/// Accepts every submission; the app prints the accepted values on exit
#[derive(Debug, Default)]
pub struct AcceptingHandler {
    accepted: usize,
}

#[async_trait]
impl SignupHandler for AcceptingHandler {
    async fn handle_signup(&mut self, values: &FormValues) -> Result<(), SubmissionError> {
        self.accepted += 1;
        tracing::info!(
            email = values.get(EMAIL).unwrap_or_default(),
            accepted = self.accepted,
            "Accepted signup"
        );
        Ok(())
    }
}
