use std::convert::Infallible;
use std::fmt::Display;

use crate::core::ScoreSubmission;

/// Receives a finished run exactly once per completed session.
///
/// The session does not act on the outcome: a failed report is logged and
/// play state is left as it is.
pub trait ScoreReporter {
    type Error: Display;

    fn report(&mut self, submission: &ScoreSubmission) -> Result<(), Self::Error>;
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ScoreReporter for NullReporter {
    type Error = Infallible;

    fn report(&mut self, _submission: &ScoreSubmission) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Keeps every report in order of arrival.
impl ScoreReporter for Vec<ScoreSubmission> {
    type Error = Infallible;

    fn report(&mut self, submission: &ScoreSubmission) -> Result<(), Infallible> {
        self.push(submission.clone());
        Ok(())
    }
}
