use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// State of a single waitlist form submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SubmissionStatus {
    /// Form is ready for input
    #[default]
    Idle,
    /// Insert is in flight; the form cannot be resubmitted
    Loading,
    /// Email was stored
    Success,
    /// Validation or storage failure; the form shows a message
    Error,
    /// Email was already on the list
    Duplicate,
}

/// Inputs that move a submission between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionEvent {
    /// A syntactically valid email was submitted
    Submit,
    /// The input failed validation before reaching storage
    Rejected,
    /// Storage accepted the row
    Inserted,
    /// Storage reported a uniqueness violation
    DuplicateDetected,
    /// Storage or the network failed
    Failed,
    /// The user edited the field after an error
    Edited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid submission transition: {from} --{event}-->")]
pub struct InvalidTransition {
    pub from: SubmissionStatus,
    pub event: SubmissionEvent,
}

impl SubmissionStatus {
    /// Apply an event, returning the next state.
    pub fn apply(self, event: SubmissionEvent) -> Result<Self, InvalidTransition> {
        use SubmissionEvent as E;
        use SubmissionStatus as S;

        let next = match (self, event) {
            (S::Idle | S::Error, E::Submit) => S::Loading,
            (S::Idle | S::Error, E::Rejected) => S::Error,
            (S::Error, E::Edited) => S::Idle,
            (S::Loading, E::Inserted) => S::Success,
            (S::Loading, E::DuplicateDetected) => S::Duplicate,
            (S::Loading, E::Failed) => S::Error,
            (from, event) => return Err(InvalidTransition { from, event }),
        };
        Ok(next)
    }

    /// Success and Duplicate replace the form; nothing leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Duplicate)
    }

    /// Whether the form accepts a new submission in this state
    pub fn accepts_input(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Error)
    }
}
