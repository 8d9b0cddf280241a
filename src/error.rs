use thiserror::Error;

use crate::models::poll::PollId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("Please provide a title and at least two non-empty options")]
    EmptyTitle,

    #[error("Please provide a title and at least two non-empty options")]
    EmptyOption { index: usize },

    #[error("Please provide a title and at least two non-empty options")]
    TooFewOptions { count: usize },

    #[error("A poll must have at least two options")]
    OptionFloor,

    #[error("option {index} is out of range for poll {poll} ({len} options)")]
    OptionOutOfRange { poll: PollId, index: usize, len: usize },

    #[error("draft option {index} is out of range ({len} options)")]
    DraftIndexOutOfRange { index: usize, len: usize },
}

impl PollError {
    /// Whether the error is a rejection of user input that should be shown to the user,
    /// as opposed to a caller bug that only gets logged.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PollError::EmptyTitle
                | PollError::EmptyOption { .. }
                | PollError::TooFewOptions { .. }
                | PollError::OptionFloor
        )
    }
}
