use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::ChallengeReport;

/// Exit status used for every rejected input.
pub const INPUT_FAILURE_EXIT_CODE: u8 = 1;

/// Why a bounded read refused its input.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputFailure {
    /// `token` is `None` when no token could be read: end of input, a read
    /// error, or a token longer than the reader accepts.
    #[error("input token {token:?} is not a signed 64-bit integer")]
    Parse { token: Option<String> },
    #[error("value {value} is not below the limit {limit}")]
    TooLarge { value: i64, limit: i64 },
    #[error("value {value} is below the minimum {min}")]
    TooSmall { value: i64, min: i64 },
}

impl InputFailure {
    /// The exact line printed to the user before the run stops.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            InputFailure::Parse { .. } => "Input error",
            InputFailure::TooLarge { .. } => "Too large!",
            InputFailure::TooSmall { .. } => "Too small!",
        }
    }

    pub fn exit_code(&self) -> u8 {
        INPUT_FAILURE_EXIT_CODE
    }
}

#[derive(Debug, Error)]
pub enum ChallengeError {
    /// A question rejected its input; `report` holds the answers given so far.
    #[error("question {label} rejected its input: {failure}")]
    Input {
        label: char,
        failure: InputFailure,
        report: Box<ChallengeReport>,
    },
    #[error("i/o error while running the challenge: {0}")]
    Io(#[from] std::io::Error),
}
