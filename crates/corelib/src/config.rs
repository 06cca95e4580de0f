use serde::{Deserialize, Serialize};

use crate::stock_questions;

/// How a bounded read treats values below its limit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BoundPolicy {
    /// Reject only values at or above the limit. Negative values pass and
    /// wrap when narrowed.
    #[default]
    UpperOnly,
    /// Also require the value to fit in a `u16` before it is accepted.
    Strict,
}

/// One challenge stage: accept a value below `limit`, win if it narrows to `target`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub label: char,
    pub limit: i64,
    pub target: u16,
}

impl Question {
    pub const fn new(label: char, limit: i64, target: u16) -> Self {
        Self {
            label,
            limit,
            target,
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Question {}: Provide a number less than {}:",
            self.label, self.limit
        )
    }
}

/// Run configuration selected on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub policy: BoundPolicy,
    pub questions: Vec<Question>,
}

impl Config {
    pub fn new(policy: BoundPolicy) -> Self {
        Self {
            policy,
            questions: stock_questions().to_vec(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(BoundPolicy::default())
    }
}
