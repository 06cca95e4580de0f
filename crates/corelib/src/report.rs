use serde::{Deserialize, Serialize};

use crate::config::{BoundPolicy, Question};
use crate::errors::InputFailure;
use crate::gadgets::narrow::{narrow_to_u16, wraps_on_narrowing};

/// Outcome of one question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub label: char,
    pub raw: i64,
    pub narrowed: u16,
    pub correct: bool,
    pub wrapped: bool,
}

impl Answer {
    pub fn grade(question: &Question, raw: i64) -> Self {
        let narrowed = narrow_to_u16(raw);
        Self {
            label: question.label,
            raw,
            narrowed,
            correct: narrowed == question.target,
            wrapped: wraps_on_narrowing(raw),
        }
    }

    /// Line printed once the answer is graded.
    pub fn verdict(&self) -> String {
        if self.correct {
            format!("Answer {} correct!", self.label)
        } else {
            format!("Answer {} as uint16 = {}", self.label, self.narrowed)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectedInput {
    pub label: char,
    pub failure: InputFailure,
}

/// Record of a challenge run, written out by `--report`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeReport {
    pub policy: BoundPolicy,
    pub answers: Vec<Answer>,
    pub rejected: Option<RejectedInput>,
}

impl ChallengeReport {
    pub fn new(policy: BoundPolicy) -> Self {
        Self {
            policy,
            answers: Vec::new(),
            rejected: None,
        }
    }

    pub fn push_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    pub fn reject(&mut self, label: char, failure: InputFailure) {
        self.rejected = Some(RejectedInput { label, failure });
    }

    /// True when the run finished and every answer hit its target.
    pub fn all_correct(&self) -> bool {
        self.rejected.is_none() && self.answers.iter().all(|a| a.correct)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
