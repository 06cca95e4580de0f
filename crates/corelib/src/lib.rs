//! Core library: bounded integer reads, 16-bit narrowing, and the challenge
//! driver that shows an upper-bound-only check letting negative values wrap.

pub mod challenge;
pub mod config;
pub mod errors;
pub mod gadgets;
pub mod reader;
pub mod report;

pub use challenge::{run_challenge, solve};
pub use config::{BoundPolicy, Config, Question};
pub use errors::{ChallengeError, InputFailure};
pub use gadgets::narrow::narrow_to_u16;
pub use reader::BoundedReader;
pub use report::{Answer, ChallengeReport};

static STOCK_QUESTIONS: [Question; 2] = [Question::new('A', 10, 11), Question::new('B', 69, 96)];

/// API: the two stock questions, in the order they are asked
pub fn stock_questions() -> &'static [Question] {
    &STOCK_QUESTIONS
}

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
