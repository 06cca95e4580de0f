//! The two-question driver. Prompts, reads, narrows and grades each question
//! in order, stopping at the first rejected input.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::{BoundPolicy, Config};
use crate::errors::ChallengeError;
use crate::gadgets::narrow::largest_preimage_below;
use crate::reader::BoundedReader;
use crate::report::{Answer, ChallengeReport};

/// Run every question in `config` against `input`, writing the transcript to `output`.
///
/// On a rejected input the diagnostic line is written before returning
/// [`ChallengeError::Input`]; later questions are not prompted.
pub fn run_challenge<R, W>(
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<ChallengeReport, ChallengeError>
where
    R: BufRead,
    W: Write,
{
    let mut reader = BoundedReader::with_policy(input, config.policy);
    let mut report = ChallengeReport::new(reader.policy());

    for question in &config.questions {
        writeln!(output, "{}", question.prompt())?;
        output.flush()?;

        let raw = match reader.read_less_than(question.limit) {
            Ok(v) => v,
            Err(failure) => {
                writeln!(output, "{}", failure.diagnostic())?;
                output.flush()?;
                info!(label = %question.label, %failure, "input rejected");
                report.reject(question.label, failure.clone());
                return Err(ChallengeError::Input {
                    label: question.label,
                    failure,
                    report: Box::new(report),
                });
            }
        };

        let answer = Answer::grade(question, raw);
        debug!(
            label = %answer.label,
            raw = answer.raw,
            narrowed = answer.narrowed,
            correct = answer.correct,
            "graded answer"
        );
        writeln!(output, "{}", answer.verdict())?;
        report.push_answer(answer);
    }
    output.flush()?;
    Ok(report)
}

/// For each question, an input that makes it correct under `config.policy`.
/// `None` means the policy leaves the target unreachable.
pub fn solve(config: &Config) -> Vec<(char, Option<i64>)> {
    config
        .questions
        .iter()
        .map(|q| {
            let input = match config.policy {
                BoundPolicy::UpperOnly => largest_preimage_below(q.target, q.limit),
                BoundPolicy::Strict => {
                    let direct = i64::from(q.target);
                    (direct < q.limit).then_some(direct)
                }
            };
            (q.label, input)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Question;

    #[test]
    fn solve_finds_negative_inputs_for_stock_questions() {
        let got = solve(&Config::default());
        assert_eq!(got, vec![('A', Some(-65525)), ('B', Some(-65440))]);
    }

    #[test]
    fn strict_solve_reports_unreachable() {
        let got = solve(&Config::new(BoundPolicy::Strict));
        assert_eq!(got, vec![('A', None), ('B', None)]);
    }

    #[test]
    fn strict_solve_uses_target_when_below_limit() {
        let cfg = Config {
            policy: BoundPolicy::Strict,
            questions: vec![Question::new('C', 100, 42)],
        };
        assert_eq!(solve(&cfg), vec![('C', Some(42))]);
    }
}
