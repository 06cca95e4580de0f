use std::collections::VecDeque;
use std::io::{self, BufRead, Read};

use tracing::{debug, warn};

use crate::config::BoundPolicy;
use crate::errors::InputFailure;
use crate::gadgets::narrow::wraps_on_narrowing;
use crate::gadgets::range::check_with_policy;

/// Most bytes pulled from the input per read.
pub const MAX_CHUNK_BYTES: usize = 64 * 1024;
/// Longest single token accepted; longer ones are parse failures.
pub const MAX_TOKEN_BYTES: usize = 64 * 1024;

/// Reads whitespace-separated integer tokens and enforces an exclusive upper limit.
///
/// Each read takes the longest leading `[+-]digits` prefix of the next token;
/// whatever follows the digits stays queued for the next read. Values outside
/// `i64` clamp to `i64::MIN`/`i64::MAX`.
///
/// Under [`BoundPolicy::UpperOnly`] nothing stops a negative value from being
/// accepted; callers that narrow the result will see it wrap.
pub struct BoundedReader<R> {
    input: R,
    pending: VecDeque<String>,
    // tail of the last chunk when it ended mid-token
    carry: String,
    policy: BoundPolicy,
}

/// Parse an optional sign and decimal digits from the start of `token`.
/// Returns the value (clamped on overflow) and the bytes consumed, or `None`
/// when no digit follows the sign.
pub fn scan_leading_i64(token: &str) -> Option<(i64, usize)> {
    let bytes = token.as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mut pos = start;
    let mut value: i64 = 0;
    let mut saturated = false;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        if !saturated {
            let d = i64::from(b - b'0');
            // accumulate toward the sign so i64::MIN is reachable
            let next = value.checked_mul(10).and_then(|v| {
                if negative {
                    v.checked_sub(d)
                } else {
                    v.checked_add(d)
                }
            });
            match next {
                Some(v) => value = v,
                None => saturated = true,
            }
        }
        pos += 1;
    }

    if pos == start {
        return None;
    }
    if saturated {
        value = if negative { i64::MIN } else { i64::MAX };
    }
    Some((value, pos))
}

impl<R: BufRead> BoundedReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_policy(input, BoundPolicy::UpperOnly)
    }

    pub fn with_policy(input: R, policy: BoundPolicy) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            carry: String::new(),
            policy,
        }
    }

    pub fn policy(&self) -> BoundPolicy {
        self.policy
    }

    /// Next token, pulling more input as needed. `Ok(None)` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut chunk = std::mem::take(&mut self.carry);
            let n = (&mut self.input)
                .take(MAX_CHUNK_BYTES as u64)
                .read_line(&mut chunk)?;
            if n == 0 && chunk.is_empty() {
                return Ok(None);
            }

            if n == MAX_CHUNK_BYTES && !chunk.ends_with(char::is_whitespace) {
                let cut = chunk
                    .rfind(char::is_whitespace)
                    .map_or(0, |i| i + chunk[i..].chars().next().map_or(1, char::len_utf8));
                self.carry = chunk.split_off(cut);
                if self.carry.len() > MAX_TOKEN_BYTES {
                    self.carry.clear();
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("token exceeds {MAX_TOKEN_BYTES} bytes"),
                    ));
                }
            }
            self.pending
                .extend(chunk.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Read one value and return it unchanged if it is below `limit`.
    ///
    /// A read error on the underlying stream is reported as a parse failure,
    /// the same way a missing token is.
    pub fn read_less_than(&mut self, limit: i64) -> Result<i64, InputFailure> {
        let token = match self.next_token() {
            Ok(Some(t)) => t,
            Ok(None) => {
                debug!("input exhausted before a token");
                return Err(InputFailure::Parse { token: None });
            }
            Err(e) => {
                debug!(error = %e, "reading input failed");
                return Err(InputFailure::Parse { token: None });
            }
        };

        let Some((value, used)) = scan_leading_i64(&token) else {
            return Err(InputFailure::Parse { token: Some(token) });
        };
        if used < token.len() {
            self.pending.push_front(token[used..].to_owned());
        }
        debug!(%token, value, limit, "parsed input");

        check_with_policy(value, limit, self.policy)?;

        if wraps_on_narrowing(value) {
            warn!(value, limit, "accepted value does not fit in u16 and will wrap");
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn returns_value_unchanged_below_limit() {
        let mut r = BoundedReader::new(Cursor::new("9 -65525\n\n  -3\n"));
        assert_eq!(r.read_less_than(10), Ok(9));
        assert_eq!(r.read_less_than(10), Ok(-65525));
        assert_eq!(r.read_less_than(-2), Ok(-3));
    }

    #[test]
    fn rejects_limit_and_above() {
        let mut r = BoundedReader::new(Cursor::new("10\n"));
        assert_eq!(
            r.read_less_than(10),
            Err(InputFailure::TooLarge {
                value: 10,
                limit: 10
            })
        );
    }

    #[test]
    fn malformed_and_missing_tokens_are_parse_failures() {
        let mut r = BoundedReader::new(Cursor::new("abc\n"));
        assert_eq!(
            r.read_less_than(10),
            Err(InputFailure::Parse {
                token: Some("abc".into())
            })
        );
        assert_eq!(r.read_less_than(10), Err(InputFailure::Parse { token: None }));
    }

    #[test]
    fn out_of_range_tokens_clamp() {
        let mut r = BoundedReader::new(Cursor::new("99999999999999999999 -99999999999999999999"));
        assert_eq!(
            r.read_less_than(10),
            Err(InputFailure::TooLarge {
                value: i64::MAX,
                limit: 10
            })
        );
        assert_eq!(r.read_less_than(10), Ok(i64::MIN));
    }

    #[test]
    fn scan_stops_at_first_non_digit() {
        assert_eq!(scan_leading_i64("12abc"), Some((12, 2)));
        assert_eq!(scan_leading_i64("-0x10"), Some((0, 2)));
        assert_eq!(scan_leading_i64("+7"), Some((7, 2)));
        assert_eq!(
            scan_leading_i64("-9223372036854775808"),
            Some((i64::MIN, 20))
        );
        assert_eq!(scan_leading_i64("-"), None);
        assert_eq!(scan_leading_i64("--3"), None);
        assert_eq!(scan_leading_i64("x10"), None);
    }

    #[test]
    fn strict_policy_adds_lower_bound() {
        let mut r = BoundedReader::with_policy(Cursor::new("-1 7"), BoundPolicy::Strict);
        assert_eq!(
            r.read_less_than(10),
            Err(InputFailure::TooSmall { value: -1, min: 0 })
        );
        assert_eq!(r.read_less_than(10), Ok(7));
    }
}
