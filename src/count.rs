use crate::error::BenchError;
use std::fmt;

/// How many times to parse the buffer. Zero is allowed and means "don't".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct IterationCount(u64);

impl IterationCount {
    pub fn new(count: u64) -> Self {
        IterationCount(count)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Read a count the way C's `strtol(s, NULL, 10)` would.
    ///
    /// Leading ASCII whitespace (as C's `isspace`) and a sign are accepted,
    /// digits are consumed up to the first non-digit, and anything without
    /// digits reads as zero.
    /// Negative counts run nothing, so they clamp to zero; overflow
    /// saturates.
    pub fn parse_lax(s: &str) -> Self {
        let s = s.trim_start_matches(|c: char| {
            matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
        });
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let value = rest
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .fold(0u64, |acc, b| {
                acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
            });
        if negative {
            IterationCount(0)
        } else {
            IterationCount(value)
        }
    }

    /// Like [`parse_lax`](Self::parse_lax) but anything other than a plain
    /// non-negative integer is an error.
    pub fn parse_strict(s: &str) -> Result<Self, BenchError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BenchError::InvalidCount(s.to_string()));
        }
        digits
            .parse::<u64>()
            .map(IterationCount)
            .map_err(|_| BenchError::InvalidCount(s.to_string()))
    }
}

impl From<u64> for IterationCount {
    fn from(count: u64) -> Self {
        IterationCount(count)
    }
}

impl fmt::Display for IterationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lax(s: &str) -> u64 {
        IterationCount::parse_lax(s).get()
    }

    #[test]
    fn test_lax_plain() {
        assert_eq!(lax("5"), 5);
        assert_eq!(lax("0"), 0);
        assert_eq!(lax("007"), 7);
        assert_eq!(lax("+12"), 12);
    }

    #[test]
    fn test_lax_stops_at_first_non_digit() {
        assert_eq!(lax("12abc"), 12);
        assert_eq!(lax("  3 4"), 3);
        assert_eq!(lax("1e3"), 1);
        assert_eq!(lax("10.9"), 10);
    }

    #[test]
    fn test_lax_defaults_to_zero() {
        assert_eq!(lax(""), 0);
        assert_eq!(lax("abc"), 0);
        assert_eq!(lax("-"), 0);
        assert_eq!(lax(" "), 0);
        // Only ASCII whitespace is skipped before the digits.
        assert_eq!(lax("\u{a0}5"), 0);
        assert_eq!(lax("\u{3000}7"), 0);
    }

    #[test]
    fn test_lax_skips_ascii_whitespace() {
        assert_eq!(lax("\x0b9"), 9);
        assert_eq!(lax("\t\n\x0c\r 4"), 4);
    }

    #[test]
    fn test_lax_negative_runs_nothing() {
        assert_eq!(lax("-5"), 0);
        assert_eq!(lax("  -100"), 0);
    }

    #[test]
    fn test_lax_saturates() {
        assert_eq!(lax("99999999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_strict() {
        assert_eq!(IterationCount::parse_strict("10").unwrap().get(), 10);
        assert_eq!(IterationCount::parse_strict(" 0 ").unwrap().get(), 0);
        assert_eq!(IterationCount::parse_strict("+3").unwrap().get(), 3);
        for bad in ["", "abc", "12abc", "-5", "1.5", "99999999999999999999999999"] {
            match IterationCount::parse_strict(bad) {
                Err(BenchError::InvalidCount(s)) => assert_eq!(s, bad),
                other => panic!("{:?} should be rejected, got {:?}", bad, other),
            }
        }
    }
}
