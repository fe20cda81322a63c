// ============================================================================
// Count Limits
// Clamp policies applied to a count, and their textual form
// ============================================================================

use super::errors::{LimitErrorKind, NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A clamp policy applied to a count.
///
/// Built either directly or by parsing the textual form at the boundary:
///
/// | Text     | Policy               |
/// |----------|----------------------|
/// | `"5"`    | `Fixed(5)`           |
/// | `"%70"`  | `Percentage(0.70)`   |
/// | `None`   | `Absent`             |
///
/// # Example
/// ```
/// use numeric_utils::numeric::{calc_limit, Limit};
///
/// let limit: Limit = "%70".parse()?;
/// assert_eq!(calc_limit(&limit, 100)?, 70);
/// assert_eq!(calc_limit(&Limit::Fixed(5), 10)?, 5);
/// # Ok::<(), numeric_utils::numeric::NumericError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Limit {
    /// No limit; the count passes through unchanged
    #[default]
    Absent,
    /// Absolute limit
    Fixed(u64),
    /// Fraction of the count, in [0, 1]
    Percentage(f64),
}

impl Limit {
    /// Prefix marking the percentage form in text (`"%70"`).
    pub const PERCENT_PREFIX: char = '%';

    /// Create a fixed limit.
    #[inline]
    pub const fn fixed(limit: u64) -> Self {
        Limit::Fixed(limit)
    }

    /// Create a percentage limit from a fraction.
    ///
    /// # Errors
    /// Returns `InvalidLimit(PercentageOutOfRange)` if `fraction` is NaN or
    /// outside [0, 1].
    pub fn percentage(fraction: f64) -> NumericResult<Self> {
        check_fraction(fraction)?;
        Ok(Limit::Percentage(fraction))
    }

    /// Parse an optional textual limit. `None` means no limit.
    pub fn parse_optional(text: Option<&str>) -> NumericResult<Self> {
        match text {
            None => Ok(Limit::Absent),
            Some(text) => text.parse(),
        }
    }

    /// Check if this policy leaves counts untouched.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Limit::Absent)
    }

    /// Apply this policy to `num`. Same as [`calc_limit`].
    #[inline]
    pub fn apply(&self, num: u64) -> NumericResult<u64> {
        calc_limit(self, num)
    }
}

fn check_fraction(fraction: f64) -> NumericResult<()> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&fraction) {
        Ok(())
    } else {
        Err(NumericError::InvalidLimit(LimitErrorKind::PercentageOutOfRange))
    }
}

/// Limit the count `num` according to `limit`.
///
/// - `Absent`: `num` unchanged.
/// - `Fixed(limit)`: `num` if `limit > num`, otherwise `limit`.
/// - `Percentage(p)`: `num * p` rounded to the nearest integer, ties to even.
///
/// # Errors
/// Returns `InvalidLimit(PercentageOutOfRange)` for a percentage outside [0, 1].
pub fn calc_limit(limit: &Limit, num: u64) -> NumericResult<u64> {
    match *limit {
        Limit::Absent => Ok(num),
        Limit::Fixed(limit) => Ok(if limit > num { num } else { limit }),
        Limit::Percentage(fraction) => {
            check_fraction(fraction)?;
            let scaled = (num as f64 * fraction).round_ties_even() as u64;
            // Counts above 2^53 are not exact in f64
            Ok(scaled.min(num))
        },
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<u64> for Limit {
    fn from(limit: u64) -> Self {
        Limit::Fixed(limit)
    }
}

impl From<Option<u64>> for Limit {
    fn from(limit: Option<u64>) -> Self {
        limit.map_or(Limit::Absent, Limit::Fixed)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Limit {
    type Err = NumericError;

    /// Parse from the textual form.
    ///
    /// # Examples
    /// - "5" -> Fixed(5)
    /// - "%70" -> Percentage(0.7)
    /// - "%12.5" -> Percentage(0.125)
    ///
    /// Fixed limits must be non-negative integers; "-5" is `Unparseable`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LimitErrorKind::Empty.into());
        }

        if let Some(percent) = s.strip_prefix(Self::PERCENT_PREFIX) {
            let percent: f64 = percent
                .trim()
                .parse()
                .map_err(|_| LimitErrorKind::Unparseable)?;
            return Limit::percentage(percent / 100.0);
        }

        s.parse::<u64>()
            .map(Limit::Fixed)
            .map_err(|_| LimitErrorKind::Unparseable.into())
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Absent => write!(f, "none"),
            Limit::Fixed(limit) => write!(f, "{}", limit),
            Limit::Percentage(fraction) => {
                write!(f, "{}{}", Self::PERCENT_PREFIX, format_percent(*fraction))
            },
        }
    }
}

/// Shortest fixed-point rendering of `fraction * 100` that parses back to
/// the same fraction, so `"%7"` prints as `%7` and not `%7.000000000000001`.
fn format_percent(fraction: f64) -> String {
    let percent = fraction * 100.0;
    for precision in 0..=17 {
        let text = format!("{:.*}", precision, percent);
        if text.parse::<f64>().map(|p| p / 100.0) == Ok(fraction) {
            return text;
        }
    }
    percent.to_string()
}

// ============================================================================
// Tests
// ============================================================================
