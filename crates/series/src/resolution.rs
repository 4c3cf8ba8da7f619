//! Sampling resolution of a time series.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// Unit of a fixed-duration resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionUnit {
    /// One calendar day (24 hours).
    Day,
    /// One hour.
    Hour,
    /// One minute.
    Minute,
    /// One second.
    Second,
}

impl ResolutionUnit {
    /// Length of one unit in seconds.
    pub fn seconds(self) -> i64 {
        match self {
            Self::Day => 86_400,
            Self::Hour => 3_600,
            Self::Minute => 60,
            Self::Second => 1,
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Hour => "H",
            Self::Minute => "min",
            Self::Second => "S",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "D" | "d" | "day" | "days" => Some(Self::Day),
            "H" | "h" | "hour" | "hours" => Some(Self::Hour),
            "min" | "T" | "minute" | "minutes" => Some(Self::Minute),
            "S" | "s" | "sec" | "second" | "seconds" => Some(Self::Second),
            _ => None,
        }
    }
}

/// Calendar offsets whose length depends on the date, or which are anchored
/// to a weekday (`"W"` is Sunday-anchored).
const NON_FIXED_CODES: &[&str] = &[
    "W", "w", "week", "weeks", "M", "MS", "ME", "BM", "BMS", "Q", "QS", "QE", "A", "AS", "Y", "YS",
    "YE", "month", "months", "year", "years",
];

/// Nominal sampling interval: a positive multiple of a fixed-length unit.
///
/// Parsed from pandas-style offset strings such as `"1D"`, `"1 day"`,
/// `"12H"` or `"15min"`. Offsets without a fixed length (months, quarters,
/// years) and weekday-anchored weeks are rejected; use `"7D"` for a plain
/// seven-day step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Resolution {
    multiple: u32,
    unit: ResolutionUnit,
}

impl Default for Resolution {
    fn default() -> Self {
        Self::daily()
    }
}

impl Resolution {
    /// Creates a resolution of `multiple` units.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidResolution`] if `multiple` is zero.
    pub fn new(multiple: u32, unit: ResolutionUnit) -> Result<Self, SeriesError> {
        if multiple == 0 {
            return Err(SeriesError::InvalidResolution {
                input: format!("0{}", unit.code()),
                reason: "multiplier must be positive".to_string(),
            });
        }
        Ok(Self { multiple, unit })
    }

    /// One calendar day.
    pub fn daily() -> Self {
        Self {
            multiple: 1,
            unit: ResolutionUnit::Day,
        }
    }

    /// One hour.
    pub fn hourly() -> Self {
        Self {
            multiple: 1,
            unit: ResolutionUnit::Hour,
        }
    }

    /// Parses a pandas-style offset string.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonFixedFrequency`] for week, month, quarter or
    /// year offsets, and [`SeriesError::InvalidResolution`] for anything else that
    /// cannot be read.
    pub fn parse(input: &str) -> Result<Self, SeriesError> {
        let invalid = |reason: &str| SeriesError::InvalidResolution {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, code) = trimmed.split_at(split);
        let code = code.trim();

        if code.is_empty() {
            return Err(invalid("missing unit"));
        }
        if NON_FIXED_CODES.contains(&code) || code.starts_with("W-") {
            return Err(SeriesError::NonFixedFrequency {
                input: input.to_string(),
            });
        }

        let multiple = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u32>()
                .map_err(|_| invalid("multiplier out of range"))?
        };
        if multiple == 0 {
            return Err(invalid("multiplier must be positive"));
        }

        let unit = ResolutionUnit::from_code(code)
            .ok_or_else(|| invalid(&format!("unknown unit '{code}'")))?;

        Ok(Self { multiple, unit })
    }

    /// Returns the multiplier.
    pub fn multiple(&self) -> u32 {
        self.multiple
    }

    /// Returns the unit.
    pub fn unit(&self) -> ResolutionUnit {
        self.unit
    }

    /// Length of one step in seconds.
    pub fn seconds(&self) -> i64 {
        i64::from(self.multiple) * self.unit.seconds()
    }

    /// Ratio of this step length to `other`'s.
    pub fn factor(&self, other: &Resolution) -> f64 {
        self.seconds() as f64 / other.seconds() as f64
    }

    /// Number of regularly spaced steps from `start` to `end`, both inclusive.
    ///
    /// Equals the length of `pandas.date_range(start, end, freq)`: the count
    /// of `start + k * step` that do not exceed `end`. Zero when `end` is
    /// before `start`.
    pub fn steps_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> usize {
        if end < start {
            return 0;
        }
        let delta = end - start;
        let delta_ns =
            i128::from(delta.num_seconds()) * 1_000_000_000 + i128::from(delta.subsec_nanos());
        let step_ns = i128::from(self.seconds()) * 1_000_000_000;
        (delta_ns / step_ns + 1) as usize
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.multiple, self.unit.code())
    }
}

impl FromStr for Resolution {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Resolution {
    type Error = SeriesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Resolution> for String {
    fn from(value: Resolution) -> Self {
        value.to_string()
    }
}

/// Conversion factor between two offset strings: length of `freq_one`
/// divided by length of `freq_two`.
///
/// Identical strings short-circuit to `1.0` without being parsed.
///
/// # Errors
///
/// Propagates [`Resolution::parse`] failures for either string.
pub fn frequency_factor(freq_one: &str, freq_two: &str) -> Result<f64, SeriesError> {
    if freq_one == freq_two {
        return Ok(1.0);
    }
    let one = Resolution::parse(freq_one)?;
    let two = Resolution::parse(freq_two)?;
    Ok(one.factor(&two))
}
