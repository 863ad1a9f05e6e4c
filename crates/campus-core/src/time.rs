//! Activity time model.
//!
//! # Design
//!
//! Start times travel through the system as human-readable strings in
//! `YYYY-MM-DD HH:MM` form.  For ordering they are collapsed into a single
//! integer `TimeKey`:
//!
//! ```text
//! key = year * 1e8 + month * 1e6 + day * 1e4 + hour * 1e2 + minute
//! ```
//!
//! The key is monotonic with chronological order for every valid input, so
//! all schedule comparisons are plain integer comparisons.
//!
//! # Parsing rules
//!
//! Only ASCII digits are significant: every other character is dropped and
//! the first twelve digits are read as `YYYYMMDDHHMM`.  Anything after the
//! twelfth digit (seconds, time-zone offsets) is ignored.  Fields are range
//! checked (`month 1..=12`, `day 1..=31`, `hour 0..=23`, `minute 0..=59`);
//! month lengths and leap years are **not** validated, so `2024-02-31` is a
//! valid key.

use std::fmt;
use std::str::FromStr;

use crate::{CampusError, CampusResult};

const DIGITS_REQUIRED: usize = 12;

// ── TimeKey ───────────────────────────────────────────────────────────────────

/// Ordered integer encoding of a `YYYY-MM-DD HH:MM` timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeKey(pub i64);

impl TimeKey {
    /// Derive the key for `input`.
    ///
    /// # Errors
    ///
    /// [`CampusError::InvalidTimeFormat`] if `input` holds fewer than twelve
    /// digits or any field is out of range.
    pub fn parse(input: &str) -> CampusResult<TimeKey> {
        let digits: Vec<u8> = input.bytes().filter(u8::is_ascii_digit).collect();
        if digits.len() < DIGITS_REQUIRED {
            return Err(invalid(input, "fewer than 12 digits"));
        }

        let year   = field(&digits[0..4]);
        let month  = field(&digits[4..6]);
        let day    = field(&digits[6..8]);
        let hour   = field(&digits[8..10]);
        let minute = field(&digits[10..12]);

        if !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
            || !(0..=23).contains(&hour)
            || !(0..=59).contains(&minute)
        {
            return Err(invalid(input, "field out of range"));
        }

        Ok(TimeKey(
            year * 100_000_000 + month * 1_000_000 + day * 10_000 + hour * 100 + minute,
        ))
    }

    // ── Components ────────────────────────────────────────────────────────

    #[inline]
    pub fn year(self) -> i64 {
        self.0 / 100_000_000
    }

    #[inline]
    pub fn month(self) -> i64 {
        self.0 / 1_000_000 % 100
    }

    #[inline]
    pub fn day(self) -> i64 {
        self.0 / 10_000 % 100
    }

    #[inline]
    pub fn hour(self) -> i64 {
        self.0 / 100 % 100
    }

    #[inline]
    pub fn minute(self) -> i64 {
        self.0 % 100
    }
}

impl FromStr for TimeKey {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeKey::parse(s)
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute()
        )
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Fold a run of ASCII digits into its decimal value.
#[inline]
fn field(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0, |acc, d| acc * 10 + i64::from(d - b'0'))
}

fn invalid(input: &str, reason: &'static str) -> CampusError {
    CampusError::InvalidTimeFormat { input: input.to_owned(), reason }
}
