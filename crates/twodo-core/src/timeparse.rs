//! Partial timestamp resolution.
//!
//! Users type only the trailing digits of a `YYYYMMDDHHMM` timestamp, e.g.
//! `1504` for today at 15:04 or `021504` for the 2nd of this month at 15:04.
//! The digits they leave out are borrowed from the current local time.

use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// `chrono` format of the anchor string.
pub const CANONICAL_FORMAT: &str = "%Y%m%d%H%M";

/// Number of digits in a fully specified timestamp.
pub const CANONICAL_LEN: usize = 12;

/// Resolves right-aligned timestamp fragments in a fixed local time zone.
#[derive(Debug, Clone, Copy)]
pub struct PartialTimeParser {
    timezone: Tz,
}

impl PartialTimeParser {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Renders `now` in the local zone as `YYYYMMDDHHMM`.
    pub fn anchor(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.timezone)
            .format(CANONICAL_FORMAT)
            .to_string()
    }

    /// Resolves `fragment` against `now` and returns the instant in UTC.
    ///
    /// The leading digits missing from `fragment` come from [`anchor`](Self::anchor);
    /// the merge boundary is [`boundary_index`]. The merged timestamp is read as
    /// local time. Ambiguous local times (DST fall back) resolve to the earlier
    /// instant; nonexistent ones (DST spring forward) are rejected.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidFormat`] carrying `fragment` when it is longer than
    /// the anchor, contains anything but digits, or merges into a date or time
    /// that does not exist.
    pub fn parse(&self, fragment: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        let invalid = || CoreError::InvalidFormat(fragment.to_string());

        let anchor = self.anchor(now);
        if !fragment.is_ascii() || fragment.len() > anchor.len() {
            return Err(invalid());
        }

        let boundary = boundary_index(anchor.len(), fragment.len());
        let merged = merge_fragment(&anchor, fragment, boundary);
        let naive = parse_canonical(&merged).ok_or_else(invalid)?;

        let local = self
            .timezone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(invalid)?;

        debug!(fragment, %anchor, %merged, "resolved partial timestamp");
        Ok(local.with_timezone(&Utc))
    }
}

/// Index of the first position taken from the fragment.
///
/// Exactly the positions the right-aligned fragment covers come from it; no
/// extra anchor digit is kept in front of it.
pub fn boundary_index(anchor_len: usize, fragment_len: usize) -> usize {
    anchor_len.saturating_sub(fragment_len)
}

/// Merges a right-aligned `fragment` into `anchor`.
///
/// `fragment` is left-padded with blanks to the anchor's length. Every
/// position before `boundary` is taken from `anchor`, every position from
/// `boundary` on from the padded fragment. A boundary below
/// [`boundary_index`] lets padding blanks into the result, one above it hides
/// leading fragment digits behind anchor digits.
pub fn merge_fragment(anchor: &str, fragment: &str, boundary: usize) -> String {
    let padded = format!("{:>width$}", fragment, width = anchor.chars().count());
    anchor
        .chars()
        .zip(padded.chars())
        .enumerate()
        .map(|(i, (a, f))| if i < boundary { a } else { f })
        .collect()
}

/// Parses a complete `YYYYMMDDHHMM` string, or returns `None`.
pub fn parse_canonical(timestamp: &str) -> Option<NaiveDateTime> {
    if timestamp.len() != CANONICAL_LEN || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let field = |from: usize, to: usize| timestamp[from..to].parse::<u32>().ok();
    let year = timestamp[0..4].parse::<i32>().ok()?;

    NaiveDate::from_ymd_opt(year, field(4, 6)?, field(6, 8)?)?
        .and_hms_opt(field(8, 10)?, field(10, 12)?, 0)
}
