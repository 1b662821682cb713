use std::cmp::Ordering;
use std::fmt::{self, Display};

use crate::errors::RecordError;

/// A closed range of coordinates `[start, stop]`.
///
/// Coordinates are kept in whatever convention the source file used
/// (0-based report loci, 1-based GTF/GFF3 features); nothing is renumbered.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Interval {
    pub start: u64,
    pub stop: u64,
}

impl Interval {
    pub fn new(start: u64, stop: u64) -> Self {
        Interval { start, stop }
    }

    ///
    /// Get the length of the interval, `stop - start`
    ///
    #[inline]
    pub fn width(&self) -> u64 {
        self.stop.saturating_sub(self.start)
    }

    /// Check if a position lies within the interval, both ends inclusive
    #[inline]
    pub fn contains(&self, position: u64) -> bool {
        self.start <= position && position <= self.stop
    }
}

impl Ord for Interval {
    #[inline]
    fn cmp(&self, other: &Interval) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.stop.cmp(&other.stop),
            ord => ord,
        }
    }
}

impl PartialOrd for Interval {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.stop)
    }
}

///
/// Parse a single coordinate field, reporting which column failed.
///
pub fn parse_coordinate(field: &'static str, value: &str) -> Result<u64, RecordError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| RecordError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}
