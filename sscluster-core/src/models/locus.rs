use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::RecordError;
use crate::models::interval::{Interval, parse_coordinate};

///
/// A `chrom:start-stop` locus string as written by ShortStack.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Locus {
    pub chr: String,
    pub interval: Interval,
}

impl Locus {
    pub fn width(&self) -> u64 {
        self.interval.width()
    }
}

impl FromStr for Locus {
    type Err = RecordError;

    /// Splits on the first `:` and then on the first `-` of the remainder.
    /// Anything after a second `:` or `-` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RecordError::MalformedLocus(s.to_string());

        let mut parts = s.split(':');
        let chr = parts.next().ok_or_else(malformed)?;
        let coords = parts.next().ok_or_else(malformed)?;

        let mut bounds = coords.split('-');
        let start = bounds.next().ok_or_else(malformed)?;
        let stop = bounds.next().ok_or_else(malformed)?;

        Ok(Locus {
            chr: chr.to_string(),
            interval: Interval {
                start: parse_coordinate("start", start)?,
                stop: parse_coordinate("stop", stop)?,
            },
        })
    }
}

impl Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chr, self.interval)
    }
}
