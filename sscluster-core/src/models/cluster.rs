use crate::models::interval::Interval;
use crate::models::locus::Locus;

///
/// A small-RNA locus from a ShortStack report.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Cluster {
    pub chr: String,
    pub name: String,
    pub interval: Interval,
    pub length: u64,

    /// remaining report columns, never interpreted
    pub rest: Vec<String>,
}

impl Cluster {
    pub fn from_locus(locus: Locus, name: String, rest: Vec<String>) -> Self {
        let length = locus.width();
        Cluster {
            chr: locus.chr,
            name,
            interval: locus.interval,
            length,
            rest,
        }
    }
}

///
/// A synthetic placement of a locus, drawn fresh for every bootstrap trial.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RandomizedCluster {
    pub chr: String,
    pub name: String,
    pub interval: Interval,
    pub length: u64,
}

/// Name and length of a locus to be placed by the randomizer.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct LocusLength {
    pub name: String,
    pub length: u64,
}

/// Name and sequence length of one FASTA record.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ChromosomeLength {
    pub name: String,
    pub length: u64,
}
