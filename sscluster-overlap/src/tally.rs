use std::fmt::{self, Display};
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use sscluster_core::models::RecordStore;

use crate::classifier::{ClassifierConfig, ZoneHits};
use crate::traits::Located;

///
/// Zone counts summed over every (feature, cluster) pair of a run.
///
/// Field order is the column order of the tally file.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TallyRow {
    pub upstream: u64,
    pub body: u64,
    pub downstream: u64,
}

impl TallyRow {
    pub fn new(upstream: u64, body: u64, downstream: u64) -> Self {
        TallyRow {
            upstream,
            body,
            downstream,
        }
    }

    pub fn total(&self) -> u64 {
        self.upstream + self.body + self.downstream
    }
}

impl AddAssign<ZoneHits> for TallyRow {
    #[inline]
    fn add_assign(&mut self, hits: ZoneHits) {
        self.upstream += hits.upstream as u64;
        self.body += hits.body as u64;
        self.downstream += hits.downstream as u64;
    }
}

impl Display for TallyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.upstream, self.body, self.downstream)
    }
}

///
/// Count zone overlaps between every feature and every cluster that share a
/// chromosome.
///
/// Chromosomes present in only one of the two stores contribute nothing. Each
/// pair adds one to every zone its cluster position falls in, so a single pair
/// can add up to three.
///
/// # Arguments
/// - features: the feature store (results file or annotation)
/// - clusters: observed or randomized clusters
/// - config: classifier distances and body switch
pub fn tally_overlaps<F, C>(
    features: &RecordStore<F>,
    clusters: &RecordStore<C>,
    config: &ClassifierConfig,
) -> TallyRow
where
    F: Located,
    C: Located,
{
    let mut row = TallyRow::default();

    for (chr, chrom_features) in features.iter_chroms() {
        let Some(chrom_clusters) = clusters.chrom(chr) else {
            continue;
        };

        // positions are reused for every feature on the chromosome
        let positions: Vec<u64> = chrom_clusters.values().map(|c| c.position()).collect();

        for feature in chrom_features.values() {
            let interval = feature.interval();
            for &position in &positions {
                row += config.classify(interval, position);
            }
        }
    }

    row
}

///
/// Number of (feature, cluster) pairs [`tally_overlaps`] evaluates.
///
pub fn count_pairs<F, C>(features: &RecordStore<F>, clusters: &RecordStore<C>) -> u64 {
    features
        .iter_chroms()
        .filter_map(|(chr, chrom_features)| {
            clusters
                .chrom(chr)
                .map(|chrom_clusters| (chrom_features.len() * chrom_clusters.len()) as u64)
        })
        .sum()
}
