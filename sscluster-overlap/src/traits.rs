pub use sscluster_core::models::Interval;
use sscluster_core::models::{Cluster, Feature, RandomizedCluster};

/// Anything stored in a record store that occupies a genomic interval.
pub trait Located {
    fn interval(&self) -> &Interval;

    /// The single coordinate tested against feature zones.
    #[inline]
    fn position(&self) -> u64 {
        self.interval().start
    }
}

impl Located for Feature {
    #[inline]
    fn interval(&self) -> &Interval {
        &self.interval
    }
}

impl Located for Cluster {
    #[inline]
    fn interval(&self) -> &Interval {
        &self.interval
    }
}

impl Located for RandomizedCluster {
    #[inline]
    fn interval(&self) -> &Interval {
        &self.interval
    }
}
