pub mod cluster;
pub mod feature;
pub mod interval;
pub mod locus;
pub mod record_store;

// re-export for cleaner imports
pub use self::cluster::{ChromosomeLength, Cluster, LocusLength, RandomizedCluster};
pub use self::feature::{Feature, Strand};
pub use self::interval::Interval;
pub use self::locus::Locus;
pub use self::record_store::RecordStore;
