//! Bootstrapped null distributions for cluster/feature overlaps.
//!
//! Each bootstrap trial moves every ShortStack locus to a uniformly random
//! position on the genome, keeping its length, and tallies how the moved
//! clusters overlap the features. Trials are independent: they run on a rayon
//! pool, each with a generator seeded from one master seed, and the rows come
//! back in trial order.
//!
//! ```rust
//! use sscluster_bootstrap::{BootstrapSettings, run_bootstraps};
//! use sscluster_core::models::{ChromosomeLength, Feature, LocusLength, RecordStore};
//! use sscluster_overlap::ClassifierConfig;
//!
//! let features: RecordStore<Feature> = RecordStore::new();
//! let loci = vec![LocusLength { name: "Cluster_1".to_string(), length: 20 }];
//! let genome = vec![ChromosomeLength { name: "chr1".to_string(), length: 1000 }];
//!
//! let settings = BootstrapSettings { bootstraps: 3, seed: Some(1), ..Default::default() };
//! let rows = run_bootstraps(&features, &loci, &genome, &ClassifierConfig::default(), &settings).unwrap();
//! assert_eq!(rows.len(), 3);
//! ```
pub mod bootstrap;
pub mod errors;
pub mod randomize;

pub use bootstrap::{BootstrapSettings, run_bootstraps, run_trial, trial_seeds};
pub use errors::{RandomizeError, Result};
pub use randomize::{GenomeRandomizer, randomize};
