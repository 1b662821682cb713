//! Overlap classification of small-RNA clusters against genomic features.
//!
//! A cluster is described by its start coordinate only. For every feature that
//! shares its chromosome, that coordinate is checked against three independent
//! zones:
//!
//! - **upstream**: the `upstream_bp` bases before the feature start, start included
//! - **body**: the feature itself, both ends included
//! - **downstream**: the `downstream_bp` bases after the feature stop, stop included
//!
//! ## Quick Start
//!
//! ```rust
//! use sscluster_core::models::{Cluster, Feature, Interval, Locus, RecordStore, Strand};
//! use sscluster_overlap::{ClassifierConfig, TallyRow, tally_overlaps};
//!
//! let features: RecordStore<Feature> = vec![Feature {
//!     chr: "chr1".to_string(),
//!     id: "geneX".to_string(),
//!     interval: Interval::new(90, 120),
//!     feature_type: Some("gene".to_string()),
//!     strand: Strand::Unstranded,
//!     rest: vec![],
//! }]
//! .into_iter()
//! .collect();
//!
//! let locus: Locus = "chr1:100-110".parse().unwrap();
//! let clusters: RecordStore<Cluster> =
//!     vec![Cluster::from_locus(locus, "clusterA".to_string(), vec![])]
//!         .into_iter()
//!         .collect();
//!
//! let config = ClassifierConfig::new(20, 0, true);
//! assert_eq!(tally_overlaps(&features, &clusters, &config), TallyRow::new(0, 1, 0));
//! ```

/// Zone classification of a single position.
///
/// See [`classify`] for the exact rule.
pub mod classifier;

/// Per-run zone counting over record stores.
///
/// See [`tally_overlaps`].
pub mod tally;

/// The [`Located`] trait shared by features and clusters.
pub mod traits;

// re-exports
pub use self::classifier::{ClassifierConfig, Zone, ZoneHits, classify};
pub use self::tally::{TallyRow, count_pairs, tally_overlaps};
pub use self::traits::{Interval, Located};
