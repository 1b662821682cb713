//! Core data model for sscluster.
//!
//! Holds the records shared by every other crate in the workspace: coordinates
//! ([`models::Interval`], [`models::Locus`]), the two kinds of genomic entries
//! ([`models::Feature`] and [`models::Cluster`]), the synthetic clusters drawn
//! during bootstrapping, and the [`models::RecordStore`] that indexes them by
//! chromosome and identifier.
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::RecordError;
