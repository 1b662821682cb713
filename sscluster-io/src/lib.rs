//! # Input/Output for sscluster.
//!
//! Turns the flat files a small-RNA overlap run starts from into record stores,
//! and writes the resulting tallies back out:
//!
//! - ShortStack full reports and loci tables ([`shortstack`])
//! - coordinate-annotated results files ([`results`])
//! - GTF and GFF3 annotations, filtered to one feature type ([`annotation`])
//! - genome FASTA files, reduced to a chromosome length table ([`fasta`])
//! - `upstream,body,downstream` tally files ([`writer`])
//!
//! Every reader accepts gzip-compressed input and fails on the first bad row
//! with an error naming the file and line.
pub mod annotation;
pub mod attributes;
pub mod error;
pub mod fasta;
pub mod results;
pub mod shortstack;
pub mod table;
pub mod writer;

// re-expose core functions
pub use annotation::{AnnotationFormat, read_annotation, read_gff3, read_gtf};
pub use error::*;
pub use fasta::read_chromosome_lengths;
pub use results::read_results;
pub use shortstack::{read_shortstack_loci, read_shortstack_report};
pub use writer::write_tally_rows;
