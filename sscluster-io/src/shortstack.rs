//! Readers for the two ShortStack outputs this tool consumes: the comma
//! delimited "full report" and the tab delimited loci table.
use std::path::Path;

use log::debug;

use sscluster_core::models::{Cluster, Locus, LocusLength, RecordStore};

use crate::error::Result;
use crate::table::{Delimiter, field, for_each_row, trailing_fields};

///
/// Read a ShortStack full report into a cluster store.
///
/// Column 0 holds the `chrom:start-stop` locus and column 1 the cluster name;
/// every other column is carried along untouched.
///
/// # Arguments
/// - path: path to the report, optionally gzipped
pub fn read_shortstack_report<P: AsRef<Path>>(path: P) -> Result<RecordStore<Cluster>> {
    let path = path.as_ref();
    let mut store = RecordStore::new();
    let mut duplicates = 0usize;

    for_each_row(path, Delimiter::Comma, |record| {
        let locus: Locus = field(record, 0)?.parse()?;
        let name = field(record, 1)?.to_string();
        let cluster = Cluster::from_locus(locus, name, trailing_fields(record, 2));

        let (chr, name) = (cluster.chr.clone(), cluster.name.clone());
        if !store.insert(&chr, &name, cluster) {
            duplicates += 1;
        }
        Ok(())
    })?;

    debug!(
        "Read {} clusters on {} chromosomes from {} ({} duplicate names ignored)",
        store.len(),
        store.num_chroms(),
        path.display(),
        duplicates
    );

    Ok(store)
}

///
/// Read the names and lengths of the loci in a ShortStack loci table.
///
/// Rows are returned in file order. Each row is a locus to place, so repeated
/// names are kept.
///
/// # Arguments
/// - path: path to the tab delimited loci file, optionally gzipped
pub fn read_shortstack_loci<P: AsRef<Path>>(path: P) -> Result<Vec<LocusLength>> {
    let path = path.as_ref();
    let mut loci = Vec::new();

    for_each_row(path, Delimiter::Tab, |record| {
        let locus: Locus = field(record, 0)?.parse()?;
        loci.push(LocusLength {
            name: field(record, 1)?.to_string(),
            length: locus.width(),
        });
        Ok(())
    })?;

    debug!("Read {} loci from {}", loci.len(), path.display());

    Ok(loci)
}
