use std::io::BufRead;
use std::path::Path;

use log::debug;

use sscluster_core::models::ChromosomeLength;
use sscluster_core::utils::get_dynamic_reader;

use crate::error::{FileError, Result};
use crate::table::ensure_file;

///
/// Build the chromosome length table of a genome FASTA file.
///
/// Each `>` header starts a new record named by the first word of the header.
/// Its length is the number of residue characters on the lines that follow,
/// ignoring line endings only, so wrapped and unwrapped files give the same table.
/// Records come back in file order; a header with no sequence lines yields a
/// zero length entry.
///
/// # Arguments
/// - path: FASTA file, optionally gzipped
pub fn read_chromosome_lengths<P: AsRef<Path>>(path: P) -> Result<Vec<ChromosomeLength>> {
    let path = path.as_ref();
    ensure_file(path)?;

    let reader = get_dynamic_reader(path).map_err(FileError::io(path))?;
    let mut lengths: Vec<ChromosomeLength> = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(FileError::io(path))?;

        if let Some(header) = line.strip_prefix('>') {
            let name = header.split_whitespace().next().unwrap_or_default();
            lengths.push(ChromosomeLength {
                name: name.to_string(),
                length: 0,
            });
        } else if let Some(current) = lengths.last_mut() {
            current.length += line.trim_end_matches(['\r', '\n']).len() as u64;
        }
    }

    debug!(
        "Read {} sequences ({} bp) from {}",
        lengths.len(),
        lengths.iter().map(|c| c.length).sum::<u64>(),
        path.display()
    );

    Ok(lengths)
}
