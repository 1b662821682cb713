use std::path::Path;

use csv::WriterBuilder;

use sscluster_overlap::TallyRow;

use crate::error::{FileError, Result};

/// Header row of every tally file.
pub const TALLY_HEADER: [&str; 3] = ["upstream", "body", "downstream"];

///
/// Write tally rows to disk as a comma delimited file with an
/// `upstream,body,downstream` header, one line per row in the order given.
///
/// The header is written even when `rows` is empty.
///
/// # Arguments
/// - path: the path to the file to dump to
/// - rows: tallies to write
pub fn write_tally_rows<T: AsRef<Path>>(path: T, rows: &[TallyRow]) -> Result<()> {
    let path = path.as_ref();
    let csv_err = |source| FileError::Csv {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(FileError::io(parent))?;
    }

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(TALLY_HEADER).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(FileError::io(path))?;

    Ok(())
}
