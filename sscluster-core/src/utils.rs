use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> std::io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Get the file name of a path with only its last extension removed,
/// e.g. `reports/Results.sample.txt` -> `Results.sample`.
///
pub fn remove_last_extension(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

///
/// Get the file name of a path with every extension removed,
/// e.g. `annotation/genes.gff3.gz` -> `genes`.
///
pub fn remove_all_extensions(path: &Path) -> String {
    let mut stem = remove_last_extension(path);

    let mut parent_path = PathBuf::from(&stem);
    while parent_path.extension().is_some() {
        parent_path = parent_path.with_extension("");
        stem = remove_last_extension(&parent_path);
    }

    stem
}
