use std::path::Path;

use log::debug;

use sscluster_core::models::{Feature, Interval, RecordStore, Strand};
use sscluster_core::models::interval::parse_coordinate;

use crate::error::Result;
use crate::table::{Delimiter, field, for_each_row, trailing_fields};

/// First column of pass-through metadata; column 5 is skipped.
const RESULTS_META_START: usize = 6;

///
/// Read a results file (differential expression results annotated with
/// coordinates) into a feature store.
///
/// Expected columns: chromosome, id, type, start, stop, one ignored column,
/// then any number of pass-through columns.
///
/// # Arguments
/// - path: path to the comma delimited results file, optionally gzipped
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<RecordStore<Feature>> {
    let path = path.as_ref();
    let mut store = RecordStore::new();

    for_each_row(path, Delimiter::Comma, |record| {
        let chr = field(record, 0)?;
        let id = field(record, 1)?;

        let feature = Feature {
            chr: chr.to_string(),
            id: id.to_string(),
            feature_type: Some(field(record, 2)?.to_string()),
            interval: Interval {
                start: parse_coordinate("start", field(record, 3)?)?,
                stop: parse_coordinate("stop", field(record, 4)?)?,
            },
            strand: Strand::Unstranded,
            rest: trailing_fields(record, RESULTS_META_START),
        };

        store.insert(chr, id, feature);
        Ok(())
    })?;

    debug!(
        "Read {} features on {} chromosomes from {}",
        store.len(),
        store.num_chroms(),
        path.display()
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use sscluster_core::RecordError;
    use tempfile::tempdir;

    #[fixture]
    fn path_to_results() -> &'static str {
        "../tests/data/results.csv"
    }

    #[rstest]
    fn test_read_results(path_to_results: &str) {
        let store = read_results(path_to_results).unwrap();

        assert_eq!(store.len(), 3);
        let gene = store.get("chr1", "geneX").unwrap();
        assert_eq!(gene.interval, Interval::new(90, 120));
        assert_eq!(gene.feature_type.as_deref(), Some("gene"));
        assert_eq!(gene.rest, vec!["512.3", "-2.1", "0.001"]);
    }

    #[rstest]
    fn test_results_non_numeric_start() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(
            &path,
            "chrom,id,type,start,stop,x,baseMean\nchr1,geneX,gene,ninety,120,.,1.0\n",
        )
        .unwrap();

        match read_results(&path) {
            Err(FileError::Record { line: 2, source, .. }) => assert_eq!(
                source,
                RecordError::InvalidInteger {
                    field: "start",
                    value: "ninety".to_string()
                }
            ),
            other => panic!("expected an integer error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_results_short_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "chrom,id,type,start,stop\nchr1,geneX,gene\n").unwrap();

        let err = read_results(&path).unwrap_err();
        assert!(matches!(
            err,
            FileError::Record {
                source: RecordError::MissingColumn { column: 3, found: 3 },
                ..
            }
        ));
    }
}
