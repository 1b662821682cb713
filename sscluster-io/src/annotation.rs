use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use sscluster_core::RecordError;
use sscluster_core::models::interval::parse_coordinate;
use sscluster_core::models::{Feature, Interval, RecordStore, Strand};
use sscluster_core::utils::get_dynamic_reader;

use crate::attributes::{AttributeStyle, Attributes};
use crate::error::{FileError, Result};
use crate::table::ensure_file;

/// GFF3 files may end with an embedded sequence section.
const GFF3_FASTA_DIRECTIVE: &str = "##FASTA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum AnnotationFormat {
    GTF,
    GFF3,
}

impl AnnotationFormat {
    /// Attribute key the feature id is read from unless the caller picks another.
    pub fn default_id_attribute(&self) -> &'static str {
        match self {
            AnnotationFormat::GTF => "gene_id",
            AnnotationFormat::GFF3 => "ID",
        }
    }

    fn attribute_style(&self) -> AttributeStyle {
        match self {
            AnnotationFormat::GTF => AttributeStyle::Gtf,
            AnnotationFormat::GFF3 => AttributeStyle::Gff3,
        }
    }
}

impl FromStr for AnnotationFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gtf" => Ok(AnnotationFormat::GTF),
            "gff3" | "gff" => Ok(AnnotationFormat::GFF3),
            _ => Err(format!("Invalid annotation type: {}. Must be gtf or gff3", s)),
        }
    }
}

///
/// Read every feature of one type from a GTF or GFF3 file.
///
/// Rows whose type column is not exactly `feature_type` are skipped before any
/// other column is looked at. Comment lines (`#`) are ignored, and reading
/// stops at a GFF3 `##FASTA` section.
///
/// # Arguments
/// - path: annotation file, optionally gzipped
/// - format: GTF or GFF3
/// - feature_type: value the type column must match, e.g. `gene`
/// - id_attribute: attribute key holding the feature id; defaults to
///   `gene_id` for GTF and `ID` for GFF3
pub fn read_annotation<P: AsRef<Path>>(
    path: P,
    format: AnnotationFormat,
    feature_type: &str,
    id_attribute: Option<&str>,
) -> Result<RecordStore<Feature>> {
    let path = path.as_ref();
    ensure_file(path)?;

    let id_attribute = id_attribute.unwrap_or(format.default_id_attribute());
    let reader = get_dynamic_reader(path).map_err(FileError::io(path))?;
    let mut store = RecordStore::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(FileError::io(path))?;

        if line.starts_with(GFF3_FASTA_DIRECTIVE) {
            break;
        }
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let parsed = parse_annotation_line(&line, format, feature_type, id_attribute)
            .map_err(|source| FileError::Record {
                path: path.to_path_buf(),
                line: idx as u64 + 1,
                source,
            })?;

        if let Some(feature) = parsed {
            let (chr, id) = (feature.chr.clone(), feature.id.clone());
            store.insert(&chr, &id, feature);
        }
    }

    if store.is_empty() {
        warn!(
            "No `{}` features found in {}; the overlap counts will all be zero",
            feature_type,
            path.display()
        );
    } else {
        debug!(
            "Read {} `{}` features on {} chromosomes from {}",
            store.len(),
            feature_type,
            store.num_chroms(),
            path.display()
        );
    }

    Ok(store)
}

pub fn read_gtf<P: AsRef<Path>>(path: P, feature_type: &str) -> Result<RecordStore<Feature>> {
    read_annotation(path, AnnotationFormat::GTF, feature_type, None)
}

pub fn read_gff3<P: AsRef<Path>>(path: P, feature_type: &str) -> Result<RecordStore<Feature>> {
    read_annotation(path, AnnotationFormat::GFF3, feature_type, None)
}

fn parse_annotation_line(
    line: &str,
    format: AnnotationFormat,
    feature_type: &str,
    id_attribute: &str,
) -> std::result::Result<Option<Feature>, RecordError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let column = |i: usize| {
        fields.get(i).copied().ok_or(RecordError::MissingColumn {
            column: i,
            found: fields.len(),
        })
    };

    if column(2)? != feature_type {
        return Ok(None);
    }

    let attributes_column = column(8)?;
    let attributes = Attributes::parse(attributes_column, format.attribute_style());
    let id = attributes
        .feature_id(id_attribute)
        .ok_or_else(|| RecordError::MissingFeatureId(attributes_column.to_string()))?;

    Ok(Some(Feature {
        chr: column(0)?.to_string(),
        id: id.to_string(),
        interval: Interval {
            start: parse_coordinate("start", column(3)?)?,
            stop: parse_coordinate("stop", column(4)?)?,
        },
        feature_type: Some(feature_type.to_string()),
        strand: Strand::from_char(column(6)?.chars().next().unwrap_or('.')),
        rest: vec![column(1)?.to_string(), column(5)?.to_string(), column(7)?.to_string()],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[rstest]
    fn test_read_gtf_genes() {
        let store = read_gtf(get_test_path("annotation.gtf"), "gene").unwrap();

        assert_eq!(store.len(), 3);
        let gene = store.get("chr1", "AT1G01010").unwrap();
        assert_eq!(gene.interval, Interval::new(3631, 5899));
        assert_eq!(gene.strand, Strand::Plus);
        assert_eq!(store.get("chr2", "AT2G01010").unwrap().strand, Strand::Minus);
    }

    #[rstest]
    fn test_read_gtf_exons_first_occurrence_wins() {
        // both exons of AT1G01010 carry the same gene_id
        let store = read_gtf(get_test_path("annotation.gtf"), "exon").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("chr1", "AT1G01010").unwrap().interval,
            Interval::new(3631, 3913)
        );
    }

    #[rstest]
    fn test_read_gff3_genes() {
        let store = read_gff3(get_test_path("annotation.gff3"), "gene").unwrap();

        assert_eq!(store.len(), 3);
        let gene = store.get("chr1", "gene:AT1G01020").unwrap();
        assert_eq!(gene.interval, Interval::new(6788, 9130));
        assert_eq!(gene.strand, Strand::Minus);
    }

    #[rstest]
    fn test_read_gff3_custom_id_attribute() {
        let store = read_annotation(
            get_test_path("annotation.gff3"),
            AnnotationFormat::GFF3,
            "gene",
            Some("Name"),
        )
        .unwrap();
        assert!(store.get("chr1", "NAC001").is_some());
    }

    #[rstest]
    fn test_unknown_feature_type_is_empty() {
        let store = read_gtf(get_test_path("annotation.gtf"), "tRNA").unwrap();
        assert!(store.is_empty());
    }

    #[rstest]
    fn test_blank_lines_are_skipped() {
        let store = read_gtf(get_test_path("annotation_blank_lines.gtf"), "gene").unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.num_chroms(), 2);
        assert_eq!(
            store.get("chr1", "AT1G01020").unwrap().interval,
            Interval::new(6788, 9130)
        );
        assert_eq!(
            store.get("chr2", "AT2G01010").unwrap().interval,
            Interval::new(1025, 2810)
        );
    }

    #[rstest]
    fn test_truncated_gzip_names_file() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        for i in 0..200 {
            writeln!(
                encoder,
                "chr1\tsrc\tgene\t{}\t{}\t.\t+\t.\tgene_id \"g{}\";",
                i * 100 + 1,
                i * 100 + 50,
                i
            )
            .unwrap();
        }
        let bytes = encoder.finish().unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("cut_short.gtf.gz");
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let err = read_gtf(&path, "gene").unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
        assert!(err.to_string().contains("cut_short.gtf.gz"));
    }

    #[rstest]
    fn test_gff3_stops_at_fasta_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("with_seq.gff3");
        std::fs::write(
            &path,
            "##gff-version 3\n\
             chr1\tsrc\tgene\t10\t20\t.\t+\t.\tID=g1\n\
             ##FASTA\n\
             >chr1\n\
             ACGTACGT\n",
        )
        .unwrap();

        let store = read_gff3(&path, "gene").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_bad_coordinate_reports_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.gtf");
        std::fs::write(
            &path,
            "chr1\tsrc\texon\tabc\t20\t.\t+\t.\tgene_id \"g0\";\n\
             chr1\tsrc\tgene\t10\t2x0\t.\t+\t.\tgene_id \"g1\";\n",
        )
        .unwrap();

        // the exon row is filtered out before its start is parsed
        match read_gtf(&path, "gene") {
            Err(FileError::Record { line, source, .. }) => {
                assert_eq!(line, 2);
                assert!(matches!(source, RecordError::InvalidInteger { field: "stop", .. }));
            }
            other => panic!("expected a record error, got {:?}", other),
        }
    }

    #[rstest]
    #[case("gtf", AnnotationFormat::GTF)]
    #[case("GFF3", AnnotationFormat::GFF3)]
    fn test_format_from_str(#[case] input: &str, #[case] expected: AnnotationFormat) {
        assert_eq!(input.parse::<AnnotationFormat>().unwrap(), expected);
    }

    #[rstest]
    fn test_format_from_str_rejects_bed() {
        assert!("bed".parse::<AnnotationFormat>().is_err());
    }
}
