//! Default output file names, built from the inputs and the run parameters so
//! runs with different settings never overwrite each other.
use std::path::{Path, PathBuf};

use sscluster_core::utils::{remove_all_extensions, remove_last_extension};
use sscluster_overlap::ClassifierConfig;

fn parameter_suffix(classifier: &ClassifierConfig) -> String {
    format!(
        "{}_up_{}_down_{}_body",
        classifier.upstream_bp, classifier.downstream_bp, classifier.include_body
    )
}

///
/// `<report dir>/<report name minus last extension>_overlap_results_<up>_up_<down>_down_<body>_body.csv`
///
pub fn overlap_output_path(ssreport: &Path, classifier: &ClassifierConfig) -> PathBuf {
    ssreport.with_file_name(format!(
        "{}_overlap_results_{}.csv",
        remove_last_extension(ssreport),
        parameter_suffix(classifier)
    ))
}

///
/// `<anno dir>/<anno name minus every extension>_<N>_bootstraps_random_<feature>_overlap_<up>_up_<down>_down_<body>_body[_id_<key>][_seed_<n>].csv`
///
/// The id attribute and seed only appear when they were given.
pub fn randomize_output_path(
    anno_file: &Path,
    bootstraps: usize,
    feature: &str,
    classifier: &ClassifierConfig,
    id_attribute: Option<&str>,
    seed: Option<u64>,
) -> PathBuf {
    let mut name = format!(
        "{}_{}_bootstraps_random_{}_overlap_{}",
        remove_all_extensions(anno_file),
        bootstraps,
        feature,
        parameter_suffix(classifier)
    );
    if let Some(key) = id_attribute {
        name.push_str(&format!("_id_{}", key));
    }
    if let Some(seed) = seed {
        name.push_str(&format!("_seed_{}", seed));
    }
    name.push_str(".csv");

    anno_file.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("data/Results.csv", "data/Results_overlap_results_20_up_0_down_true_body.csv")]
    #[case("report.v2.csv", "report.v2_overlap_results_20_up_0_down_true_body.csv")]
    fn test_overlap_output_path(#[case] report: &str, #[case] expected: &str) {
        let classifier = ClassifierConfig::new(20, 0, true);
        assert_eq!(
            overlap_output_path(Path::new(report), &classifier),
            PathBuf::from(expected)
        );
    }

    #[rstest]
    #[case("anno/TAIR10.gtf", "anno/TAIR10_100_bootstraps_random_gene_overlap_500_up_500_down_false_body.csv")]
    #[case("anno/TAIR10.gff3.gz", "anno/TAIR10_100_bootstraps_random_gene_overlap_500_up_500_down_false_body.csv")]
    fn test_randomize_output_path(#[case] anno: &str, #[case] expected: &str) {
        let classifier = ClassifierConfig::new(500, 500, false);
        assert_eq!(
            randomize_output_path(Path::new(anno), 100, "gene", &classifier, None, None),
            PathBuf::from(expected)
        );
    }

    #[rstest]
    fn test_randomize_output_path_names_seed_and_id() {
        let anno = Path::new("anno/TAIR10.gff3");
        let classifier = ClassifierConfig::new(0, 0, true);

        assert_eq!(
            randomize_output_path(anno, 10, "gene", &classifier, Some("Name"), Some(42)),
            PathBuf::from(
                "anno/TAIR10_10_bootstraps_random_gene_overlap_0_up_0_down_true_body_id_Name_seed_42.csv"
            )
        );

        // runs differing only in seed never share a file
        let first = randomize_output_path(anno, 10, "gene", &classifier, None, Some(1));
        let second = randomize_output_path(anno, 10, "gene", &classifier, None, Some(2));
        let unseeded = randomize_output_path(anno, 10, "gene", &classifier, None, None);
        assert_ne!(first, second);
        assert_ne!(first, unseeded);
    }

    #[rstest]
    fn test_distinct_parameters_distinct_names() {
        let report = Path::new("Results.csv");
        let a = overlap_output_path(report, &ClassifierConfig::new(10, 0, false));
        let b = overlap_output_path(report, &ClassifierConfig::new(0, 10, false));
        let c = overlap_output_path(report, &ClassifierConfig::new(10, 0, true));
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
