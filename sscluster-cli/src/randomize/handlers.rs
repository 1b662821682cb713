use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use sscluster_bootstrap::{BootstrapSettings, run_bootstraps};
use sscluster_io::{
    AnnotationFormat, read_annotation, read_chromosome_lengths, read_shortstack_loci,
    write_tally_rows,
};
use sscluster_overlap::TallyRow;

use crate::config::RunConfig;
use crate::output::randomize_output_path;
use crate::randomize::cli::DEFAULT_BOOTSTRAPS;

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .with_context(|| format!("--{} is required.", id))
}

pub fn run_randomize(matches: &ArgMatches) -> Result<Vec<TallyRow>> {
    let format: AnnotationFormat = required(matches, "anno-type")?
        .parse()
        .map_err(anyhow::Error::msg)?;
    let anno_file = Path::new(required(matches, "anno-file")?);
    let feature = required(matches, "feature")?;
    let ssloci = required(matches, "ssloci")?;
    let fasta = required(matches, "fasta")?;

    let config = RunConfig::from_matches(matches).context("Failed to read the run config")?;
    let classifier = config.classifier(matches);
    let settings = BootstrapSettings {
        bootstraps: matches
            .get_one::<usize>("bootstraps")
            .copied()
            .or(config.bootstraps)
            .unwrap_or(DEFAULT_BOOTSTRAPS),
        seed: matches.get_one::<u64>("seed").copied().or(config.seed),
        threads: matches.get_one::<usize>("threads").copied().or(config.threads),
        show_progress: true,
    };
    let id_attribute = matches
        .get_one::<String>("id-attribute")
        .or(config.id_attribute.as_ref())
        .map(String::as_str);

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            randomize_output_path(
                anno_file,
                settings.bootstraps,
                feature,
                &classifier,
                id_attribute,
                settings.seed,
            )
        });

    let features = read_annotation(anno_file, format, feature, id_attribute)?;
    let loci = read_shortstack_loci(ssloci)?;
    let genome = read_chromosome_lengths(fasta)?;
    info!(
        "Randomizing {} loci over {} chromosomes against {} `{}` features",
        loci.len(),
        genome.len(),
        features.len(),
        feature
    );

    let rows = run_bootstraps(&features, &loci, &genome, &classifier, &settings)?;

    write_tally_rows(&output, &rows)
        .with_context(|| format!("Failed to write bootstraps to {}", output.display()))?;
    info!("Done! Wrote {} bootstraps to {}", rows.len(), output.display());

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomize::cli::create_randomize_cli;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    fn randomize_matches(extra: &[&str]) -> ArgMatches {
        let mut argv = vec![
            "randomize",
            "--anno-type",
            "gtf",
            "--anno-file",
            "../tests/data/annotation.gtf",
            "--feature",
            "gene",
            "--ssloci",
            "../tests/data/loci.tsv",
            "--fasta",
            "../tests/data/genome.fa",
        ];
        argv.extend_from_slice(extra);
        create_randomize_cli().try_get_matches_from(argv).unwrap()
    }

    #[rstest]
    fn test_run_randomize_writes_every_bootstrap() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("random.csv");
        let matches = randomize_matches(&[
            "--bootstraps",
            "5",
            "--seed",
            "11",
            "--upstream",
            "100",
            "--body",
            "--output",
            out.to_str().unwrap(),
        ]);

        let rows = run_randomize(&matches).unwrap();
        assert_eq!(rows.len(), 5);

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written.lines().count(), 6);
        assert_eq!(written.lines().next(), Some("upstream,body,downstream"));

        // seeded runs repeat exactly
        assert_eq!(run_randomize(&matches).unwrap(), rows);
    }

    #[rstest]
    fn test_run_randomize_config_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("random.csv");
        let run_file = dir.path().join("run.toml");
        std::fs::write(&run_file, "bootstraps = 3\nseed = 5\nthreads = 1\n").unwrap();

        let matches = randomize_matches(&[
            "--config",
            run_file.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ]);
        assert_eq!(run_randomize(&matches).unwrap().len(), 3);
    }

    #[rstest]
    fn test_run_randomize_locus_too_long() {
        let dir = tempdir().unwrap();
        let loci = dir.path().join("loci.tsv");
        let out = dir.path().join("random.csv");
        std::fs::write(&loci, "Locus\tName\nchr1:1-5000\tHuge\n").unwrap();

        let mut matches_args = vec![
            "randomize",
            "--anno-type",
            "gff3",
            "--anno-file",
            "../tests/data/annotation.gff3",
            "--feature",
            "gene",
            "--fasta",
            "../tests/data/genome.fa",
            "--output",
            out.to_str().unwrap(),
            "--ssloci",
        ];
        matches_args.push(loci.to_str().unwrap());
        let matches = create_randomize_cli()
            .try_get_matches_from(matches_args)
            .unwrap();

        assert!(run_randomize(&matches).is_err());
        assert!(!out.exists());
    }

    #[rstest]
    fn test_bad_anno_type_rejected_by_parser() {
        let result = create_randomize_cli().try_get_matches_from([
            "randomize",
            "--anno-type",
            "bed",
            "--anno-file",
            "a.bed",
            "--feature",
            "gene",
            "--ssloci",
            "l.tsv",
            "--fasta",
            "g.fa",
        ]);
        assert!(result.is_err());
    }
}
