use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use sscluster_io::writer::TALLY_HEADER;
use sscluster_io::{read_results, read_shortstack_report, write_tally_rows};
use sscluster_overlap::{TallyRow, count_pairs, tally_overlaps};

use crate::config::RunConfig;
use crate::output::overlap_output_path;

pub fn run_overlap(matches: &ArgMatches) -> Result<TallyRow> {
    let results = matches
        .get_one::<String>("results")
        .context("A path to a results file is required.")?;

    let ssreport = matches
        .get_one::<String>("ssreport")
        .context("A path to a ShortStack report is required.")?;

    let config = RunConfig::from_matches(matches).context("Failed to read the run config")?;
    let classifier = config.classifier(matches);

    let ssreport = Path::new(ssreport);
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| overlap_output_path(ssreport, &classifier));

    let features = read_results(results)?;
    let clusters = read_shortstack_report(ssreport)?;
    info!(
        "Classifying {} clusters against {} features ({} pairs)",
        clusters.len(),
        features.len(),
        count_pairs(&features, &clusters)
    );

    let row = tally_overlaps(&features, &clusters, &classifier);
    info!("{}", TALLY_HEADER.join(","));
    info!("{}", row);

    write_tally_rows(&output, &[row])
        .with_context(|| format!("Failed to write overlaps to {}", output.display()))?;
    info!("Wrote overlaps to {}", output.display());

    Ok(row)
}
