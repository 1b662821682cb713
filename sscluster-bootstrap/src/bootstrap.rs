use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use sscluster_core::models::{ChromosomeLength, LocusLength, RecordStore};
use sscluster_overlap::{ClassifierConfig, Located, TallyRow, tally_overlaps};

use crate::errors::Result;
use crate::randomize::GenomeRandomizer;

///
/// How many trials to run and how.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSettings {
    pub bootstraps: usize,
    /// fixes every trial's placements; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// worker threads; `None` uses every core
    pub threads: Option<usize>,
    pub show_progress: bool,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        BootstrapSettings {
            bootstraps: 1,
            seed: None,
            threads: None,
            show_progress: false,
        }
    }
}

///
/// Seeds for every trial, drawn in trial order from one master generator so a
/// run is reproducible no matter how trials are scheduled across threads.
///
pub fn trial_seeds(bootstraps: usize, seed: Option<u64>) -> Vec<u64> {
    let mut master = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..bootstraps).map(|_| master.random::<u64>()).collect()
}

///
/// Run one bootstrap trial: place every locus at random, then tally overlaps
/// against the features.
///
pub fn run_trial<F: Located>(
    features: &RecordStore<F>,
    loci: &[LocusLength],
    randomizer: &GenomeRandomizer,
    classifier: &ClassifierConfig,
    seed: u64,
) -> Result<TallyRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    let clusters = randomizer.randomize(loci, &mut rng)?;
    Ok(tally_overlaps(features, &clusters, classifier))
}

///
/// Build a null distribution of overlap tallies by repeatedly randomizing the
/// loci over the genome.
///
/// Trials run in parallel, each with its own generator, and the rows come back
/// in trial order. Any failed trial fails the whole run.
///
/// # Arguments
/// - features: features to overlap against, shared read-only by every trial
/// - loci: names and lengths of the loci to randomize
/// - genome: chromosome length table
/// - classifier: classifier distances and body switch
/// - settings: trial count, seed and thread count
pub fn run_bootstraps<F>(
    features: &RecordStore<F>,
    loci: &[LocusLength],
    genome: &[ChromosomeLength],
    classifier: &ClassifierConfig,
    settings: &BootstrapSettings,
) -> Result<Vec<TallyRow>>
where
    F: Located + Sync,
{
    let randomizer = GenomeRandomizer::new(genome);
    randomizer.check(loci)?;

    let seeds = trial_seeds(settings.bootstraps, settings.seed);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.threads.unwrap_or(0))
        .build()?;
    debug!(
        "Running {} bootstraps of {} loci on {} threads",
        settings.bootstraps,
        loci.len(),
        pool.current_num_threads()
    );

    let pb = match settings.show_progress {
        true => ProgressBar::new(settings.bootstraps as u64),
        false => ProgressBar::hidden(),
    };
    if let Ok(style) =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} bootstraps")
    {
        pb.set_style(style);
    }

    let rows = pool.install(|| {
        seeds
            .par_iter()
            .map(|&seed| {
                let row = run_trial(features, loci, &randomizer, classifier, seed);
                pb.inc(1);
                row
            })
            .collect::<Result<Vec<TallyRow>>>()
    })?;
    pb.finish_and_clear();

    for (i, row) in rows.iter().enumerate() {
        info!("Bootstrap {}: {}", i + 1, row);
    }

    Ok(rows)
}
