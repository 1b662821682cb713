mod config;
mod output;
mod overlap;
mod randomize;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "sscluster";
    pub const BIN_NAME: &str = "sscluster";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Measure how ShortStack small-RNA clusters sit around genomic features, and build a bootstrapped null for comparison.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log more (-v debug, -vv trace)"),
        )
        .subcommand(overlap::cli::create_overlap_cli())
        .subcommand(randomize::cli::create_randomize_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // OBSERVED OVERLAPS
        //
        Some((overlap::cli::OVERLAP_CMD, matches)) => {
            init_logging(matches.get_count("verbose"));
            overlap::handlers::run_overlap(matches)?;
        }

        //
        // BOOTSTRAPPED NULL
        //
        Some((randomize::cli::RANDOMIZE_CMD, matches)) => {
            init_logging(matches.get_count("verbose"));
            randomize::handlers::run_randomize(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
