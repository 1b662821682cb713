use clap::{Arg, Command, arg, value_parser};

pub const RANDOMIZE_CMD: &str = "randomize";
pub const DEFAULT_BOOTSTRAPS: usize = 1;

pub fn create_randomize_cli() -> Command {
    Command::new(RANDOMIZE_CMD)
        .about("Randomize ShortStack loci over the genome and count their overlap with annotated features, once per bootstrap.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("anno-type")
                .long("anno-type")
                .required(true)
                .value_parser(["gtf", "gff3"])
                .help("Type of annotation"),
        )
        .arg(
            Arg::new("anno-file")
                .long("anno-file")
                .required(true)
                .help("Input GTF or GFF3 file"),
        )
        .arg(arg!(--feature <feature> "Feature type to look for overlap with, e.g. gene").required(true))
        .arg(arg!(--ssloci <ssloci> "ShortStack loci file").required(true))
        .arg(arg!(--fasta <fasta> "Genome FASTA file").required(true))
        .arg(
            arg!(--upstream <upstream> "Distance upstream of a feature to look for overlap [default: 0]")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--downstream <downstream> "Distance downstream of a feature to look for overlap [default: 0]")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(--body "Also look for overlap over the body of the feature"))
        .arg(
            arg!(--bootstraps <bootstraps> "Number of randomization bootstraps to perform [default: 1]")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--seed <seed> "Seed for the random placements; omit for a fresh draw each run")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--threads <threads> "Number of worker threads (default: all cores)")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("id-attribute")
                .long("id-attribute")
                .required(false)
                .help("Attribute holding the feature id (default: gene_id for GTF, ID for GFF3)"),
        )
        .arg(arg!(--output <output> "Output file (default: named after the annotation and parameters)").required(false))
        .arg(arg!(--config <config> "TOML file of run parameters; flags given here take precedence").required(false))
}
