use clap::{Command, arg, value_parser};

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Count ShortStack clusters upstream of, within, and downstream of the features in a results file.")
        .arg_required_else_help(true)
        .arg(arg!(--results <results> "Results file annotated with coordinates").required(true))
        .arg(arg!(--ssreport <ssreport> "ShortStack full report").required(true))
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
        .arg(arg!(--output <output> "Output file (default: named after the report and parameters)").required(false))
        .arg(arg!(--config <config> "TOML file of run parameters; flags given here take precedence").required(false))
}
