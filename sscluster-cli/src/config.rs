use std::fs::read_to_string;
use std::path::Path;

use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sscluster_overlap::ClassifierConfig;

pub const CONFIG_ARG: &str = "config";

///
/// Run parameters read from a TOML file. Every key is optional; a key given
/// on the command line wins over the file.
///
/// ```toml
/// upstream = 500
/// downstream = 500
/// body = true
/// bootstraps = 1000
/// seed = 42
/// ```
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub upstream: Option<u64>,
    pub downstream: Option<u64>,
    pub body: Option<bool>,
    pub bootstraps: Option<usize>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub id_attribute: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl TryFrom<&Path> for RunConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

impl RunConfig {
    /// The file named by `--config`, or an empty config when there is none.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        match matches.get_one::<String>(CONFIG_ARG) {
            Some(path) => RunConfig::try_from(Path::new(path)),
            None => Ok(RunConfig::default()),
        }
    }

    ///
    /// Resolve the classifier settings: command line, then this file, then
    /// the defaults (no flanks, no body).
    ///
    /// `--body` can only switch the body zone on; a file that sets
    /// `body = true` cannot be overridden from the command line.
    pub fn classifier(&self, matches: &ArgMatches) -> ClassifierConfig {
        let upstream = matches.get_one::<u64>("upstream").copied();
        let downstream = matches.get_one::<u64>("downstream").copied();

        ClassifierConfig::new(
            upstream.or(self.upstream).unwrap_or(0),
            downstream.or(self.downstream).unwrap_or(0),
            matches.get_flag("body") || self.body.unwrap_or(false),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap::cli::create_overlap_cli;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    fn overlap_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["overlap", "--results", "r.csv", "--ssreport", "s.csv"];
        argv.extend_from_slice(args);
        create_overlap_cli().try_get_matches_from(argv).unwrap()
    }

    #[rstest]
    fn test_parse_run_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, "upstream = 500\nbody = true\nseed = 7\nid_attribute = \"Name\"\n")
            .unwrap();

        let config = RunConfig::try_from(path.as_path()).unwrap();
        assert_eq!(
            config,
            RunConfig {
                upstream: Some(500),
                body: Some(true),
                seed: Some(7),
                id_attribute: Some("Name".to_string()),
                ..Default::default()
            }
        );
    }

    #[rstest]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(&path, "upstrem = 500\n").unwrap();

        assert!(matches!(
            RunConfig::try_from(path.as_path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[rstest]
    fn test_missing_run_file() {
        let result = RunConfig::try_from(Path::new("../tests/data/nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[rstest]
    fn test_defaults_without_file_or_flags() {
        let matches = overlap_matches(&[]);
        let config = RunConfig::from_matches(&matches).unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.classifier(&matches), ClassifierConfig::new(0, 0, false));
    }

    #[rstest]
    fn test_flags_override_file() {
        let file = RunConfig {
            upstream: Some(500),
            downstream: Some(300),
            ..Default::default()
        };

        let matches = overlap_matches(&["--upstream", "20", "--body"]);
        assert_eq!(file.classifier(&matches), ClassifierConfig::new(20, 300, true));
    }

    #[rstest]
    fn test_file_body_stays_on() {
        let file = RunConfig {
            body: Some(true),
            ..Default::default()
        };
        assert!(file.classifier(&overlap_matches(&[])).include_body);
    }
}
