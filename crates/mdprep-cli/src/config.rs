use crate::cli::PrepareArgs;
use crate::error::{CliError, Result};
use mdprep::engine::config as core_config;
use mdprep::engine::replication::Replication;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileBasisConfig {
    #[serde(rename = "unitcell-index")]
    unitcell_index: Option<Vec<usize>>,
    mapping: Option<Vec<usize>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct FileVelocityConfig {
    values: Vec<Vec<f64>>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
enum FileReplicationFactors {
    Uniform(i64),
    PerAxis(Vec<i64>),
}

impl FileReplicationFactors {
    fn to_factors(&self) -> Vec<i128> {
        match self {
            FileReplicationFactors::Uniform(n) => vec![i128::from(*n)],
            FileReplicationFactors::PerAxis(values) => {
                values.iter().copied().map(i128::from).collect()
            }
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct FileReplicationConfig {
    factors: FileReplicationFactors,
}

/// Preprocessing configuration as written in a TOML file.
///
/// ```toml
/// [basis]
/// unitcell-index = [0, 1]
/// mapping = [0, 1, 0, 1]
///
/// [velocities]
/// values = [[0.01, 0.0, 0.0], [0.0, 0.01, 0.0], [0.0, 0.0, 0.01], [0.0, 0.0, 0.0]]
///
/// [replication]
/// factors = [2, 2, 1]
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    basis: Option<FileBasisConfig>,
    velocities: Option<FileVelocityConfig>,
    replication: Option<FileReplicationConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Merges the optional configuration file with command-line overrides.
///
/// Command-line values win over the file: `--repeat` replaces `[replication]` and
/// `--implicit-basis` discards `[basis]`.
pub fn build_config(args: &PrepareArgs) -> Result<core_config::PrepConfig> {
    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    merge(file_config, args.repeat, args.implicit_basis)
}

fn merge(
    file_config: FileConfig,
    repeat_override: Option<Replication>,
    implicit_basis: bool,
) -> Result<core_config::PrepConfig> {
    let mut builder = core_config::PrepConfigBuilder::new();

    if !implicit_basis {
        let basis = file_config.basis.unwrap_or_default();
        if let Some(index) = basis.unitcell_index {
            builder = builder.unitcell_index(index);
        }
        if let Some(mapping) = basis.mapping {
            builder = builder.basis_mapping(mapping);
        }
    }

    if let Some(velocities) = file_config.velocities {
        builder = builder.velocities(velocities.values);
    }

    let replication = match (repeat_override, file_config.replication) {
        (Some(replication), _) => Some(replication),
        (None, Some(file_replication)) => Some(Replication::from_factors(
            &file_replication.factors.to_factors(),
        )?),
        (None, None) => None,
    };
    if let Some(replication) = replication {
        builder = builder.replication(replication);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
