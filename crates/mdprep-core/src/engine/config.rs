use crate::engine::replication::Replication;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// How basis indices are assigned before replication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BasisSelection {
    /// The whole input structure is the unit cell.
    #[default]
    Implicit,
    /// Explicit unit-cell atoms and a per-atom basis mapping.
    Explicit {
        index: Vec<usize>,
        mapping: Vec<usize>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrepConfig {
    pub basis: BasisSelection,
    /// Per-atom velocities of the input structure, in eV^(1/2) amu^(-1/2).
    pub velocities: Option<Vec<Vec<f64>>>,
    pub replication: Option<Replication>,
}

#[derive(Default)]
pub struct PrepConfigBuilder {
    unitcell_index: Option<Vec<usize>>,
    basis_mapping: Option<Vec<usize>>,
    velocities: Option<Vec<Vec<f64>>>,
    replication: Option<Replication>,
}

impl PrepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unitcell_index(mut self, index: Vec<usize>) -> Self {
        self.unitcell_index = Some(index);
        self
    }
    pub fn basis_mapping(mut self, mapping: Vec<usize>) -> Self {
        self.basis_mapping = Some(mapping);
        self
    }
    pub fn velocities(mut self, velocities: Vec<Vec<f64>>) -> Self {
        self.velocities = Some(velocities);
        self
    }
    pub fn replication(mut self, replication: Replication) -> Self {
        self.replication = Some(replication);
        self
    }

    pub fn build(self) -> Result<PrepConfig, ConfigError> {
        let basis = match (self.unitcell_index, self.basis_mapping) {
            (None, None) => BasisSelection::Implicit,
            (Some(index), Some(mapping)) => BasisSelection::Explicit { index, mapping },
            (Some(_), None) => return Err(ConfigError::MissingParameter("basis_mapping")),
            (None, Some(_)) => return Err(ConfigError::MissingParameter("unitcell_index")),
        };
        Ok(PrepConfig {
            basis,
            velocities: self.velocities,
            replication: self.replication,
        })
    }
}
