use thiserror::Error;

/// Coarse classification of a [`PrepError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrepErrorKind {
    /// A required argument was absent.
    MissingInput,
    /// An argument had the wrong count, shape, or range.
    Validation,
    /// The structure was not in the state the operation requires.
    Precondition,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrepError {
    #[error("No velocities provided")]
    MissingVelocities,

    #[error("Incorrect number of velocities for number of atoms: expected {expected}, got {found}")]
    VelocityCount { expected: usize, found: usize },

    #[error("Velocity of atom {atom} has {found} components; three are required")]
    VelocityArity { atom: usize, found: usize },

    #[error("Full atom mapping required if index is provided: expected {expected} entries, got {}", describe_count(.found))]
    BasisMapping {
        expected: usize,
        found: Option<usize>,
    },

    #[error("Replication must be a sequence of 1 or 3 integers, got {0}")]
    ReplicationLength(usize),

    #[error("Replication factor '{0}' is not an integer")]
    ReplicationParse(String),

    #[error("Replication factor {value} along axis {axis} is outside the range [1, 2^64)")]
    ReplicationRange { axis: usize, value: i128 },

    #[error("Supercell of {atoms} atoms repeated {reps:?} does not fit in memory")]
    SupercellTooLarge { atoms: usize, reps: [u64; 3] },

    #[error("Atom {atom} has no basis index; assign a basis before repeating")]
    MissingBasis { atom: usize },
}

fn describe_count(found: &Option<usize>) -> String {
    found.map_or_else(|| "none".to_string(), |n| n.to_string())
}

impl PrepError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> PrepErrorKind {
        match self {
            PrepError::MissingVelocities => PrepErrorKind::MissingInput,
            PrepError::VelocityCount { .. }
            | PrepError::VelocityArity { .. }
            | PrepError::BasisMapping { .. }
            | PrepError::ReplicationLength(_)
            | PrepError::ReplicationParse(_)
            | PrepError::ReplicationRange { .. }
            | PrepError::SupercellTooLarge { .. } => PrepErrorKind::Validation,
            PrepError::MissingBasis { .. } => PrepErrorKind::Precondition,
        }
    }
}
