use crate::core::models::atom::AtomInfo;
use crate::core::models::structure::Structure;
use crate::engine::error::PrepError;
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};

/// Validated replication factors along the three cell vectors.
///
/// Every factor is at least 1 and below 2^64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Replication([u64; 3]);

impl Replication {
    /// Builds replication factors from a sequence of one or three integers.
    ///
    /// A single value is applied to all three axes.
    ///
    /// # Errors
    ///
    /// * [`PrepError::ReplicationLength`] if `factors` does not hold 1 or 3 values.
    /// * [`PrepError::ReplicationRange`] if a factor is not in `[1, 2^64)`.
    pub fn from_factors(factors: &[i128]) -> Result<Self, PrepError> {
        let factors: [i128; 3] = match *factors {
            [n] => [n; 3],
            [a, b, c] => [a, b, c],
            _ => return Err(PrepError::ReplicationLength(factors.len())),
        };

        let mut checked = [0u64; 3];
        for (axis, (&value, slot)) in factors.iter().zip(checked.iter_mut()).enumerate() {
            *slot = u64::try_from(value)
                .ok()
                .filter(|&f| f >= 1)
                .ok_or(PrepError::ReplicationRange { axis, value })?;
        }
        Ok(Self(checked))
    }

    /// Returns the factors along `a`, `b` and `c`.
    pub fn factors(&self) -> [u64; 3] {
        self.0
    }
}

impl fmt::Display for Replication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}x{}x{}", a, b, c)
    }
}

impl FromStr for Replication {
    type Err = PrepError;

    /// Parses `"2"`, `"2,2,1"`, `"2x2x1"` or `"2 2 1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c == 'x' || c == 'X' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let factors = parts
            .iter()
            .map(|part| {
                part.parse::<i128>()
                    .map_err(|_| PrepError::ReplicationParse(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_factors(&factors)
    }
}

/// Replicates `structure` and broadcasts basis indices to every image.
///
/// `rep` holds either one factor, applied along all three axes, or one factor per axis.
/// See [`repeat_with`] for the layout of the returned supercell.
///
/// # Errors
///
/// * [`PrepError::ReplicationLength`] or [`PrepError::ReplicationRange`] for invalid `rep`.
/// * Any error of [`repeat_with`].
pub fn repeat(structure: &Structure, rep: &[i128]) -> Result<Structure, PrepError> {
    let replication = Replication::from_factors(rep)?;
    repeat_with(structure, &replication)
}

/// Replicates `structure` by `replication` and broadcasts basis indices to every image.
///
/// The supercell holds `N * a * b * c` atoms as contiguous copies of the `N` original
/// atoms: copy `i` occupies indices `[i * N, (i + 1) * N)`. Copy 0 is identical to the
/// input, metadata included. Every atom `i * N + j` of a later copy receives a record that
/// only holds the basis index of original atom `j`; velocities are not propagated.
/// The input structure is not modified.
///
/// # Errors
///
/// * [`PrepError::MissingBasis`] if any atom of `structure` has no basis index.
/// * [`PrepError::SupercellTooLarge`] if the supercell size overflows `usize` or its
///   storage cannot be allocated.
#[instrument(skip_all, name = "repeat", fields(replication = %replication))]
pub fn repeat_with(
    structure: &Structure,
    replication: &Replication,
) -> Result<Structure, PrepError> {
    let n = structure.len();

    let bases = structure
        .atom_infos()
        .iter()
        .enumerate()
        .map(|(atom, info)| info.basis.ok_or(PrepError::MissingBasis { atom }))
        .collect::<Result<Vec<usize>, _>>()?;

    let too_large = || PrepError::SupercellTooLarge {
        atoms: n,
        reps: replication.factors(),
    };
    let reps = match replication.factors().map(usize::try_from) {
        [Ok(a), Ok(b), Ok(c)] => [a, b, c],
        _ => return Err(too_large()),
    };

    let mut supercell = structure.replicate(reps).ok_or_else(too_large)?;

    // Images follow copy 0 in blocks of `n`, so cycling the bases lines them up.
    for (info, &basis) in supercell.atom_infos_mut()[n..]
        .iter_mut()
        .zip(bases.iter().cycle())
    {
        *info = AtomInfo::with_basis(basis);
    }

    info!(
        atoms = n,
        supercell_atoms = supercell.len(),
        "Supercell built with basis indices propagated."
    );
    Ok(supercell)
}
