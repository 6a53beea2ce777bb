use crate::core::models::structure::Structure;
use crate::engine::error::PrepError;
use nalgebra::Vector3;
use tracing::{debug, instrument};

/// Assigns an initial velocity to every atom of `structure`.
///
/// Velocities are given in units of eV^(1/2) amu^(-1/2), one `[vx, vy, vz]` entry per
/// atom in atom index order. The input is validated completely before any record is
/// written: on error the structure is left unchanged. Basis indices are not touched.
///
/// # Arguments
///
/// * `structure` - The structure to annotate.
/// * `custom` - One three-component velocity per atom.
///
/// # Errors
///
/// * [`PrepError::MissingVelocities`] if `custom` is empty.
/// * [`PrepError::VelocityCount`] if `custom` does not hold exactly one entry per atom.
/// * [`PrepError::VelocityArity`] if an entry does not have exactly three components.
#[instrument(skip_all, name = "set_velocities")]
pub fn set_velocities<V>(structure: &mut Structure, custom: &[V]) -> Result<(), PrepError>
where
    V: AsRef<[f64]>,
{
    let velocities = validate(structure.len(), custom)?;

    for (info, velocity) in structure.atom_infos_mut().iter_mut().zip(velocities) {
        info.velocity = Some(velocity);
    }

    debug!(atoms = structure.len(), "Velocities assigned.");
    Ok(())
}

fn validate<V>(num_atoms: usize, custom: &[V]) -> Result<Vec<Vector3<f64>>, PrepError>
where
    V: AsRef<[f64]>,
{
    if custom.is_empty() {
        return Err(PrepError::MissingVelocities);
    }
    if custom.len() != num_atoms {
        return Err(PrepError::VelocityCount {
            expected: num_atoms,
            found: custom.len(),
        });
    }

    custom
        .iter()
        .enumerate()
        .map(|(atom, velocity)| match *velocity.as_ref() {
            [vx, vy, vz] => Ok(Vector3::new(vx, vy, vz)),
            ref other => Err(PrepError::VelocityArity {
                atom,
                found: other.len(),
            }),
        })
        .collect()
}
