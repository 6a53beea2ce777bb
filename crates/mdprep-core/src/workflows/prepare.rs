use crate::core::models::structure::Structure;
use crate::engine::basis::add_basis;
use crate::engine::config::{BasisSelection, PrepConfig};
use crate::engine::error::PrepError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::replication::repeat_with;
use crate::engine::velocities::set_velocities;
use tracing::{info, instrument};

/// Prepares a copy of `structure` for simulation input.
///
/// The phases run in a fixed order: basis assignment, velocity assignment (if
/// `config.velocities` is set), then replication (if `config.replication` is set).
/// Replicated images carry only basis indices; velocities stay on the original copy.
///
/// # Errors
///
/// Propagates the first [`PrepError`] raised by any phase. The input is never modified.
#[instrument(skip_all, name = "prepare_workflow")]
pub fn run(
    structure: &Structure,
    config: &PrepConfig,
    reporter: &ProgressReporter,
) -> Result<Structure, PrepError> {
    info!(atoms = structure.len(), "Starting structure preparation.");
    let mut working = structure.clone();

    reporter.report(Progress::PhaseStart { name: "Basis" });
    match &config.basis {
        BasisSelection::Implicit => add_basis(&mut working, None, None)?,
        BasisSelection::Explicit { index, mapping } => {
            add_basis(&mut working, Some(index.as_slice()), Some(mapping.as_slice()))?
        }
    }
    reporter.report(Progress::PhaseFinish);

    if let Some(velocities) = &config.velocities {
        reporter.report(Progress::PhaseStart { name: "Velocities" });
        set_velocities(&mut working, velocities)?;
        reporter.report(Progress::PhaseFinish);
    }

    if let Some(replication) = &config.replication {
        reporter.report(Progress::PhaseStart { name: "Replication" });
        working = repeat_with(&working, replication)?;
        reporter.report(Progress::Message(format!(
            "Supercell {} holds {} atoms",
            replication,
            working.len()
        )));
        reporter.report(Progress::PhaseFinish);
    }

    info!(atoms = working.len(), "Structure preparation complete.");
    Ok(working)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cell::Cell;
    use crate::engine::config::PrepConfigBuilder;
    use crate::engine::replication::Replication;
    use nalgebra::{Point3, Vector3};
    use std::sync::Mutex;

    fn create_structure() -> Structure {
        let mut structure = Structure::new(Cell::orthorhombic(2.0, 2.0, 2.0));
        structure.add_atom("Na", Point3::new(0.0, 0.0, 0.0));
        structure.add_atom("Cl", Point3::new(1.0, 1.0, 1.0));
        structure
    }

    #[test]
    fn default_config_assigns_implicit_basis_only() {
        let structure = create_structure();
        let prepared = run(&structure, &PrepConfig::default(), &ProgressReporter::new()).unwrap();

        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared.unitcell(), Some(&[0, 1][..]));
        assert!(prepared.atom_infos().iter().all(|i| i.velocity.is_none()));
        assert!(structure.unitcell().is_none());
    }

    #[test]
    fn full_config_runs_every_phase_in_order() {
        let structure = create_structure();
        let config = PrepConfigBuilder::new()
            .unitcell_index(vec![1, 0])
            .basis_mapping(vec![1, 0])
            .velocities(vec![vec![0.1, 0.0, 0.0], vec![0.0, 0.1, 0.0]])
            .replication(Replication::from_factors(&[2, 1, 1]).unwrap())
            .build()
            .unwrap();

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            if let Progress::PhaseStart { name } = event {
                events.lock().unwrap().push(name);
            }
        }));

        let prepared = run(&structure, &config, &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec!["Basis", "Velocities", "Replication"]
        );
        assert_eq!(prepared.len(), 4);
        assert_eq!(prepared.unitcell(), Some(&[1, 0][..]));
        let bases: Vec<_> = prepared.atom_infos().iter().map(|i| i.basis).collect();
        assert_eq!(bases, vec![Some(1), Some(0), Some(1), Some(0)]);
        assert_eq!(
            prepared.info(1).unwrap().velocity,
            Some(Vector3::new(0.0, 0.1, 0.0))
        );
        assert_eq!(prepared.info(3).unwrap().velocity, None);
    }

    #[test]
    fn phase_errors_are_propagated() {
        let structure = create_structure();
        let config = PrepConfigBuilder::new()
            .velocities(vec![vec![0.0, 0.0, 0.0]])
            .build()
            .unwrap();

        let err = run(&structure, &config, &ProgressReporter::new()).unwrap_err();

        assert_eq!(
            err,
            PrepError::VelocityCount {
                expected: 2,
                found: 1
            }
        );
    }
}
