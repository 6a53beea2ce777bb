use crate::core::models::structure::Structure;
use crate::engine::error::PrepError;
use tracing::{debug, instrument, warn};

/// Tags every atom of `structure` with the unit-cell site it corresponds to.
///
/// Two modes are supported:
///
/// * **Explicit** - `index` lists the atoms forming the unit cell, in basis order, and
///   `mapping` gives the basis index of every atom. The unit-cell list becomes `index`
///   verbatim and atom `i` receives basis `mapping[i]`.
/// * **Implicit** - no `index` (or an empty one): the whole structure is taken as the unit
///   cell. The unit-cell list becomes `0..N` and every atom is its own basis site.
///
/// Velocities already present on the atoms are preserved.
///
/// # Arguments
///
/// * `structure` - The structure to annotate.
/// * `index` - Atom indices of the unit cell, in basis order.
/// * `mapping` - Basis index of every atom; required whenever `index` is given.
///
/// # Errors
///
/// Returns [`PrepError::BasisMapping`] if `index` is given and `mapping` is absent or does
/// not contain exactly one entry per atom. The structure is left unchanged in that case.
#[instrument(skip_all, name = "add_basis")]
pub fn add_basis(
    structure: &mut Structure,
    index: Option<&[usize]>,
    mapping: Option<&[usize]>,
) -> Result<(), PrepError> {
    let n = structure.len();

    match index.filter(|index| !index.is_empty()) {
        Some(index) => {
            let mapping = mapping
                .filter(|mapping| mapping.len() == n)
                .ok_or(PrepError::BasisMapping {
                    expected: n,
                    found: mapping.map(<[usize]>::len),
                })?;

            for (info, &basis) in structure.atom_infos_mut().iter_mut().zip(mapping) {
                info.basis = Some(basis);
            }
            structure.set_unitcell(index.to_vec());
            debug!(
                atoms = n,
                unitcell_size = index.len(),
                "Explicit basis assigned."
            );
        }
        None => {
            if mapping.is_some() {
                warn!("A basis mapping was given without unit-cell indices; it is ignored.");
            }

            for (idx, info) in structure.atom_infos_mut().iter_mut().enumerate() {
                info.basis = Some(idx);
            }
            structure.set_unitcell((0..n).collect());
            debug!(atoms = n, "Structure taken as its own unit cell.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cell::Cell;
    use crate::engine::error::PrepErrorKind;
    use nalgebra::{Point3, Vector3};

    fn create_structure(n: usize) -> Structure {
        let mut structure = Structure::new(Cell::orthorhombic(4.0, 4.0, 4.0));
        for i in 0..n {
            structure.add_atom("Cu", Point3::new(i as f64, 0.0, 0.0));
        }
        structure
    }

    #[test]
    fn implicit_mode_makes_every_atom_its_own_site() {
        let mut structure = create_structure(4);

        add_basis(&mut structure, None, None).unwrap();

        assert_eq!(structure.unitcell(), Some(&[0, 1, 2, 3][..]));
        for i in 0..4 {
            assert_eq!(structure.info(i).unwrap().basis, Some(i));
        }
    }

    #[test]
    fn explicit_mode_uses_index_and_mapping_verbatim() {
        let mut structure = create_structure(4);

        add_basis(&mut structure, Some(&[2, 0]), Some(&[1, 1, 0, 0])).unwrap();

        assert_eq!(structure.unitcell(), Some(&[2, 0][..]));
        let bases: Vec<_> = structure.atom_infos().iter().map(|i| i.basis).collect();
        assert_eq!(bases, vec![Some(1), Some(1), Some(0), Some(0)]);
    }

    #[test]
    fn explicit_mode_without_mapping_fails() {
        let mut structure = create_structure(3);
        let snapshot = structure.clone();

        let err = add_basis(&mut structure, Some(&[0]), None).unwrap_err();

        assert_eq!(
            err,
            PrepError::BasisMapping {
                expected: 3,
                found: None
            }
        );
        assert_eq!(err.kind(), PrepErrorKind::Validation);
        assert_eq!(structure, snapshot);
    }

    #[test]
    fn explicit_mode_with_short_mapping_fails_without_mutation() {
        let mut structure = create_structure(3);
        let snapshot = structure.clone();

        let err = add_basis(&mut structure, Some(&[0]), Some(&[0, 0])).unwrap_err();

        assert_eq!(
            err,
            PrepError::BasisMapping {
                expected: 3,
                found: Some(2)
            }
        );
        assert_eq!(structure, snapshot);
    }

    #[test]
    fn mapping_without_index_falls_back_to_implicit_mode() {
        let mut structure = create_structure(2);

        add_basis(&mut structure, None, Some(&[0, 0])).unwrap();

        assert_eq!(structure.unitcell(), Some(&[0, 1][..]));
        assert_eq!(structure.info(1).unwrap().basis, Some(1));
    }

    #[test]
    fn empty_index_is_treated_as_implicit() {
        let mut structure = create_structure(2);

        add_basis(&mut structure, Some(&[]), None).unwrap();

        assert_eq!(structure.unitcell(), Some(&[0, 1][..]));
    }

    #[test]
    fn preserves_existing_velocities() {
        let mut structure = create_structure(2);
        structure.info_mut(1).unwrap().velocity = Some(Vector3::new(0.5, 0.5, 0.5));

        add_basis(&mut structure, None, None).unwrap();

        assert_eq!(
            structure.info(1).unwrap().velocity,
            Some(Vector3::new(0.5, 0.5, 0.5))
        );
        assert_eq!(structure.info(1).unwrap().basis, Some(1));
    }

    #[test]
    fn empty_structure_gets_empty_unitcell() {
        let mut structure = create_structure(0);
        add_basis(&mut structure, None, None).unwrap();
        assert_eq!(structure.unitcell(), Some(&[][..]));
    }
}
