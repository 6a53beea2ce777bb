use nalgebra::{Point3, Vector3};

/// Represents a single atom of a structure: its chemical species and Cartesian position.
///
/// Atoms carry no identifier of their own; their identity is their index within the
/// owning [`Structure`](super::structure::Structure).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The chemical symbol of the atom (e.g., "Si", "C", "Mo").
    pub symbol: String,
    /// The Cartesian coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` from a chemical symbol and a position.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The chemical symbol of the atom.
    /// * `position` - The Cartesian coordinates of the atom.
    pub fn new(symbol: &str, position: Point3<f64>) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
        }
    }
}

/// Simulation metadata attached to a single atom.
///
/// Every atom of a structure owns exactly one `AtomInfo`, created empty together with the
/// atom. The fields are filled by the annotation operations of the
/// [`engine`](crate::engine) module.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtomInfo {
    /// Initial velocity in units of eV^(1/2) amu^(-1/2).
    pub velocity: Option<Vector3<f64>>,
    /// Index of the unit-cell site this atom corresponds to.
    pub basis: Option<usize>,
}

impl AtomInfo {
    /// Creates a record that holds only a basis index.
    pub fn with_basis(basis: usize) -> Self {
        Self {
            basis: Some(basis),
            ..Self::default()
        }
    }

    /// Returns `true` if no annotation has been written to this record.
    pub fn is_empty(&self) -> bool {
        self.velocity.is_none() && self.basis.is_none()
    }
}
