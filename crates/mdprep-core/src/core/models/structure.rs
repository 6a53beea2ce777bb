use super::atom::{Atom, AtomInfo};
use super::cell::Cell;
use nalgebra::Point3;

/// Represents an atomic structure: an ordered collection of atoms, one metadata record per
/// atom, the simulation cell, and the list of atoms forming the reference unit cell.
///
/// Atoms are identified by their index. The per-atom metadata is kept in a parallel vector
/// so that every atom always owns a record, starting out empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    /// Atoms in insertion order.
    atoms: Vec<Atom>,
    /// Metadata records, `info[i]` belongs to `atoms[i]`.
    info: Vec<AtomInfo>,
    /// Indices of the atoms that make up the reference unit cell, in basis order.
    unitcell: Option<Vec<usize>>,
    /// The simulation cell.
    cell: Cell,
}

impl Structure {
    /// Creates a new, empty structure inside the given cell.
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            ..Self::default()
        }
    }

    /// Appends an atom and returns its index.
    ///
    /// The atom receives an empty [`AtomInfo`] record.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The chemical symbol of the atom.
    /// * `position` - The Cartesian coordinates of the atom.
    pub fn add_atom(&mut self, symbol: &str, position: Point3<f64>) -> usize {
        self.push(Atom::new(symbol, position), AtomInfo::default())
    }

    /// Appends an atom together with a pre-filled metadata record and returns its index.
    pub fn push(&mut self, atom: Atom, info: AtomInfo) -> usize {
        self.atoms.push(atom);
        self.info.push(info);
        self.atoms.len() - 1
    }

    /// Returns the number of atoms in the structure.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` if the structure holds no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Retrieves an atom by index.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the index is in range, otherwise `None`.
    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    /// Returns all atoms as a slice, in index order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Retrieves the metadata record of an atom.
    ///
    /// # Return
    ///
    /// Returns `Some(&AtomInfo)` if the index is in range, otherwise `None`.
    pub fn info(&self, index: usize) -> Option<&AtomInfo> {
        self.info.get(index)
    }

    /// Retrieves a mutable reference to the metadata record of an atom.
    pub fn info_mut(&mut self, index: usize) -> Option<&mut AtomInfo> {
        self.info.get_mut(index)
    }

    /// Returns all metadata records as a slice, in atom index order.
    pub fn atom_infos(&self) -> &[AtomInfo] {
        &self.info
    }

    /// Returns all metadata records as a mutable slice, in atom index order.
    pub fn atom_infos_mut(&mut self) -> &mut [AtomInfo] {
        &mut self.info
    }

    /// Returns an iterator over `(index, &Atom, &AtomInfo)` triples.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Atom, &AtomInfo)> {
        self.atoms
            .iter()
            .zip(self.info.iter())
            .enumerate()
            .map(|(index, (atom, info))| (index, atom, info))
    }

    /// Returns the unit-cell atom indices, if a basis has been assigned.
    pub fn unitcell(&self) -> Option<&[usize]> {
        self.unitcell.as_deref()
    }

    /// Replaces the unit-cell atom indices.
    pub fn set_unitcell(&mut self, unitcell: Vec<usize>) {
        self.unitcell = Some(unitcell);
    }

    /// Returns the simulation cell.
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// Builds a supercell by translating copies of this structure along the cell vectors.
    ///
    /// Copies are generated with the `a` offset varying slowest and the `c` offset
    /// fastest. Each copy is a contiguous block of `len()` atoms, so copy `i` occupies
    /// indices `[i * len(), (i + 1) * len())` and copy 0 is the untranslated original.
    ///
    /// This primitive knows nothing about simulation annotations: atoms of copy 0 keep
    /// their metadata, every other image starts with an empty [`AtomInfo`]. The unit-cell
    /// list is carried over unchanged and the cell is scaled by `reps`.
    ///
    /// Returns `None` if `len() * reps[0] * reps[1] * reps[2]` overflows `usize` or the
    /// supercell storage cannot be allocated.
    pub fn replicate(&self, reps: [usize; 3]) -> Option<Structure> {
        let total = reps
            .iter()
            .try_fold(self.len(), |acc, &rep| acc.checked_mul(rep))?;

        let mut atoms = Vec::new();
        atoms.try_reserve_exact(total).ok()?;
        let mut info = Vec::new();
        info.try_reserve_exact(total).ok()?;

        let mut supercell = Structure {
            atoms,
            info,
            unitcell: self.unitcell.clone(),
            cell: self.cell.scaled(reps),
        };
        if self.is_empty() {
            return Some(supercell);
        }

        for m0 in 0..reps[0] {
            for m1 in 0..reps[1] {
                for m2 in 0..reps[2] {
                    let is_origin = m0 == 0 && m1 == 0 && m2 == 0;
                    let shift = self.cell.translation([m0, m1, m2]);
                    for (atom, info) in self.atoms.iter().zip(&self.info) {
                        let image = Atom {
                            symbol: atom.symbol.clone(),
                            position: atom.position + shift,
                        };
                        let image_info = if is_origin {
                            *info
                        } else {
                            AtomInfo::default()
                        };
                        supercell.push(image, image_info);
                    }
                }
            }
        }

        Some(supercell)
    }
}
