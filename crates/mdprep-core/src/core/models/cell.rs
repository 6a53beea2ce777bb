use nalgebra::{Matrix3, Vector3};

/// The simulation cell of a structure.
///
/// The lattice is stored row-wise: row 0 is the `a` vector, row 1 is `b`, row 2 is `c`,
/// all in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Lattice vectors as matrix rows.
    pub lattice: Matrix3<f64>,
    /// Periodic boundary flags along `a`, `b` and `c`.
    pub pbc: [bool; 3],
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            lattice: Matrix3::zeros(),
            pbc: [false; 3],
        }
    }
}

impl Cell {
    /// Creates a cell from explicit lattice vectors and periodicity flags.
    ///
    /// # Arguments
    ///
    /// * `a`, `b`, `c` - The three lattice vectors.
    /// * `pbc` - Periodic boundary flags for each lattice direction.
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>, pbc: [bool; 3]) -> Self {
        Self {
            lattice: Matrix3::from_rows(&[a.transpose(), b.transpose(), c.transpose()]),
            pbc,
        }
    }

    /// Creates a fully periodic orthorhombic cell with the given edge lengths.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self {
            lattice: Matrix3::from_diagonal(&Vector3::new(a, b, c)),
            pbc: [true; 3],
        }
    }

    /// Returns the lattice vector along `axis` (0 = `a`, 1 = `b`, 2 = `c`).
    ///
    /// # Panics
    ///
    /// Panics if `axis` is greater than 2.
    pub fn vector(&self, axis: usize) -> Vector3<f64> {
        self.lattice.row(axis).transpose()
    }

    /// Returns the cell of a supercell built from `reps` copies along each axis.
    pub fn scaled(&self, reps: [usize; 3]) -> Self {
        let mut lattice = self.lattice;
        for (axis, &rep) in reps.iter().enumerate() {
            let mut row = lattice.row_mut(axis);
            row *= rep as f64;
        }
        Self {
            lattice,
            pbc: self.pbc,
        }
    }

    /// Returns the Cartesian translation of the image with integer offsets `offset`.
    pub fn translation(&self, offset: [usize; 3]) -> Vector3<f64> {
        (0..3).fold(Vector3::zeros(), |acc, axis| {
            acc + self.vector(axis) * offset[axis] as f64
        })
    }
}
