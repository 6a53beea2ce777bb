//! # Core Models Module
//!
//! Data structures used to represent an atomic structure together with the per-atom
//! annotations consumed by a molecular-dynamics engine.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom (species and position) and its metadata record
//! - [`cell`] - Simulation cell vectors and periodic boundary flags
//! - [`structure`] - The ordered atom collection, with unit-cell bookkeeping and replication
//!
//! ## Usage
//!
//! ```ignore
//! use mdprep::core::models::{cell::Cell, structure::Structure};
//! use nalgebra::Point3;
//!
//! let mut structure = Structure::new(Cell::orthorhombic(5.43, 5.43, 5.43));
//! let si = structure.add_atom("Si", Point3::new(0.0, 0.0, 0.0));
//! assert!(structure.info(si).unwrap().is_empty());
//! ```

pub mod atom;
pub mod cell;
pub mod structure;
