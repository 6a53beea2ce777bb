//! Provides input/output functionality for annotated structure files.
//!
//! Structures are exchanged through a trait-based interface so that the annotation
//! pipeline does not depend on a particular file format. The TOML format stores the cell,
//! every atom, and all simulation annotations (velocities, basis indices, unit cell).

pub mod toml_file;
pub mod traits;
