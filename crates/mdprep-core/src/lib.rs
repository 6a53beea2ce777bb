//! # mdprep Core Library
//!
//! Preprocessing of atomic structures for molecular-dynamics input: per-atom initial
//! velocities, per-atom basis indices that track the unit-cell site of every atom, and a
//! basis-aware supercell replication.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the data model, the annotation
//! logic and the user-facing procedures stay separate and individually testable.
//!
//! - **[`core`]: The Foundation.** Contains the structure container (`Structure`), its
//!   per-atom metadata record (`AtomInfo`), the simulation cell, the generic replication
//!   primitive, and structure file I/O.
//!
//! - **[`engine`]: The Annotation Logic.** Implements the three annotation operations
//!   (`set_velocities`, `add_basis`, `repeat`) with eager validation, the error taxonomy,
//!   the preprocessing configuration, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Chains the engine operations into a complete
//!   preprocessing run driven by a single `PrepConfig`.

pub mod core;
pub mod engine;
pub mod workflows;
