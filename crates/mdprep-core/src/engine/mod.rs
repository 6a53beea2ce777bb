//! # Engine Module
//!
//! This module implements the annotation operations that turn a plain atomic structure
//! into molecular-dynamics input: initial velocities, basis indices, and basis-aware
//! supercell replication.
//!
//! ## Architecture
//!
//! - **Velocity Assignment** ([`velocities`]) - Per-atom initial velocity vectors
//! - **Basis Assignment** ([`basis`]) - Unit-cell site indices and the unit-cell list
//! - **Replication** ([`replication`]) - Supercell construction that re-derives basis indices
//! - **Configuration** ([`config`]) - The parameter set for a complete preprocessing run
//! - **Progress Monitoring** ([`progress`]) - Phase reporting for front ends
//! - **Error Handling** ([`error`]) - The error taxonomy shared by all operations
//!
//! Every operation validates its complete input before writing anything, so a failed call
//! leaves the structure untouched.

pub mod basis;
pub mod config;
pub mod error;
pub mod progress;
pub mod replication;
pub mod velocities;
