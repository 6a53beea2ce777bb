//! # Workflows Module
//!
//! High-level entry points that chain the engine operations into complete preprocessing
//! runs.
//!
//! - **Preparation Workflow** ([`prepare`]) - Basis assignment, velocity assignment and
//!   basis-aware replication driven by a single `PrepConfig`.

pub mod prepare;
