//! # Core Module
//!
//! This module provides the fundamental data structures of mdprep: the atomic structure
//! container that every annotation operation reads from and writes to, and the file
//! formats used to load and store it.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Atoms, per-atom metadata, the simulation
//!   cell, and the structure container with its generic replication primitive
//! - **File I/O** ([`io`]) - Reading and writing structures with all annotations preserved

pub mod io;
pub mod models;
