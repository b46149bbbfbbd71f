//! # Core Module
//!
//! The fundamental building blocks of Proseq: the residue data model, the residue code
//! table, and file I/O.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Residue records, per-chain sequences and the `Document`
//!   that maps chain identifiers to them
//! - **Residue Knowledge** ([`topology`]) - The three-letter to one-letter code table
//! - **File I/O** ([`io`]) - The PDB residue extractor and the sequence writer

pub mod io;
pub mod models;
pub mod topology;
