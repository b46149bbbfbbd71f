//! # Workflows Module
//!
//! High-level entry points that run a complete procedure from input file to output file.
//!
//! - **Extraction Workflow** ([`extract`]) - Reads residue records from a PDB file, formats
//!   them as a sequence and writes the result to the target path.

pub mod extract;
