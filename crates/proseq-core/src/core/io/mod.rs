//! Provides input/output functionality for structure and sequence files.
//!
//! The reader side extracts residue records from PDB text through the [`traits::StructureFile`]
//! interface; the writer side persists formatted sequence text.

pub mod pdb;
pub mod sequence;
pub mod traits;
