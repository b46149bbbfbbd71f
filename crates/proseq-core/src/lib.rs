//! # Proseq Core Library
//!
//! Extracts protein residue sequences from structure files in the Protein Data Bank (PDB)
//! text format and renders them as one-letter or three-letter amino-acid codes.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout that keeps parsing, formatting and orchestration
//! apart:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Document`, `ChainSequence`), the
//!   residue code table, and the file I/O for reading structures and writing sequences.
//!
//! - **[`engine`]: The Logic Core.** Formatting options and the formatter that turns a
//!   `Document` into the final text, plus progress reporting and the engine error type.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into the
//!   extract-format-write pipeline used by the command-line tool.

pub mod core;
pub mod engine;
pub mod workflows;
