//! # Engine Module
//!
//! Turns an extracted [`Document`](crate::core::models::document::Document) into output
//! text.
//!
//! - **Configuration** ([`config`]) - Code format and layout selectors plus the
//!   extraction settings consumed by workflows
//! - **Formatting** ([`format`]) - Chain merging, code-table translation and layout
//! - **Progress** ([`progress`]) - Optional callbacks for phase reporting
//! - **Errors** ([`error`]) - The fatal error type surfaced by workflows

pub mod config;
pub mod error;
pub mod format;
pub mod progress;
