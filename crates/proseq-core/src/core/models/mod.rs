pub mod builder;
pub mod chain;
pub mod document;
pub mod residue;
