use super::config::{CodeFormat, FormatConfig};
use crate::core::models::document::Document;
use crate::core::topology::residues::{UNKNOWN_RESIDUE_CODE, one_letter_code};
use std::collections::BTreeSet;
use tracing::warn;

/// Output of [`format_document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedSequence {
    pub text: String,
    pub residue_count: usize,
    /// Residue names rendered as the unknown symbol, sorted.
    pub unknown_residues: BTreeSet<String>,
}

/// Renders every chain of `document` as one sequence.
///
/// Chains are concatenated in identifier order, each already sorted by residue sequence
/// number. In one-letter mode, names missing from the code table become
/// [`UNKNOWN_RESIDUE_CODE`] and are reported in a single warning.
pub fn format_document(document: &Document, config: &FormatConfig) -> FormattedSequence {
    let names: Vec<&str> = document.residue_names().collect();
    if names.is_empty() {
        return FormattedSequence::default();
    }

    let mut unknown_residues = BTreeSet::new();
    let tokens: Vec<String> = match config.code_format {
        CodeFormat::OneLetter => names
            .iter()
            .map(|&name| {
                let code = one_letter_code(name).unwrap_or_else(|| {
                    unknown_residues.insert(name.to_string());
                    UNKNOWN_RESIDUE_CODE
                });
                code.to_string()
            })
            .collect(),
        CodeFormat::ThreeLetter => names.iter().map(|&name| name.to_string()).collect(),
    };

    if !unknown_residues.is_empty() {
        let listed: Vec<&str> = unknown_residues.iter().map(String::as_str).collect();
        warn!(
            "Unknown or non-standard residue(s) represented as '{}': {}",
            UNKNOWN_RESIDUE_CODE,
            listed.join(", ")
        );
    }

    FormattedSequence {
        text: tokens.join(config.separator()),
        residue_count: names.len(),
        unknown_residues,
    }
}
