use crate::core::io::pdb::PdbFile;
use crate::core::io::sequence::write_sequence_to_path;
use crate::core::io::traits::StructureFile;
use crate::engine::config::ExtractionConfig;
use crate::engine::error::EngineError;
use crate::engine::format::format_document;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub chain_count: usize,
    pub residue_count: usize,
    pub skipped_lines: usize,
    pub unknown_residues: BTreeSet<String>,
    pub target_path: PathBuf,
}

/// Extracts the residue sequence of `config.source_path` and writes it to
/// `config.target_path`.
///
/// The target is only touched after the source has been read successfully.
#[instrument(skip_all, name = "extraction_workflow")]
pub fn run(
    config: &ExtractionConfig,
    reporter: &ProgressReporter,
) -> Result<ExtractionSummary, EngineError> {
    // === Phase 1: Extraction ===
    reporter.report(Progress::PhaseStart { name: "Extraction" });
    info!("Reading residue records from {:?}", &config.source_path);

    let (document, report) = PdbFile::read_from_path(&config.source_path)?;
    if document.is_empty() {
        warn!("No ATOM records or no residues found in the PDB file.");
    }
    reporter.report(Progress::Message(format!(
        "Found {} residue(s) in {} chain(s)",
        document.residue_count(),
        document.chain_count()
    )));
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Formatting ===
    reporter.report(Progress::PhaseStart { name: "Formatting" });
    debug!(
        "Formatting with code format '{}' and output style '{}'",
        config.format.code_format, config.format.output_style
    );
    let formatted = format_document(&document, &config.format);
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Writing ===
    reporter.report(Progress::PhaseStart { name: "Writing" });
    write_sequence_to_path(&config.target_path, &formatted.text)?;
    info!(
        "Wrote {} residue code(s) to {:?}",
        formatted.residue_count, &config.target_path
    );
    reporter.report(Progress::PhaseFinish);

    Ok(ExtractionSummary {
        chain_count: document.chain_count(),
        residue_count: formatted.residue_count,
        skipped_lines: report.skipped.len(),
        unknown_residues: formatted.unknown_residues,
        target_path: config.target_path.clone(),
    })
}
