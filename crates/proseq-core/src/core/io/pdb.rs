//! Residue extraction from PDB atom records.
//!
//! Only lines starting with the `ATOM` record marker are considered. Each one contributes
//! its residue name, chain identifier and residue sequence number, read from the fixed
//! columns of the PDB format:
//!
//! | Field                   | Columns (1-based) |
//! |-------------------------|-------------------|
//! | Residue name            | 18-20             |
//! | Chain identifier        | 22                |
//! | Residue sequence number | 23-26             |
//!
//! Malformed atom lines are skipped with a warning; the rest of the file is still read.

use super::traits::StructureFile;
use crate::core::models::builder::DocumentBuilder;
use crate::core::models::document::Document;
use std::fmt;
use std::io::{self, BufRead};
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const RECORD_MARKER: &str = "ATOM";

const RESIDUE_NAME_COLUMNS: Range<usize> = 17..20;
const CHAIN_ID_COLUMNS: Range<usize> = 21..22;
const SEQUENCE_NUMBER_COLUMNS: Range<usize> = 22..26;

const RESIDUE_NAME_LABEL: &str = "18-20";
const CHAIN_ID_LABEL: &str = "22";
const SEQUENCE_NUMBER_LABEL: &str = "23-26";

/// Chain identifier used when the chain column is blank.
pub const DEFAULT_CHAIN_ID: char = 'A';

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("Cannot open source file '{path}': {source}", path = path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordParseErrorKind {
    #[error("Line is too short for an ATOM record (must reach column {required})")]
    LineTooShort { required: usize },
    #[error("Columns {columns} do not fall on character boundaries")]
    InvalidField { columns: &'static str },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: &'static str },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt {
        columns: &'static str,
        value: String,
    },
}

/// An atom line that could not be read and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordParseError {
    pub line: usize,     // 1-based line number in the source
    pub content: String, // Offending line, trimmed
    pub kind: RecordParseErrorKind,
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skipping invalid ATOM record on line {}: '{}' ({})",
            self.line, self.content, self.kind
        )
    }
}

impl std::error::Error for RecordParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Summary of a PDB read, returned alongside the [`Document`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub atom_lines: usize,
    pub accepted_residues: usize,
    pub skipped: Vec<RecordParseError>,
}

/// The residue fields of one atom record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomResidue<'a> {
    pub chain_id: char,
    pub sequence_number: isize,
    pub residue_name: &'a str,
}

/// Reads the residue fields of a single PDB line.
///
/// Returns `Ok(None)` if the line is not an atom record, and an error if it is one but
/// its residue fields cannot be read. A blank chain column yields [`DEFAULT_CHAIN_ID`].
pub fn parse_atom_line(line: &str) -> Result<Option<AtomResidue<'_>>, RecordParseErrorKind> {
    let line = line.trim_end_matches(['\r', '\n']);
    if !line.starts_with(RECORD_MARKER) {
        return Ok(None);
    }
    if line.len() < CHAIN_ID_COLUMNS.end {
        return Err(RecordParseErrorKind::LineTooShort {
            required: CHAIN_ID_COLUMNS.end,
        });
    }

    let residue_name = field(line, RESIDUE_NAME_COLUMNS, RESIDUE_NAME_LABEL)?;
    if residue_name.is_empty() {
        return Err(RecordParseErrorKind::MissingRequiredField {
            columns: RESIDUE_NAME_LABEL,
        });
    }

    let chain_id = field(line, CHAIN_ID_COLUMNS, CHAIN_ID_LABEL)?
        .chars()
        .next()
        .unwrap_or(DEFAULT_CHAIN_ID);

    // The sequence number may be cut short by the end of the line.
    let seq_end = SEQUENCE_NUMBER_COLUMNS.end.min(line.len());
    let seq_str = field(
        line,
        SEQUENCE_NUMBER_COLUMNS.start..seq_end,
        SEQUENCE_NUMBER_LABEL,
    )?;
    let sequence_number: isize = seq_str.parse().map_err(|_| RecordParseErrorKind::InvalidInt {
        columns: SEQUENCE_NUMBER_LABEL,
        value: seq_str.into(),
    })?;

    Ok(Some(AtomResidue {
        chain_id,
        sequence_number,
        residue_name,
    }))
}

fn field<'a>(
    line: &'a str,
    columns: Range<usize>,
    label: &'static str,
) -> Result<&'a str, RecordParseErrorKind> {
    line.get(columns)
        .map(str::trim)
        .ok_or(RecordParseErrorKind::InvalidField { columns: label })
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = ExtractionReport;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Document, Self::Metadata), Self::Error> {
        let mut builder = DocumentBuilder::new();
        let mut report = ExtractionReport::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match parse_atom_line(&line) {
                Ok(None) => {}
                Ok(Some(atom)) => {
                    report.atom_lines += 1;
                    if builder.add_residue(atom.chain_id, atom.sequence_number, atom.residue_name)
                    {
                        report.accepted_residues += 1;
                    }
                }
                Err(kind) => {
                    report.atom_lines += 1;
                    let skipped = RecordParseError {
                        line: line_num,
                        content: line.trim().to_string(),
                        kind,
                    };
                    warn!("{}", skipped);
                    report.skipped.push(skipped);
                }
            }
        }

        let document = builder.build();
        debug!(
            "Read {} atom line(s): {} residue(s) in {} chain(s), {} line(s) skipped.",
            report.atom_lines,
            report.accepted_residues,
            document.chain_count(),
            report.skipped.len()
        );
        Ok((document, report))
    }

    fn open_error(path: &Path, source: io::Error) -> Self::Error {
        PdbError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::NamedTempFile;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let warnings = output
            .lines()
            .filter(|l| l.contains("WARN"))
            .map(str::to_string)
            .collect();
        (result, warnings)
    }

    fn atom_line(serial: usize, atom: &str, res_name: &str, chain: char, res_seq: &str) -> String {
        format!(
            "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00           C",
            serial, atom, res_name, chain, res_seq, 1.0, 2.0, 3.0
        )
    }

    fn read_str(content: &str) -> (Document, ExtractionReport) {
        PdbFile::read_from(&mut Cursor::new(content)).unwrap()
    }

    #[test]
    fn parse_atom_line_reads_fixed_columns() {
        let line = atom_line(1, "CA", "ALA", 'B', "42");
        let atom = parse_atom_line(&line).unwrap().unwrap();
        assert_eq!(
            atom,
            AtomResidue {
                chain_id: 'B',
                sequence_number: 42,
                residue_name: "ALA",
            }
        );
    }

    #[test]
    fn parse_atom_line_ignores_non_atom_records() {
        assert_eq!(parse_atom_line("HEADER    HYDROLASE"), Ok(None));
        assert_eq!(parse_atom_line(""), Ok(None));
        let hetatm = atom_line(1, "O", "HOH", 'A', "1").replacen("ATOM  ", "HETATM", 1);
        assert_eq!(parse_atom_line(&hetatm), Ok(None));
    }

    #[test]
    fn parse_atom_line_substitutes_default_chain_for_blank_column() {
        let line = atom_line(1, "N", "GLY", ' ', "7");
        let atom = parse_atom_line(&line).unwrap().unwrap();
        assert_eq!(atom.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(atom.sequence_number, 7);
    }

    #[test]
    fn parse_atom_line_accepts_signed_sequence_numbers() {
        let line = atom_line(1, "N", "MET", 'A', "-3");
        assert_eq!(parse_atom_line(&line).unwrap().unwrap().sequence_number, -3);
    }

    #[test]
    fn parse_atom_line_rejects_non_numeric_sequence_number() {
        let line = atom_line(1, "CA", "SER", 'A', "1x");
        assert_eq!(
            parse_atom_line(&line),
            Err(RecordParseErrorKind::InvalidInt {
                columns: "23-26",
                value: "1x".into(),
            })
        );
    }

    #[test]
    fn parse_atom_line_rejects_line_ending_before_chain_column() {
        assert_eq!(
            parse_atom_line("ATOM      1  CA  ALA"),
            Err(RecordParseErrorKind::LineTooShort { required: 22 })
        );
    }

    #[test]
    fn parse_atom_line_reads_truncated_sequence_number_field() {
        let atom = parse_atom_line("ATOM      1  CA  ALA A 5").unwrap().unwrap();
        assert_eq!(atom.sequence_number, 5);
        assert_eq!(atom.chain_id, 'A');
    }

    #[test]
    fn parse_atom_line_rejects_missing_sequence_number() {
        assert!(matches!(
            parse_atom_line("ATOM      1  CA  ALA A"),
            Err(RecordParseErrorKind::InvalidInt { .. })
        ));
    }

    #[test]
    fn parse_atom_line_rejects_blank_residue_name() {
        let line = atom_line(1, "CA", "", 'A', "1");
        assert_eq!(
            parse_atom_line(&line),
            Err(RecordParseErrorKind::MissingRequiredField { columns: "18-20" })
        );
    }

    #[test]
    fn parse_atom_line_rejects_columns_splitting_a_character() {
        let line = "ATOM      1  CA  AL\u{e9} A   1";
        assert_eq!(
            parse_atom_line(line),
            Err(RecordParseErrorKind::InvalidField { columns: "18-20" })
        );
    }

    #[test]
    fn parse_atom_line_tolerates_carriage_return() {
        let line = format!("{}\r", atom_line(1, "CA", "LYS", 'C', "12"));
        let atom = parse_atom_line(&line).unwrap().unwrap();
        assert_eq!(atom.residue_name, "LYS");
        assert_eq!(atom.chain_id, 'C');
    }

    #[test]
    fn read_from_builds_document_per_chain() {
        let content = [
            "HEADER    TEST".to_string(),
            atom_line(1, "N", "ALA", 'A', "5"),
            atom_line(2, "CA", "GLY", 'A', "6"),
            atom_line(3, "CA", "SER", 'B', "1"),
            "END".to_string(),
        ]
        .join("\n");

        let (document, report) = read_str(&content);

        let ids: Vec<char> = document.chain_ids().collect();
        assert_eq!(ids, vec!['A', 'B']);
        let chain_a: Vec<(isize, &str)> = document
            .chain('A')
            .unwrap()
            .records()
            .iter()
            .map(|r| (r.sequence_number, r.name.as_str()))
            .collect();
        assert_eq!(chain_a, vec![(5, "ALA"), (6, "GLY")]);
        assert_eq!(document.chain('B').unwrap().records()[0].name, "SER");
        assert_eq!(report.atom_lines, 3);
        assert_eq!(report.accepted_residues, 3);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn read_from_collapses_atoms_of_the_same_residue() {
        let content = [
            atom_line(1, "N", "ALA", 'A', "1"),
            atom_line(2, "CA", "ALA", 'A', "1"),
            atom_line(3, "C", "ALA", 'A', "1"),
            atom_line(4, "N", "GLY", 'A', "2"),
        ]
        .join("\n");

        let (document, report) = read_str(&content);

        assert_eq!(document.residue_count(), 2);
        assert_eq!(report.atom_lines, 4);
        assert_eq!(report.accepted_residues, 2);
    }

    #[test]
    fn read_from_keeps_first_residue_name_for_repeated_sequence_number() {
        let content = [
            atom_line(1, "CA", "ALA", 'A', "1"),
            atom_line(2, "CA", "GLY", 'A', "1"),
        ]
        .join("\n");

        let (document, _) = read_str(&content);

        let names: Vec<&str> = document.residue_names().collect();
        assert_eq!(names, vec!["ALA"]);
    }

    #[test]
    fn read_from_sorts_residues_by_sequence_number() {
        let content = [
            atom_line(1, "CA", "LYS", 'A', "10"),
            atom_line(2, "CA", "MET", 'A', "-1"),
            atom_line(3, "CA", "VAL", 'A', "3"),
        ]
        .join("\n");

        let (document, _) = read_str(&content);

        let numbers: Vec<isize> = document
            .chain('A')
            .unwrap()
            .records()
            .iter()
            .map(|r| r.sequence_number)
            .collect();
        assert_eq!(numbers, vec![-1, 3, 10]);
    }

    #[test]
    fn read_from_skips_malformed_lines_and_continues() {
        let content = [
            atom_line(1, "CA", "ALA", 'A', "1"),
            atom_line(2, "CA", "GLY", 'A', "xx"),
            atom_line(3, "CA", "SER", 'A', "3"),
        ]
        .join("\n");

        let (document, report) = read_str(&content);

        let names: Vec<&str> = document.residue_names().collect();
        assert_eq!(names, vec!["ALA", "SER"]);
        assert_eq!(report.skipped.len(), 1);
        let skipped = &report.skipped[0];
        assert_eq!(skipped.line, 2);
        assert!(skipped.content.contains("GLY"));
        assert!(matches!(skipped.kind, RecordParseErrorKind::InvalidInt { .. }));
        assert!(skipped.to_string().contains("line 2"));
    }

    #[test]
    fn read_from_warns_once_per_skipped_line() {
        let content = [
            atom_line(1, "CA", "ALA", 'A', "1"),
            atom_line(2, "CA", "ALA", 'A', "1"),
            atom_line(3, "CA", "GLY", 'A', "x2"),
            atom_line(4, "CA", "SER", 'A', "3"),
        ]
        .join("\n");

        let ((document, _), warnings) = capture_warnings(|| read_str(&content));

        assert_eq!(document.residue_count(), 2);
        assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
        assert!(warnings[0].contains("line 3"));
        assert!(warnings[0].contains("x2"));
    }

    #[test]
    fn read_from_normalizes_blank_chain_to_default() {
        let content = [
            atom_line(1, "CA", "ALA", ' ', "1"),
            atom_line(2, "CA", "GLY", 'A', "2"),
        ]
        .join("\n");

        let (document, _) = read_str(&content);

        assert_eq!(document.chain_count(), 1);
        assert_eq!(document.chain(DEFAULT_CHAIN_ID).unwrap().len(), 2);
    }

    #[test]
    fn read_from_returns_empty_document_without_atom_records() {
        let (document, report) = read_str("HEADER    EMPTY\nREMARK   1\nEND\n");
        assert!(document.is_empty());
        assert_eq!(report, ExtractionReport::default());
    }

    #[test]
    fn read_from_fails_on_invalid_utf8() {
        let bytes: &[u8] = b"ATOM      1  CA  AL\xff A   1\n";
        let result = PdbFile::read_from(&mut Cursor::new(bytes));
        assert!(matches!(result, Err(PdbError::Io(_))));
    }

    #[test]
    fn read_from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", atom_line(1, "CA", "TRP", 'A', "1")).unwrap();
        writeln!(file, "{}", atom_line(2, "CA", "TYR", 'A', "2")).unwrap();

        let (document, _) = PdbFile::read_from_path(file.path()).unwrap();

        let names: Vec<&str> = document.residue_names().collect();
        assert_eq!(names, vec!["TRP", "TYR"]);
    }

    #[test]
    fn read_from_path_reports_missing_file_as_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdb");

        let err = PdbFile::read_from_path(&missing).unwrap_err();

        match err {
            PdbError::FileAccess { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
