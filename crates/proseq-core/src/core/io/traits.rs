use crate::core::models::document::Document;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for extracting residue sequences from a structure file format.
///
/// Implementors handle format-specific parsing; opening files and buffering is shared.
pub trait StructureFile {
    /// Format-specific information gathered while reading, such as skipped records.
    type Metadata;

    /// The error type for fatal read failures.
    type Error: Error + From<io::Error>;

    /// Reads a document from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the extracted document and associated metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails. Malformed records are not fatal and
    /// are reported through the metadata instead.
    fn read_from(reader: &mut impl BufRead) -> Result<(Document, Self::Metadata), Self::Error>;

    /// Converts a failure to open `path` into the format's error type.
    fn open_error(_path: &Path, source: io::Error) -> Self::Error {
        source.into()
    }

    /// Reads a document from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or reading fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<(Document, Self::Metadata), Self::Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Self::open_error(path, e))?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
