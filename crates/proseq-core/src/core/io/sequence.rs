use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Cannot write to target file '{path}': {source}", path = path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Writes `content` followed by exactly one newline.
pub fn write_sequence_to(writer: &mut impl Write, content: &str) -> io::Result<()> {
    writeln!(writer, "{}", content)
}

/// Creates or truncates the file at `path` and writes `content` followed by one newline.
///
/// # Errors
///
/// Returns [`WriteError`] if the file cannot be created or written. Bytes flushed before
/// the failure are left in place.
pub fn write_sequence_to_path<P: AsRef<Path>>(path: P, content: &str) -> Result<(), WriteError> {
    let path = path.as_ref();
    let wrap = |source: io::Error| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    write_sequence_to(&mut writer, content).map_err(wrap)?;
    writer.flush().map_err(wrap)
}
