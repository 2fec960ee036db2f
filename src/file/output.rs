//! Output sink for flattened lines.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

/// Where flattened lines are written: stdout or a created file.
///
/// Both variants are buffered. Call [`OutputSink::finish`] to flush and
/// surface write errors; a file is closed when the sink is dropped,
/// whether or not flattening succeeded.
pub enum OutputSink {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
}

impl OutputSink {
    pub fn stdout() -> Self {
        OutputSink::Stdout(BufWriter::new(io::stdout()))
    }

    /// Creates (or truncates) `path` for writing.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(OutputSink::File(BufWriter::new(file)))
    }

    /// Opens a file sink when `path` is given, stdout otherwise.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::create(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Flushes any buffered lines.
    pub fn finish(mut self) -> Result<()> {
        self.flush().context("Failed to write output")
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(out) => out.write(buf),
            OutputSink::File(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(out) => out.flush(),
            OutputSink::File(out) => out.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_writes_on_finish() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = OutputSink::create(&path).unwrap();
        writeln!(sink, "a: 1").unwrap();
        sink.finish().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: 1\n");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(OutputSink::create(path).is_err());
    }
}
