//! Output destinations for generated units.
//!
//! A unit is one formatted block of generated source: one per module plus the
//! shared types. Stream sinks concatenate every unit into a single writer;
//! directory sinks write each unit to its own `<stem>.rs` file.

use crate::error::CodegenError;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

/// Output filename selecting standard output.
pub const STDOUT_SENTINEL: &str = "-";

/// Extension of files written by [`DirectorySink`].
pub const OUTPUT_EXTENSION: &str = "rs";

/// Receiver of formatted output units.
pub trait OutputSink {
    /// Returns true if all units end up in one stream.
    fn is_stream(&self) -> bool;

    /// Writes one unit.
    ///
    /// # Errors
    /// Returns `CodegenError::Destination` if the unit cannot be written.
    fn write_unit(&mut self, stem: &str, contents: &str) -> Result<(), CodegenError>;

    /// Flushes buffered output.
    ///
    /// # Errors
    /// Returns `CodegenError::Destination` if flushing fails.
    fn finish(&mut self) -> Result<(), CodegenError>;
}

/// Sink concatenating every unit into one writer, separated by blank lines.
pub struct StreamSink<W: Write> {
    writer: W,
    label: PathBuf,
    units: usize,
}

impl<W: Write> StreamSink<W> {
    /// Creates a stream sink; `label` names the stream in errors and logs.
    pub fn new(writer: W, label: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            label: label.into(),
            units: 0,
        }
    }

    /// Returns the number of units written.
    #[must_use]
    pub fn units(&self) -> usize {
        self.units
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), CodegenError> {
        self.writer
            .write_all(bytes)
            .map_err(|e| CodegenError::destination(&self.label, e))
    }
}

impl StreamSink<Stdout> {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "<stdout>")
    }
}

impl StreamSink<BufWriter<File>> {
    /// Creates (or truncates) `path` and returns a sink writing to it.
    ///
    /// # Errors
    /// Returns `CodegenError::Destination` if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, CodegenError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| CodegenError::destination(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> OutputSink for StreamSink<W> {
    fn is_stream(&self) -> bool {
        true
    }

    fn write_unit(&mut self, stem: &str, contents: &str) -> Result<(), CodegenError> {
        if self.units > 0 {
            self.write_all(b"\n")?;
        }
        self.write_all(contents.as_bytes())?;
        self.units += 1;
        tracing::debug!("Wrote {} to {}", stem, self.label.display());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CodegenError> {
        self.writer
            .flush()
            .map_err(|e| CodegenError::destination(&self.label, e))
    }
}

/// Sink writing each unit to `<dir>/<stem>.rs`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates the directory if needed and returns a sink writing into it.
    ///
    /// # Errors
    /// Returns `CodegenError::Destination` if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, CodegenError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| CodegenError::destination(&dir, e))?;
        Ok(Self { dir })
    }

    /// Returns the output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file a unit is written to.
    #[must_use]
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{OUTPUT_EXTENSION}"))
    }
}

impl OutputSink for DirectorySink {
    fn is_stream(&self) -> bool {
        false
    }

    fn write_unit(&mut self, stem: &str, contents: &str) -> Result<(), CodegenError> {
        let path = self.path_for(stem);
        tracing::info!("Outputting to {}", path.display());
        fs::write(&path, contents).map_err(|e| CodegenError::destination(&path, e))
    }

    fn finish(&mut self) -> Result<(), CodegenError> {
        Ok(())
    }
}

/// Where generated output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Every unit concatenated to standard output.
    Stdout,
    /// Every unit concatenated into one file.
    File(PathBuf),
    /// One file per unit in a directory.
    Directory(PathBuf),
}

impl Destination {
    /// Selects a destination from an output directory and optional filename.
    ///
    /// The filename [`STDOUT_SENTINEL`] selects standard output; any other
    /// filename is used as given.
    #[must_use]
    pub fn from_args(dir: impl Into<PathBuf>, output: Option<&str>) -> Self {
        match output {
            Some(STDOUT_SENTINEL) => Self::Stdout,
            Some(name) if !name.is_empty() => Self::File(PathBuf::from(name)),
            _ => Self::Directory(dir.into()),
        }
    }

    /// Returns true if all units end up in one stream.
    #[must_use]
    pub fn is_stream(&self) -> bool {
        !matches!(self, Self::Directory(_))
    }

    /// Opens the destination.
    ///
    /// # Errors
    /// Returns `CodegenError::Destination` if the file or directory cannot be
    /// created.
    pub fn open(&self) -> Result<Box<dyn OutputSink>, CodegenError> {
        match self {
            Self::Stdout => Ok(Box::new(StreamSink::stdout())),
            Self::File(path) => {
                let sink = StreamSink::create(path)?;
                tracing::info!("Outputting to {}", path.display());
                Ok(Box::new(sink))
            }
            Self::Directory(dir) => Ok(Box::new(DirectorySink::create(dir)?)),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "<stdout>"),
            Self::File(path) | Self::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}
