use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{error::LoggerError, level::Attributes};

/// Kind of the active sink. Only console sinks receive color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

/// How a log file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    #[default]
    Append,
    Truncate,
}

impl FileMode {
    pub fn from_attributes(attributes: Attributes) -> Self {
        if attributes.contains(Attributes::OVERWRITE_FILE_ON_OPEN) {
            FileMode::Truncate
        } else {
            FileMode::Append
        }
    }
}

/// A console-like output stream.
#[derive(Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
    /// Any other writer treated as a console, e.g. an in-memory buffer.
    Writer(Box<dyn Write + Send>),
}

impl Stream {
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Stream::Writer(Box::new(writer))
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stream::Stdout => f.write_str("Stdout"),
            Stream::Stderr => f.write_str("Stderr"),
            Stream::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// A log file, created if missing.
pub struct LogFile {
    file: BufWriter<File>,
}

impl LogFile {
    pub fn open<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<Self, io::Error> {
        let file = File::options()
            .create(true)
            .write(true)
            .append(mode == FileMode::Append)
            .truncate(mode == FileMode::Truncate)
            .open(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for LogFile {
    fn drop(&mut self) {
        self.file.flush().ok();
    }
}

/// The single destination of a logger.
///
/// Dropping a sink closes it. Standard streams are only released, never closed.
pub struct Sink {
    kind: SinkKind,
    writer: Box<dyn Write + Send>,
}

impl Sink {
    /// A console sink. Lines written to it may carry color escapes.
    pub fn console(stream: Stream) -> Self {
        let writer: Box<dyn Write + Send> = match stream {
            Stream::Stdout => Box::new(io::stdout()),
            Stream::Stderr => Box::new(io::stderr()),
            Stream::Writer(writer) => writer,
        };
        Self {
            kind: SinkKind::Console,
            writer,
        }
    }

    pub fn stdout() -> Self {
        Self::console(Stream::Stdout)
    }

    /// A file sink over any writer. Lines written to it never carry color escapes.
    pub fn file<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            kind: SinkKind::File,
            writer: Box::new(writer),
        }
    }

    /// Opens (or creates) a log file.
    pub fn open_file<P: AsRef<Path>>(path: P, mode: FileMode) -> Result<Self, LoggerError> {
        let file = LogFile::open(&path, mode)
            .map_err(|err| LoggerError::failed_to_open(path.as_ref(), err))?;
        Ok(Self::file(file))
    }

    pub fn kind(&self) -> SinkKind {
        self.kind
    }

    /// Writes a fully composed line in one call and flushes it.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("kind", &self.kind).finish()
    }
}
