use std::{fs::File, io::{Write, BufWriter}, path::Path};

use located_error::prelude::*;
use log::debug;

mod error;
pub use error::WriterError;

/// Line-oriented report writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct ReportWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> ReportWriter<'a> {
    /// Instantiate a new `ReportWriter`, linked to a file, or to stdout if `path` is `None`.
    /// 
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<ReportWriter<'a>> {
        use WriterError::IOError;
        Ok(ReportWriter{ source: match path {
            Some(path) => {
                debug!("Writing report to {}", path.as_ref().display());
                let file = File::create(path).map_err(IOError).loc("While creating file")?;
                BufWriter::new(Box::new(file))
            },
            None => {
                BufWriter::new(Box::new(std::io::stdout()))
            }
        }})
    }

    /// Wrap any writer. Mostly useful to capture a report in memory.
    pub fn from_writer(writer: impl Write + 'a) -> Self {
        Self { source: BufWriter::new(Box::new(writer)) }
    }

    /// Write the contents of a generic iterator within a file/stdout.
    /// one Iteration step = one line.
    /// 
    /// # Errors
    /// - If any of the Items within `iter` fails to get written.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        for obj in iter {
            writeln!(self.source, "{obj}")
                .map_err(WriterError::IOError)
                .loc("While writing contents into file")?;
        }
        self.source.flush().map_err(WriterError::IOError).loc("While flushing buffer contents of Writer")
    }
}
