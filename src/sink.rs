//! Output sinks for finished FCS files.
//!
//! Two kinds of destination are supported:
//!
//! - [`Download`]: hands the whole file to a fire-and-forget consumer
//! - [`Directory`]: creates a [`WritableStream`] and receives the file as a series
//!   of positioned chunk writes followed by a close
//!
//! [`FsDirectory`] implements [`Directory`] on top of the local filesystem, and
//! [`FsDownload`] drops downloads into a local folder.
//!
//! ```rust,no_run
//! use fcs_writer::{write_chunked, Directory, FsDirectory};
//!
//! let dir = FsDirectory::new("/tmp/fcs");
//! let mut stream = dir.create_writable("sample.fcs").unwrap();
//! write_chunked(stream.as_mut(), b"FCS3.1", 10 * 1024 * 1024).unwrap();
//! ```

use crate::Result;
use log::{debug, trace, warn};
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Fire-and-forget consumer of a finished file.
///
/// Implementations report their own failures; nothing is returned to the caller.
pub trait Download {
    fn download(&self, file_name: &str, bytes: &[u8]);
}

/// A stream accepting writes at explicit byte positions.
pub trait WritableStream {
    /// Writes `chunk` starting at byte `position` of the file.
    fn write_at(&mut self, position: u64, chunk: &[u8]) -> Result<()>;

    /// Flushes and closes the stream.
    fn close(&mut self) -> Result<()>;
}

/// A directory that can create files for writing.
pub trait Directory {
    /// Creates (or truncates) `file_name` and opens it for writing.
    fn create_writable(&self, file_name: &str) -> Result<Box<dyn WritableStream>>;
}

/// Where [`crate::FcsWriter::write_fcs`] sends its output.
#[derive(Clone, Copy)]
pub enum Destination<'a> {
    Download(&'a dyn Download),
    Directory(&'a dyn Directory),
}

/// Writes `bytes` to `stream` in sequential chunks of `chunk_size`, then closes it.
///
/// Chunk `i` is written at position `i * chunk_size`. On a failed write the error is
/// returned immediately and the stream is left open.
///
/// # Errors
///
/// Returns the first error reported by the stream.
pub fn write_chunked(
    stream: &mut dyn WritableStream,
    bytes: &[u8],
    chunk_size: usize,
) -> Result<()> {
    let chunk_size = chunk_size.max(1);
    for (i, chunk) in bytes.chunks(chunk_size).enumerate() {
        let position = (i * chunk_size) as u64;
        trace!("Writing {} bytes at position {}", chunk.len(), position);
        stream.write_at(position, chunk)?;
    }
    stream.close()?;
    debug!(
        "Wrote {} bytes in {} chunks",
        bytes.len(),
        bytes.chunks(chunk_size).len()
    );
    Ok(())
}

/// A [`Download`] that saves each file into a local folder.
///
/// Failures are logged with `warn!` and otherwise dropped.
#[derive(Clone, Debug)]
pub struct FsDownload {
    folder: PathBuf,
}

impl FsDownload {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        FsDownload {
            folder: folder.into(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl Download for FsDownload {
    fn download(&self, file_name: &str, bytes: &[u8]) {
        let path = self.folder.join(file_name);
        match std::fs::write(&path, bytes) {
            Ok(()) => debug!("Saved {} ({} bytes)", path.display(), bytes.len()),
            Err(err) => warn!("Download of {} failed: {}", path.display(), err),
        }
    }
}

/// A [`Directory`] on the local filesystem.
#[derive(Clone, Debug)]
pub struct FsDirectory {
    root: PathBuf,
}

impl FsDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsDirectory { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Directory for FsDirectory {
    fn create_writable(&self, file_name: &str) -> Result<Box<dyn WritableStream>> {
        let path = self.root.join(file_name);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        debug!("Opened {} for writing", path.display());
        Ok(Box::new(FsWritable { file }))
    }
}

struct FsWritable {
    file: File,
}

impl WritableStream for FsWritable {
    fn write_at(&mut self, position: u64, chunk: &[u8]) -> Result<()> {
        self.file.seek(SeekFrom::Start(position))?;
        self.file.write_all(chunk)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(())
    }
}
