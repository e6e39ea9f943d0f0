//! Output file that removes itself unless committed.
//!
//! Encoders write into an [`OutputFile`] like any `Write + Seek` sink. If the
//! guard is dropped before [`OutputFile::commit`] succeeds (an encoder error,
//! an early return, a panic) the partially written file is deleted, so a
//! failed export never leaves a file behind.

use crate::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub struct OutputFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    committed: bool,
}

impl OutputFile {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        log::debug!("opened output {}", path.display());

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            committed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and sync the file, then keep it.
    pub fn commit(mut self) -> Result<()> {
        let writer = self.writer.take().ok_or_else(closed)?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        self.committed = true;
        Ok(())
    }

    fn writer_mut(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer.as_mut().ok_or_else(closed)
    }
}

fn closed() -> io::Error {
    io::Error::other("output file already closed")
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer_mut()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer_mut()?.flush()
    }
}

impl Seek for OutputFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.writer_mut()?.seek(pos)
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        // Close the handle first; some platforms refuse to unlink open files.
        drop(self.writer.take());

        match fs::remove_file(&self.path) {
            Ok(()) => log::warn!("removed incomplete output {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => log::warn!(
                "failed to remove incomplete output {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
