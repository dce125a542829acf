//! Byte-offset access to a ddfs image.
//!
//! An [`Image`] wraps any handle implementing [`Read`], [`Write`] and [`Seek`]: usually a
//! [`File`] opened with [`Image::open`], but an in-memory [`std::io::Cursor`] works just as
//! well. Reads and writes keep independent cursors, and every operation seeks explicitly
//! before touching the handle, so a write never moves the position used by the next read
//! and vice versa. Nothing is cached, every call goes to the underlying storage.

use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use crate::structures::{boot_sector::BootSector, raw::boot_sector::RawBootSector};

/// Errors that can occur when accessing an image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The image could not be opened for reading and writing.
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Fewer than `size` bytes were available at `offset`, or the read itself failed.
    #[error("short read of {size} bytes at offset {offset}")]
    ShortRead {
        offset: u64,
        size: usize,
        #[source]
        source: io::Error,
    },
    /// The underlying write failed, e.g. the image is read only or the disk is full.
    #[error("failed to write {size} bytes at offset {offset}")]
    WriteFailure {
        offset: u64,
        size: usize,
        #[source]
        source: io::Error,
    },
}

/// A ddfs image, with independent read and write cursors over a single handle.
#[derive(Debug)]
pub struct Image<D> {
    inner: D,
    read_offset: u64,
    write_offset: u64,
}

impl Image<File> {
    /// Opens the image at `path` for reading and writing.
    ///
    /// The file is never created: a missing file is an [`ImageError::Open`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| ImageError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("opened image {}", path.display());
        Ok(Self::new(file))
    }
}

impl<D: Read + Write + Seek> Image<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            read_offset: 0,
            write_offset: 0,
        }
    }

    /// An image only exists once its handle is open, so this is always true.
    pub fn is_open(&self) -> bool {
        true
    }

    /// The offset following the last byte read.
    pub fn read_offset(&self) -> u64 {
        self.read_offset
    }

    /// The offset following the last byte written.
    pub fn write_offset(&self) -> u64 {
        self.write_offset
    }

    /// Fills `buffer` with the bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`ImageError::ShortRead`] if the image ends before the buffer is full, or if
    /// the underlying read fails. The read cursor is only moved on success.
    pub fn read_exact_at(&mut self, offset: u64, buffer: &mut [u8]) -> Result<(), ImageError> {
        let size = buffer.len();
        log::trace!("reading {size} bytes at offset {offset}");
        let short_read = |source| ImageError::ShortRead {
            offset,
            size,
            source,
        };
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(short_read)?;
        self.inner.read_exact(buffer).map_err(short_read)?;
        self.read_offset = offset + size as u64;
        Ok(())
    }

    /// Reads exactly `size` bytes starting at `offset`.
    pub fn read_at(&mut self, offset: u64, size: usize) -> Result<Vec<u8>, ImageError> {
        let mut buffer = vec![0; size];
        self.read_exact_at(offset, &mut buffer)?;
        Ok(buffer)
    }

    /// Writes all of `bytes` starting at `offset`.
    ///
    /// Writing past the end of a file extends it.
    ///
    /// # Errors
    /// Returns [`ImageError::WriteFailure`] if the seek, write or flush fails. The write cursor
    /// is only moved on success.
    pub fn write_at(&mut self, offset: u64, bytes: &[u8]) -> Result<(), ImageError> {
        let size = bytes.len();
        log::trace!("writing {size} bytes at offset {offset}");
        let write_failure = |source| ImageError::WriteFailure {
            offset,
            size,
            source,
        };
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(write_failure)?;
        self.inner.write_all(bytes).map_err(write_failure)?;
        self.inner.flush().map_err(write_failure)?;
        self.write_offset = offset + size as u64;
        Ok(())
    }

    /// Reads the boot sector at offset 0.
    ///
    /// Callers that only care whether a boot sector is present can use `.ok()`.
    pub fn read_boot_sector(&mut self) -> Result<BootSector, ImageError> {
        let mut raw = RawBootSector::default();
        self.read_exact_at(0, bytemuck::bytes_of_mut(&mut raw))?;
        let bs = BootSector::from(raw);
        log::debug!("read boot sector: {bs}");
        Ok(bs)
    }

    /// Writes `bs` at offset 0.
    ///
    /// The record is written as is, without validating any of its fields.
    pub fn write_boot_sector(&mut self, bs: &BootSector) -> Result<(), ImageError> {
        log::debug!("writing boot sector: {bs}");
        self.write_at(0, &bs.to_bytes())
    }

    pub fn get_ref(&self) -> &D {
        &self.inner
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}
