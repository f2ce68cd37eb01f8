//! Chapter archive writer.
//!
//! Images are stored flat under their base names, so `src/Title/001.jpg`
//! becomes the entry `001.jpg`. Entries are written in the order given.
//!
//! If the destination already holds a ZIP file, new entries are appended to
//! it; otherwise a fresh archive is created.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// Write `paths` into the ZIP archive at `destination`.
pub fn archive_images(paths: &[PathBuf], destination: &Path) -> Result<(), ArchiveError> {
    let existing = destination
        .metadata()
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false);

    let mut zip = if existing {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(destination)?;
        ZipWriter::new_append(file)?
    } else {
        ZipWriter::new(File::create(destination)?)
    };

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in paths {
        let name = path
            .file_name()
            .ok_or_else(|| ArchiveError::NoFileName(path.clone()))?
            .to_string_lossy()
            .into_owned();
        zip.start_file(name, options)?;
        let mut source = File::open(path)?;
        io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}
