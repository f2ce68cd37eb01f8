//! Filesystem discovery: source directories under a root, images inside a source.
//!
//! ## Directory Structure
//!
//! ```text
//! comics/                                   # Root (CLI argument)
//! ├── Title [Writer] (Action)/              # Source directory
//! │   ├── 001.jpg
//! │   ├── 002.jpg
//! │   └── notes.txt                         # Ignored (not an image)
//! ├── Another Title [Someone]/
//! │   └── page.png
//! ├── loose-file.txt                        # Ignored (not a directory)
//! └── output/                               # Excluded from sources
//!     └── Title [Writer] (Action)/          # Written by a previous run
//! ```
//!
//! Both listings are single-level and keep filesystem enumeration order.
//! Callers that need a stable order sort for themselves.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions accepted as comic pages. Matched case-sensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Error, Debug)]
pub enum RootError {
    #[error("Directory '{0}' does not exist")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether `path` names a file with an accepted image extension.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

/// List the image files directly inside `dir`.
///
/// An empty result is a normal outcome, not an error.
pub fn collect_images(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_image(&path) {
            images.push(path);
        }
    }
    Ok(images)
}

/// List candidate source directories under `root`.
///
/// Plain files are ignored, as is the subdirectory named `output_dir_name`.
pub fn collect_sources(root: &Path, output_dir_name: &str) -> Result<Vec<PathBuf>, RootError> {
    if !root.exists() {
        return Err(RootError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RootError::NotADirectory(root.to_path_buf()));
    }

    let mut sources = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_name().to_str() == Some(output_dir_name) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            sources.push(path);
        }
    }
    Ok(sources)
}
