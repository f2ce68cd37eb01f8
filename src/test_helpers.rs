//! Shared test utilities for the comic-packer test suite.
//!
//! Builds throwaway comic roots inside a `TempDir` and reads archives back.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let src = make_source(tmp.path(), "Title [Writer]", &["001.jpg", "002.jpg"]);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

// =========================================================================
// Fixture setup
// =========================================================================

/// Deterministic fake image content, distinct per file name.
pub fn image_bytes(name: &str) -> Vec<u8> {
    format!("fake image data for {name}").into_bytes()
}

/// Write fake image files named `names` into `dir`.
pub fn write_images(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), image_bytes(name)).unwrap();
    }
}

/// Create `root/<name>` holding the given images and return its path.
pub fn make_source(root: &Path, name: &str, images: &[&str]) -> PathBuf {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    write_images(&dir, images);
    dir
}

// =========================================================================
// Inspection
// =========================================================================

/// Sorted file names directly inside `dir`.
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Entry names of a ZIP archive, sorted.
///
/// Sorted because archive order follows directory enumeration order.
pub fn zip_entry_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

/// Contents of one archive entry. Panics if missing.
pub fn read_zip_entry(path: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entry = archive
        .by_name(name)
        .unwrap_or_else(|e| panic!("entry '{name}' not found in {}: {e}", path.display()));
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf).unwrap();
    buf
}
