//! Cover image extraction.
//!
//! The cover is the image whose file name sorts first, copied next to the
//! archive as `cover.<ext>` with the original extension kept.

use std::fs;
use std::path::{Path, PathBuf};

/// Base name of the extracted cover file.
pub const COVER_STEM: &str = "cover";

/// Pick the image with the lexicographically smallest file name.
pub fn select_cover(paths: &[PathBuf]) -> Option<&PathBuf> {
    paths.iter().min_by(|a, b| a.file_name().cmp(&b.file_name()))
}

/// Destination file name for a cover taken from `source`.
///
/// `007.png` → `cover.png`; a source without an extension gives `cover`.
pub fn cover_file_name(source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!("{COVER_STEM}.{}", ext.to_string_lossy()),
        None => COVER_STEM.to_string(),
    }
}

/// Copy the selected cover from `paths` into `destination_dir`.
///
/// Returns the written path, or `None` when `paths` is empty.
pub fn extract_cover(paths: &[PathBuf], destination_dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let Some(source) = select_cover(paths) else {
        return Ok(None);
    };
    let target = destination_dir.join(cover_file_name(source));
    fs::copy(source, &target)?;
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn selects_smallest_name() {
        let paths: Vec<PathBuf> = ["b.png", "a.jpg", "c.png"].iter().map(PathBuf::from).collect();
        assert_eq!(select_cover(&paths), Some(&PathBuf::from("a.jpg")));
    }

    #[test]
    fn selection_ignores_parent_directories() {
        let paths = vec![PathBuf::from("z/a.jpg"), PathBuf::from("a/b.jpg")];
        assert_eq!(select_cover(&paths), Some(&PathBuf::from("z/a.jpg")));
    }

    #[test]
    fn select_from_empty_is_none() {
        assert_eq!(select_cover(&[]), None);
    }

    #[test]
    fn cover_name_keeps_extension() {
        assert_eq!(cover_file_name(Path::new("dir/007.png")), "cover.png");
        assert_eq!(cover_file_name(Path::new("001.jpeg")), "cover.jpeg");
        assert_eq!(cover_file_name(Path::new("noext")), "cover");
    }

    #[test]
    fn extract_copies_selected_image() {
        let tmp = TempDir::new().unwrap();
        let src = make_source(tmp.path(), "S", &["b.png", "a.jpg", "c.png"]);
        let dest = tmp.path().join("dest");
        std::fs::create_dir(&dest).unwrap();
        let paths = vec![src.join("b.png"), src.join("a.jpg"), src.join("c.png")];

        let written = extract_cover(&paths, &dest).unwrap().unwrap();

        assert_eq!(written, dest.join("cover.jpg"));
        assert_eq!(std::fs::read(&written).unwrap(), image_bytes("a.jpg"));
        assert!(!dest.join("cover.png").exists());
    }

    #[test]
    fn extract_with_no_images_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(extract_cover(&[], tmp.path()).unwrap(), None);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
