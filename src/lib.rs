//! # Comic Packer
//!
//! Turns folders of loose page images into reader-ready comic chapters.
//! The folder name is the data source: free text becomes the series title and
//! bracketed tags become writer and genre metadata.
//!
//! # Pipeline
//!
//! For every subdirectory `D` of a root `R` (except `R/output`):
//!
//! ```text
//! R/D/*.jpg|*.jpeg|*.png   →  R/output/D/Chapter01.zip   (flat archive)
//!                          →  R/output/D/cover.<ext>     (first image by name)
//! "D" (folder name)        →  R/output/D/ComicInfo.xml   (series, writer, genre)
//! ```
//!
//! Jobs run one at a time. An existing `R/output/D` means the job already ran
//! and it is skipped untouched, so the tool can be re-run over a growing
//! library.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Bracket-convention folder-name scanner |
//! | [`metadata`] | Maps parsed names onto the `ComicInfo` fields, reporting gaps |
//! | [`scan`] | Lists source directories under a root and images inside a source |
//! | [`archive`] | Writes images into the chapter ZIP |
//! | [`cover`] | Picks and copies the cover image |
//! | [`comic_info`] | Renders `ComicInfo.xml` |
//! | [`pack`] | Per-job state machine and per-root driver |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | tracing subscriber setup |
//!
//! # Naming Convention
//!
//! ```text
//! Series Title [Writer] (Genre) (Genre) 【Tag】
//! ```
//!
//! The first square-bracket tag is the writer (also used as penciller). All
//! other tags, round first, then square, then `【】`, form the genre list.
//! Anything the name does not provide stays `Unknown` and is reported as a
//! notice; it never stops a job.
//!
//! # Output Compatibility
//!
//! `ComicInfo.xml` follows the layout Komga and Tachiyomi-family readers
//! expect, including the `ty:PublishingStatusTachiyomi` status element. The
//! rendering in [`comic_info`] is fixed text, not a generic XML writer, so the
//! bytes stay identical across versions.

pub mod archive;
pub mod comic_info;
pub mod cover;
pub mod logging;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod pack;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
