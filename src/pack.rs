//! Per-directory packing pipeline.
//!
//! Each source directory becomes one [`PackJob`], run through a fixed sequence:
//!
//! ```text
//! create destination ──exists──▶ Skipped(DestinationExists)
//!        │
//! collect images ──none──▶ Skipped(NoImages)   (empty destination left behind)
//!        │
//! archive ─▶ cover (optional) ─▶ ComicInfo.xml ─▶ Done
//! ```
//!
//! The destination directory doubles as a completion marker: a job whose
//! destination already exists is skipped and nothing is written, so re-running
//! over the same roots never touches earlier output. The check is not atomic
//! against another process racing on the same path.
//!
//! Failures are scoped. An I/O error inside a job ends that job only, and a
//! bad root argument ends that root only; [`pack_root`] always returns a
//! report and never propagates a job error.

use crate::archive::{self, ArchiveError};
use crate::comic_info;
use crate::cover;
use crate::metadata::{self, InferenceGap};
use crate::naming;
use crate::scan;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum PackError {
    #[error("Failed to create {0}: {1}")]
    CreateDestination(PathBuf, #[source] std::io::Error),
    #[error("Failed to list images: {0}")]
    CollectImages(#[source] std::io::Error),
    #[error("Archive failed: {0}")]
    Archive(#[from] ArchiveError),
    #[error("Cover extraction failed: {0}")]
    Cover(#[source] std::io::Error),
    #[error("Metadata write failed: {0}")]
    Metadata(#[source] std::io::Error),
}

/// Static settings shared by every job of a run.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Copy the first image out as `cover.<ext>`.
    pub generate_cover: bool,
    /// File name of the chapter archive inside each destination.
    pub archive_name: String,
    /// File name of the sidecar metadata document.
    pub metadata_name: String,
    /// Subdirectory of each root that receives output; never treated as a source.
    pub output_dir_name: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            generate_cover: true,
            archive_name: "Chapter01.zip".to_string(),
            metadata_name: "ComicInfo.xml".to_string(),
            output_dir_name: "output".to_string(),
        }
    }
}

/// One source directory and where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl PackJob {
    /// Job for `source` under `root`, writing to `root/<output>/<source name>`.
    pub fn new(root: &Path, source: PathBuf, config: &PackConfig) -> Self {
        let name = source.file_name().map(PathBuf::from).unwrap_or_default();
        let destination = root.join(&config.output_dir_name).join(name);
        Self {
            source,
            destination,
        }
    }

    /// Folder name the metadata is derived from.
    pub fn comic_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Why a job did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    DestinationExists,
    NoImages,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DestinationExists => f.write_str("destination already exists"),
            Self::NoImages => f.write_str("no images found"),
        }
    }
}

/// Result of a job that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackOutcome {
    Done {
        images: usize,
        cover: Option<PathBuf>,
        gaps: Vec<InferenceGap>,
    },
    Skipped(SkipReason),
}

/// Create the job's destination, refusing to reuse an existing one.
///
/// Parents are created as needed; the destination itself must be new.
/// Returns `Ok(false)` when it was already there.
fn claim_destination(destination: &Path) -> Result<bool, PackError> {
    let fail = |e: std::io::Error| PackError::CreateDestination(destination.to_path_buf(), e);
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(fail)?;
    }
    match fs::create_dir(destination) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(fail(e)),
    }
}

/// Run a single job to completion.
pub fn pack(job: &PackJob, config: &PackConfig) -> Result<PackOutcome, PackError> {
    if !claim_destination(&job.destination)? {
        return Ok(PackOutcome::Skipped(SkipReason::DestinationExists));
    }

    let images = scan::collect_images(&job.source).map_err(PackError::CollectImages)?;
    if images.is_empty() {
        return Ok(PackOutcome::Skipped(SkipReason::NoImages));
    }
    debug!(source = %job.source.display(), images = images.len(), "collected images");

    archive::archive_images(&images, &job.destination.join(&config.archive_name))?;

    let cover = if config.generate_cover {
        cover::extract_cover(&images, &job.destination).map_err(PackError::Cover)?
    } else {
        None
    };

    let built = metadata::build_metadata(naming::parse_comic_name(&job.comic_name()));
    for gap in &built.gaps {
        warn!(source = %job.source.display(), field = gap.field(), "{gap}");
    }
    comic_info::write_comic_info(&built.metadata, &job.destination.join(&config.metadata_name))
        .map_err(PackError::Metadata)?;

    Ok(PackOutcome::Done {
        images: images.len(),
        cover,
        gaps: built.gaps,
    })
}

/// Final state of a job as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Done,
    Skipped,
    Failed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// Serializable summary of one job.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub images: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl JobReport {
    fn from_result(job: PackJob, result: Result<PackOutcome, PackError>) -> Self {
        let (status, reason, images, notices) = match result {
            Ok(PackOutcome::Done { images, gaps, .. }) => (
                JobStatus::Done,
                None,
                images,
                gaps.iter().map(ToString::to_string).collect(),
            ),
            Ok(PackOutcome::Skipped(reason)) => {
                (JobStatus::Skipped, Some(reason.to_string()), 0, Vec::new())
            }
            Err(e) => (JobStatus::Failed, Some(e.to_string()), 0, Vec::new()),
        };
        Self {
            source: job.source,
            destination: job.destination,
            status,
            reason,
            images,
            notices,
        }
    }
}

/// Everything that happened under one root argument.
#[derive(Debug, Clone, Serialize)]
pub struct RootReport {
    pub root: PathBuf,
    /// Set when the root itself could not be processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub jobs: Vec<JobReport>,
}

impl RootReport {
    pub fn count(&self, status: JobStatus) -> usize {
        self.jobs.iter().filter(|j| j.status == status).count()
    }
}

/// Pack every source directory under `root`, one job at a time.
pub fn pack_root(root: &Path, config: &PackConfig) -> RootReport {
    let sources = match scan::collect_sources(root, &config.output_dir_name) {
        Ok(sources) => sources,
        Err(e) => {
            warn!(root = %root.display(), "{e}");
            return RootReport {
                root: root.to_path_buf(),
                error: Some(e.to_string()),
                jobs: Vec::new(),
            };
        }
    };

    let jobs = sources
        .into_iter()
        .map(|source| {
            let job = PackJob::new(root, source, config);
            info!(source = %job.source.display(), "packing");
            let result = pack(&job, config);
            log_result(&job, &result);
            JobReport::from_result(job, result)
        })
        .collect();

    RootReport {
        root: root.to_path_buf(),
        error: None,
        jobs,
    }
}

fn log_result(job: &PackJob, result: &Result<PackOutcome, PackError>) {
    let destination = job.destination.display();
    match result {
        Ok(PackOutcome::Done { images, .. }) => {
            info!(%destination, outcome = JobStatus::Done.as_str(), images, "packed");
        }
        Ok(PackOutcome::Skipped(reason)) => {
            warn!(%destination, outcome = JobStatus::Skipped.as_str(), %reason, "skipped");
        }
        Err(e) => {
            warn!(%destination, outcome = JobStatus::Failed.as_str(), error = %e, "failed");
        }
    }
}
