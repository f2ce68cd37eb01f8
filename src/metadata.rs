//! Comic metadata derived from a parsed folder name.
//!
//! ## Field mapping
//!
//! Each field is resolved independently from the [`ParsedName`] segments:
//!
//! - **Series**: first title segment
//! - **Writer** / **Penciller**: first square-bracket tag (both get the same value)
//! - **Genre**: round tags, then the remaining square tags, then CJK tags,
//!   joined with `", "`
//! - **Summary** / **Status**: never inferred
//!
//! Every field starts from a fresh default record, so a folder name that yields
//! nothing still produces a fully populated [`ComicMetadata`]. Fields that fall
//! back to the default are reported as [`InferenceGap`]s; they never stop a job.

use crate::naming::ParsedName;
use std::fmt;

/// Placeholder for string fields that could not be inferred.
pub const UNKNOWN: &str = "Unknown";

/// Publication status as understood by Tachiyomi-style readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishingStatus {
    Unknown,
    Ongoing,
    #[default]
    Completed,
    Licensed,
    PublishingFinished,
    Cancelled,
    OnHiatus,
}

impl PublishingStatus {
    const ALL: [Self; 7] = [
        Self::Unknown,
        Self::Ongoing,
        Self::Completed,
        Self::Licensed,
        Self::PublishingFinished,
        Self::Cancelled,
        Self::OnHiatus,
    ];

    /// Status for a numeric code (0 = Unknown .. 6 = On hiatus).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Human-readable label written to `ComicInfo.xml`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Ongoing => "Ongoing",
            Self::Completed => "Completed",
            Self::Licensed => "Licensed",
            Self::PublishingFinished => "Publishing finished",
            Self::Cancelled => "Cancelled",
            Self::OnHiatus => "On hiatus",
        }
    }
}

impl fmt::Display for PublishingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The record written to the sidecar metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicMetadata {
    pub series: String,
    pub writer: String,
    pub penciller: String,
    pub summary: String,
    pub genre: String,
    pub status: PublishingStatus,
}

impl Default for ComicMetadata {
    fn default() -> Self {
        Self {
            series: UNKNOWN.to_string(),
            writer: UNKNOWN.to_string(),
            penciller: UNKNOWN.to_string(),
            summary: UNKNOWN.to_string(),
            genre: UNKNOWN.to_string(),
            status: PublishingStatus::default(),
        }
    }
}

/// A field that kept its default because the folder name had no data for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceGap {
    /// No unbracketed text.
    Series,
    /// No square-bracket tag; covers both Writer and Penciller.
    Writer,
    /// No tags left over for the genre list.
    Genre,
}

impl InferenceGap {
    /// Metadata field name as it appears in `ComicInfo.xml`.
    pub fn field(self) -> &'static str {
        match self {
            Self::Series => "Series",
            Self::Writer => "Writer",
            Self::Genre => "Genre",
        }
    }
}

impl fmt::Display for InferenceGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Series => write!(f, "could not infer Series from folder name, using \"{UNKNOWN}\""),
            Self::Writer => write!(
                f,
                "could not infer Writer/Penciller from folder name, using \"{UNKNOWN}\""
            ),
            Self::Genre => write!(f, "could not infer Genre from folder name, using \"{UNKNOWN}\""),
        }
    }
}

/// Metadata plus the fields that fell back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltMetadata {
    pub metadata: ComicMetadata,
    pub gaps: Vec<InferenceGap>,
}

/// Map parsed folder-name segments onto the metadata schema.
pub fn build_metadata(parsed: ParsedName) -> BuiltMetadata {
    let ParsedName {
        title,
        round_bracket,
        mut square_bracket,
        cjk_bracket,
    } = parsed;
    let defaults = ComicMetadata::default();
    let mut gaps = Vec::new();

    let series = match title.into_iter().next() {
        Some(series) => series,
        None => {
            gaps.push(InferenceGap::Series);
            defaults.series
        }
    };

    let writer = if square_bracket.is_empty() {
        gaps.push(InferenceGap::Writer);
        defaults.writer
    } else {
        square_bracket.remove(0)
    };

    let tags: Vec<String> = round_bracket
        .into_iter()
        .chain(square_bracket)
        .chain(cjk_bracket)
        .collect();
    let genre = if tags.is_empty() {
        gaps.push(InferenceGap::Genre);
        defaults.genre
    } else {
        tags.join(", ")
    };

    BuiltMetadata {
        metadata: ComicMetadata {
            series,
            penciller: writer.clone(),
            writer,
            genre,
            ..ComicMetadata::default()
        },
        gaps,
    }
}
