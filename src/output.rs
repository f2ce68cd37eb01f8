//! CLI output formatting for pack results.
//!
//! Each root argument gets a block: a header line, one line per job led by its
//! status, indented notices under packed jobs, and a closing tally.
//!
//! ```text
//! comics
//!     done     Title [Writer] (Action) (12 images)
//!         Notice: could not infer Genre from folder name, using "Unknown"
//!     skipped  Another [Someone]: destination already exists
//!     failed   Broken: Archive failed: IO error: permission denied
//!     Packed 1, skipped 1, failed 1
//! ```
//!
//! `format_*` functions are pure and return lines; `print_*` wrappers write
//! them to stdout.

use crate::pack::{JobReport, JobStatus, RootReport};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Source directory name for display, falling back to the full path.
fn source_label(job: &JobReport) -> String {
    job.source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| job.source.display().to_string())
}

/// Format the status line for one job.
///
/// ```text
/// done     Title (3 images)
/// skipped  Other: no images found
/// ```
fn job_line(job: &JobReport) -> String {
    let status = format!("{:<8}", job.status.as_str());
    let label = source_label(job);
    match (job.status, &job.reason) {
        (JobStatus::Done, _) => format!("{} {} ({} images)", status, label, job.images),
        (_, Some(reason)) => format!("{} {}: {}", status, label, reason),
        (_, None) => format!("{} {}", status, label),
    }
}

/// Format the report for one root argument.
pub fn format_root_report(report: &RootReport) -> Vec<String> {
    let mut lines = vec![report.root.display().to_string()];

    if let Some(ref error) = report.error {
        lines.push(format!("{}Error: {}", indent(1), error));
        return lines;
    }

    for job in &report.jobs {
        lines.push(format!("{}{}", indent(1), job_line(job)));
        for notice in &job.notices {
            lines.push(format!("{}Notice: {}", indent(2), notice));
        }
    }

    lines.push(format!(
        "{}Packed {}, skipped {}, failed {}",
        indent(1),
        report.count(JobStatus::Done),
        report.count(JobStatus::Skipped),
        report.count(JobStatus::Failed)
    ));
    lines
}

/// Print root report to stdout.
pub fn print_root_report(report: &RootReport) {
    for line in format_root_report(report) {
        println!("{}", line);
    }
}
