//! Stage the newest daily report for static serving.
//!
//! Report files carry their date in the name, so the newest report is the
//! greatest file name. Names containing `template` are never staged.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Default reports directory, relative to the repository root.
pub const DEFAULT_REPORTS_DIR: &str = "reports/daily";
/// Default staging directory, relative to the repository root.
pub const DEFAULT_STAGING_DIR: &str = "Netlify/data";
/// File name the newest report is copied to.
pub const LATEST_REPORT_FILENAME: &str = "latest_report.json";

const TEMPLATE_MARKER: &str = "template";

/// Result of a staging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The report at `source` was copied to `destination`.
    Copied {
        source: PathBuf,
        destination: PathBuf,
    },
    /// The reports directory holds no qualifying file.
    NoReports,
    /// The reports directory does not exist.
    MissingReportsDir { path: PathBuf },
}

fn is_report_candidate(name: &str) -> bool {
    name.ends_with(".json") && !name.contains(TEMPLATE_MARKER)
}

/// Find the newest report in `reports_dir`.
///
/// Returns `Ok(None)` when the directory holds no qualifying file.
pub fn latest_report(reports_dir: &Path) -> Result<Option<PathBuf>> {
    let mut newest: Option<String> = None;

    for entry in fs::read_dir(reports_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_report_candidate(&name) {
            continue;
        }
        if newest.as_deref().map_or(true, |current| name.as_str() > current) {
            newest = Some(name);
        }
    }

    Ok(newest.map(|name| reports_dir.join(name)))
}

/// Copy the newest report into `staging_dir` as [`LATEST_REPORT_FILENAME`].
///
/// The staging directory is created when missing. When there is nothing to
/// stage a warning is logged and nothing is written.
pub fn stage_latest_report(reports_dir: &Path, staging_dir: &Path) -> Result<StageOutcome> {
    fs::create_dir_all(staging_dir)?;

    if !reports_dir.is_dir() {
        warn!(path = %reports_dir.display(), "reports directory not found");
        return Ok(StageOutcome::MissingReportsDir {
            path: reports_dir.to_path_buf(),
        });
    }

    let Some(source) = latest_report(reports_dir)? else {
        warn!(path = %reports_dir.display(), "no report files found");
        return Ok(StageOutcome::NoReports);
    };

    let destination = staging_dir.join(LATEST_REPORT_FILENAME);
    copy_file_atomic(&source, &destination)?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        "staged latest report"
    );

    Ok(StageOutcome::Copied {
        source,
        destination,
    })
}

fn copy_file_atomic(source: &Path, destination: &Path) -> Result<()> {
    let parent = destination
        .parent()
        .ok_or_else(|| Error::InvalidStagingPath {
            path: destination.to_path_buf(),
        })?;
    let mut reader = File::open(source)?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    io::copy(&mut reader, tmp.as_file_mut())?;
    tmp.flush()?;
    tmp.persist(destination).map_err(|err| err.error)?;
    Ok(())
}
