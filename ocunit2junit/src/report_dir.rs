use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::junit_xml::{render_suite_xml, suite_report_filename};
use crate::report_model::SuiteReport;

/// Destroys and recreates the report directory. Called once per run,
/// before any suite is written, so reports from earlier runs never
/// survive.
pub fn reset_report_dir(dir: &Path) -> Result<(), ReportError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

pub fn write_suite_report(
    dir: &Path,
    report: &SuiteReport,
    hostname: &str,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(suite_report_filename(&report.name));
    fs::write(&path, render_suite_xml(report, hostname)).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
