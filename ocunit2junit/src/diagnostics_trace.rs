use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::args::ParsedArgs;

#[derive(Debug, Clone, Serialize)]
pub struct RunTrace {
    pub schema_version: u32,
    pub log_file: String,
    pub report_dir: String,
    pub started_at_unix_ms: Option<u128>,
    pub elapsed_ms: Option<u128>,
    pub args: ArgsSummary,
    pub extra: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArgsSummary {
    pub verbose: bool,
    pub hostname: Option<String>,
}

/// Writes `run_trace.json` when a diagnostics directory was requested.
/// Trace failures never fail the run.
pub fn maybe_write_run_trace(
    log_file: &Path,
    args: &ParsedArgs,
    started_at: Option<Instant>,
    extra: serde_json::Value,
) {
    let Some(dir) = args.diagnostics_dir.as_ref() else {
        return;
    };
    let _ = std::fs::create_dir_all(dir);
    let trace_path = dir.join("run_trace.json");

    let started_at_unix_ms = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .ok()
        .map(|d| d.as_millis());
    let elapsed_ms = started_at.map(|t| t.elapsed().as_millis());

    let trace = RunTrace {
        schema_version: 1,
        log_file: log_file.to_string_lossy().to_string(),
        report_dir: args.report_dir.to_string_lossy().to_string(),
        started_at_unix_ms,
        elapsed_ms,
        args: ArgsSummary {
            verbose: args.verbose,
            hostname: args.hostname.clone(),
        },
        extra,
    };

    if let Ok(file) = std::fs::File::create(trace_path) {
        let _ = serde_json::to_writer_pretty(file, &trace);
    }
}
