use std::fs;
use std::time::Instant;

use crate::args::ParsedArgs;
use crate::diagnostics_trace::maybe_write_run_trace;
use crate::error::ReportError;
use crate::report_dir::{reset_report_dir, write_suite_report};
use crate::stream_parser::LogStreamParser;

/// Converts the log file named in `args` into per-suite reports. Returns
/// the process exit code: 1 when the log carried a build-failed marker,
/// 0 otherwise.
pub fn run(args: &ParsedArgs) -> Result<i32, ReportError> {
    let started_at = Instant::now();

    let log_file = args.log_file.as_deref().ok_or(ReportError::MissingLogFile)?;
    let log_text = fs::read_to_string(log_file).map_err(|source| ReportError::Io {
        path: log_file.to_path_buf(),
        source,
    })?;
    let hostname = args.hostname.clone().unwrap_or_else(local_hostname);

    reset_report_dir(&args.report_dir)?;

    let mut parser = LogStreamParser::new();
    let mut suites_written = 0u32;
    for line in log_text.lines() {
        for report in parser.push_line(line)? {
            let path = write_suite_report(&args.report_dir, &report, &hostname)?;
            suites_written += 1;
            if args.verbose {
                eprintln!("ocunit2junit: wrote {}", path.display());
            }
        }
    }

    let build_failed = parser.build_failed();
    let discarded_suites = parser.discarded_suites();
    if let Some(report) = parser.finalize() {
        let path = write_suite_report(&args.report_dir, &report, &hostname)?;
        suites_written += 1;
        if args.verbose {
            eprintln!("ocunit2junit: wrote {} (suite never closed)", path.display());
        }
    }

    if args.verbose {
        if discarded_suites > 0 {
            eprintln!(
                "ocunit2junit: {discarded_suites} suite(s) were replaced before closing; their cases were discarded"
            );
        }
        eprintln!(
            "ocunit2junit: {suites_written} report(s) in {}",
            args.report_dir.display()
        );
    }

    let exit_code = i32::from(build_failed);
    maybe_write_run_trace(
        log_file,
        args,
        Some(started_at),
        serde_json::json!({
            "suites_written": suites_written,
            "discarded_suites": discarded_suites,
            "exit_code": exit_code,
        }),
    );
    Ok(exit_code)
}

fn local_hostname() -> String {
    gethostname::gethostname().to_string_lossy().to_string()
}
