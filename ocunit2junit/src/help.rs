pub fn help_text() -> &'static str {
    r#"ocunit2junit

Usage:
  ocunit2junit <log-file> [report-dir] [flags]

Arguments:
  <log-file>                     Test-runner log text to convert
  [report-dir]                   Output directory for the XML reports (default: junit_report)

Flags:
  -h, --help                     Print help
  -V, --version                  Print version
  --report-dir <dir>             Output directory (same as the positional)
  --hostname <name>              Hostname written into each report (default: this machine)
  --verbose[=true|false]         More diagnostics on stderr
  --diagnostics-dir <dir>        Write a run_trace.json with run details

Notes:
  The report directory is wiped and recreated on every run.
  One TEST-<suite>.xml file is written per closed test suite.
  Exit status is 1 when the log contains BUILD FAILED, otherwise 0.
  Config is read from ocunit2junit.toml or .ocunit2junitrc.{json,yaml,yml}
  in the invocation directory; command-line flags win.
"#
}
