use std::path::PathBuf;

use clap::Parser;

use crate::config::ReportConfig;

pub const DEFAULT_REPORT_DIR: &str = "junit_report";

#[derive(Debug, Clone, Parser, Default)]
#[command(
    name = "ocunit2junit",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct OcunitCli {
    #[arg(value_name = "LOG_FILE")]
    log_file: Option<PathBuf>,

    #[arg(value_name = "REPORT_DIR")]
    report_dir: Option<PathBuf>,

    #[arg(long = "report-dir", value_name = "DIR", overrides_with = "report_dir_flag")]
    report_dir_flag: Option<PathBuf>,

    #[arg(long = "hostname", value_name = "NAME", overrides_with = "hostname")]
    hostname: Option<String>,

    #[arg(
        long = "verbose",
        default_value_t = false,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::value_parser!(bool),
        overrides_with = "verbose"
    )]
    verbose: bool,

    #[arg(long = "diagnostics-dir", value_name = "DIR", overrides_with = "diagnostics_dir")]
    diagnostics_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub log_file: Option<PathBuf>,
    pub report_dir: PathBuf,
    pub hostname: Option<String>,
    pub verbose: bool,
    pub diagnostics_dir: Option<PathBuf>,
}

/// Parses config-derived tokens chained before argv, so anything given on
/// the command line overrides the config file. The positional report
/// directory wins over the `--report-dir` spelling.
pub fn derive_args(cfg_tokens: &[String], argv: &[String]) -> Result<ParsedArgs, clap::Error> {
    let mut clap_argv = vec!["ocunit2junit".to_string()];
    clap_argv.extend(cfg_tokens.iter().cloned());
    clap_argv.extend(argv.iter().cloned());

    let parsed_cli = OcunitCli::try_parse_from(&clap_argv)?;

    let report_dir = parsed_cli
        .report_dir
        .or(parsed_cli.report_dir_flag)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_DIR));

    Ok(ParsedArgs {
        log_file: parsed_cli.log_file,
        report_dir,
        hostname: parsed_cli.hostname,
        verbose: parsed_cli.verbose,
        diagnostics_dir: parsed_cli.diagnostics_dir,
    })
}

pub fn config_tokens(cfg: &ReportConfig) -> Vec<String> {
    let mut tokens: Vec<String> = vec![];

    if let Some(dir) = cfg
        .report_dir
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
    {
        tokens.push(format!("--report-dir={dir}"));
    }
    if let Some(name) = cfg
        .hostname
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
    {
        tokens.push(format!("--hostname={name}"));
    }
    if cfg.verbose == Some(true) {
        // Attached form: a bare `--verbose` would swallow the log-file
        // positional that follows the config tokens in argv.
        tokens.push("--verbose=true".to_string());
    }
    if let Some(dir) = cfg
        .diagnostics_dir
        .as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
    {
        tokens.push(format!("--diagnostics-dir={dir}"));
    }

    tokens
}
