fn main() {
    let argv = std::env::args().skip(1).collect::<Vec<_>>();
    if argv.iter().any(|t| t == "--help" || t == "-h") {
        print!("{}", ocunit2junit::help::help_text());
        return;
    }
    if argv.iter().any(|t| t == "--version" || t == "-V") {
        println!("ocunit2junit {}", ocunit2junit::version());
        return;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let cfg = ocunit2junit::config::load_report_config(&cwd).unwrap_or_default();
    let cfg_tokens = ocunit2junit::args::config_tokens(&cfg);
    let parsed = match ocunit2junit::args::derive_args(&cfg_tokens, &argv) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let Some(log_file) = parsed.log_file.as_deref() else {
        eprintln!("ocunit2junit: missing required <log-file> argument (try --help)");
        std::process::exit(2);
    };
    if parsed.verbose {
        eprintln!(
            "ocunit2junit: log_file={} report_dir={} hostname={}",
            log_file.display(),
            parsed.report_dir.display(),
            parsed.hostname.as_deref().unwrap_or("<local>")
        );
    }

    let code = match ocunit2junit::run::run(&parsed) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };
    std::process::exit(code);
}
