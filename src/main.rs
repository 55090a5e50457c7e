//! lintfall CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lintfall::cli::{CheckArgs, Cli, Commands, DiffArgs, OutputFormat};
use lintfall::{Lang, LintReport, LintResult, Linter, LintfallError};

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> lintfall::Result<bool> {
    match &cli.command {
        Commands::Check(args) => run_check(cli, args),
        Commands::Diff(args) => run_diff(cli, args),
        Commands::Languages => {
            run_languages();
            Ok(true)
        }
    }
}

/// Lint one file or inline code string
fn run_check(cli: &Cli, args: &CheckArgs) -> lintfall::Result<bool> {
    let language = match &args.language {
        Some(name) => Some(Lang::from_extension(name).ok_or_else(|| {
            LintfallError::UnknownLanguage { name: name.clone() }
        })?),
        None => None,
    };

    let linter = Linter::new();
    let results = linter.lint(&args.input, language);
    report(cli, results)
}

/// Lint two versions of a file, reporting only newly introduced errors
fn run_diff(cli: &Cli, args: &DiffArgs) -> lintfall::Result<bool> {
    let linter = Linter::new();
    let results = linter.lint_file_diff(&args.original, &args.updated);
    report(cli, results)
}

/// Print the language registry
fn run_languages() {
    for lang in Lang::all() {
        let profile = lang.profile();
        let command = profile
            .check_command
            .map(|argv| argv.join(" "))
            .unwrap_or_else(|| "(built-in)".to_string());
        println!("{:<12} .{:<6} {}", lang.name(), lang.extension(), command);
    }
}

fn report(cli: &Cli, results: Vec<LintResult>) -> lintfall::Result<bool> {
    let report = LintReport::from_results(results);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for result in &report.results {
                for finding in &result.errors {
                    let path = finding.file_path.as_deref().unwrap_or("<input>");
                    println!(
                        "{}:{}:{}: {}",
                        path, finding.line, finding.column, finding.message
                    );
                }
                for finding in &result.warnings {
                    let path = finding.file_path.as_deref().unwrap_or("<input>");
                    println!(
                        "{}:{}:{}: warning: {}",
                        path, finding.line, finding.column, finding.message
                    );
                }
            }
            if !report.success {
                eprintln!(
                    "{} error(s), {} warning(s)",
                    report.error_count, report.warning_count
                );
            } else if cli.verbose {
                eprintln!("clean");
            }
        }
    }

    Ok(report.success)
}
