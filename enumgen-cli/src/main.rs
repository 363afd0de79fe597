mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use enumgen_spec::{
    loader, parse_file, GenerationConfig, ParsedEntries, Severity, ValidationReport,
};

#[derive(Parser)]
#[command(
    name = "enumgen",
    about = "Generate enum source files for several languages from a NAME = VALUE list"
)]
#[command(version)]
struct Cli {
    /// Path to the input file [default: ./enum.txt]
    #[arg(long)]
    input: Option<PathBuf>,
    /// Package name for the generated files [default: EnumPackage]
    #[arg(long)]
    package: Option<String>,
    /// Base directory for output files [default: lib]
    #[arg(long)]
    output: Option<PathBuf>,
    /// Comma-separated list of languages to generate enums for
    /// [default: kotlin,javascript,swift,csharp,golang]
    #[arg(long)]
    langs: Option<String>,
    /// JSON config file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Exit with status 1 when nothing is generated or a renderer fails
    #[arg(long)]
    strict: bool,
    /// Reject values that are not decimal integers
    #[arg(long)]
    check_values: bool,
}

fn main() -> ExitCode {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            return ExitCode::from(1);
        }
    };

    let success = run(&config);
    ExitCode::from(exit_status(success, config.strict))
}

/// Failures only change the exit status under `--strict`.
fn exit_status(success: bool, strict: bool) -> u8 {
    if success || !strict {
        0
    } else {
        1
    }
}

/// Defaults, then the config file, then explicit flags.
fn build_config(cli: &Cli) -> Result<GenerationConfig> {
    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => GenerationConfig::default(),
    };

    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(package) = &cli.package {
        config.package = package.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(langs) = &cli.langs {
        config.langs = langs.clone();
    }
    config.strict |= cli.strict;
    config.check_values |= cli.check_values;

    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

/// Parse, validate, and generate. Returns `false` if anything failed.
fn run(config: &GenerationConfig) -> bool {
    let parsed = match parse_file(&config.input) {
        Ok(parsed) => parsed,
        Err(e) => {
            print_error(&e);
            ParsedEntries::default()
        }
    };
    if let Some(e) = &parsed.read_error {
        print_error(e);
    }
    if parsed.is_empty() {
        println!("No enums found or failed to parse the input file.");
        return false;
    }
    let entries = parsed.into_entries();

    let selection = config.selection();
    let validation = enumgen_valid::validate(&entries, &selection, config);
    print_issues(&validation);
    if validation.has_errors() {
        println!(
            "{} {} invalid value(s), nothing generated",
            "✗".red().bold(),
            validation.count(Severity::Error)
        );
        return false;
    }

    let report = match enumgen_codegen::generate_all(&entries, config, &selection) {
        Ok(report) => report,
        Err(e) => {
            print_error(&e);
            return false;
        }
    };

    for outcome in report.outcomes() {
        match &outcome.result {
            Ok(path) => println!(
                "{} enum generated: {}",
                outcome.language.display_name(),
                path.display()
            ),
            Err(e) => print_error(e),
        }
    }

    report.is_success()
}

fn print_error(err: &dyn std::error::Error) {
    println!("{} {err}", "error:".red().bold());
}

fn print_issues(report: &ValidationReport) {
    for issue in report.issues() {
        let severity_str = match issue.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };

        println!(
            "  {} [{}] {} ({}:{})",
            severity_str,
            issue.code.dimmed(),
            issue.message,
            issue.origin.dimmed(),
            issue.subject.dimmed(),
        );

        if let Some(hint) = &issue.hint {
            println!("    {} {}", "hint:".cyan(), hint);
        }
    }
}
