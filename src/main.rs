use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cmdhelp::commands::{HelpOptions, HelpRenderer, Project, WriterUi, builtin_registry};
use cmdhelp::config;
use cmdhelp::manifest;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

/// Outputs the usage instructions for all commands or the provided command.
#[derive(Debug, Parser)]
#[command(name = "cmdhelp", version)]
struct Cli {
    /// Include option descriptions and command scopes
    #[arg(short, long)]
    verbose: bool,

    /// Print one JSON document instead of text
    #[arg(long)]
    json: bool,

    /// Project manifest with extra commands and addons
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Commands to describe (default: all); pass flag-like aliases after `--`, as in `cmdhelp -- --help`
    #[arg(value_name = "COMMAND")]
    names: Vec<String>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{:#}\n", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_config().context("Failed to load help config")?;

    let mut registry = builtin_registry();
    let project = match &cli.manifest {
        Some(path) => {
            let manifest = manifest::load_manifest(path)
                .with_context(|| format!("Failed to load manifest {}", path.display()))?;
            manifest.extend_registry(&mut registry);
            manifest.project()
        }
        None => Project::default(),
    };

    let options = HelpOptions {
        verbose: cli.verbose || config.verbose,
        json: cli.json,
        raw_args: Vec::new(),
    };

    let renderer = HelpRenderer::new(&config.program, &registry)
        .with_addons(&project)
        .with_multi_command_aliases(config.multi_command_aliases.clone());

    let mut ui = WriterUi::new(io::stdout().lock());
    renderer.run(&mut ui, &options, &cli.names)?;
    Ok(())
}

/// Logs go to stderr so stdout only carries help output.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn print_error(message: &str) {
    let mut stderr = io::stderr();
    let _ = execute!(
        stderr,
        SetForegroundColor(Color::Red),
        Print(message),
        ResetColor
    );
}
