//! Brackets CLI - rainbow bracket levels from the command line.
//!
//! Parses source files with tree-sitter and reports, or paints, the color
//! level of every bracket.

use std::path::PathBuf;
use std::process::ExitCode;

use brackets::Grammar;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Brackets: rainbow bracket colorization.
#[derive(Parser)]
#[command(name = "brackets")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Settings file (defaults to ./brackets.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for `annotate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per bracket
    Text,
    /// A JSON array of file reports
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the color level of every bracket in the given files
    Annotate {
        /// Source files to colorize
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Grammar to use instead of detecting it from the extension
        #[arg(short, long, value_enum)]
        grammar: Option<Grammar>,
    },

    /// Print a file with its brackets painted in their level colors
    Render {
        /// Source file to render
        file: PathBuf,

        /// Grammar to use instead of detecting it from the extension
        #[arg(short, long, value_enum)]
        grammar: Option<Grammar>,
    },

    /// Inspect or create the settings file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective settings
    Show,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!(
                "{}: failed to get current directory: {e}",
                "error".red().bold()
            );
            return ExitCode::FAILURE;
        }
    };

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Annotate {
            files,
            format,
            grammar,
        } => cli::annotate::run(
            &files,
            grammar,
            format == OutputFormat::Json,
            config,
            &cwd,
        ),
        Commands::Render { file, grammar } => cli::render::run(&file, grammar, config, &cwd),
        Commands::Config(ConfigCommand::Show) => cli::config::show(config, &cwd),
        Commands::Config(ConfigCommand::Init { force }) => cli::config::init(config, &cwd, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
