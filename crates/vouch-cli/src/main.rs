use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod testing;
mod tour;

/// Vouch test registry and runner.
///
/// Runs a registered suite of named test cases, synchronous or asynchronous,
/// and reports one outcome per case in registration order.
///
/// EXAMPLES:
///     vouch test                   Run the whole suite
///     vouch test Destructuring     Run cases whose label contains a pattern
///     vouch test --jobs 4          Keep up to 4 cases in flight
///     vouch list                   Show registered labels
///
/// ENVIRONMENT VARIABLES:
///     VOUCH_JSON        Set to '1' for JSON output by default
///     VOUCH_JOBS        Default number of cases in flight
///     VOUCH_TIMEOUT_MS  Default per-case timeout
///     VOUCH_LOG         Log filter (e.g. 'vouch_runtime=debug'), written to stderr
///     NO_COLOR          Set to disable colored output
#[derive(Parser)]
#[command(name = "vouch")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the test suite
    ///
    /// Runs every registered case and prints a report. Exits with code 1 if
    /// any case failed. Skipped placeholders never fail the run.
    ///
    /// EXAMPLES:
    ///     vouch test                       Run all cases
    ///     vouch test Destructuring         Filter by label
    ///     vouch test --verbose             One line per case
    ///     vouch test --timeout-ms 500      Fail cases that take longer
    ///     vouch test --json                Output results as JSON
    #[command(visible_alias = "t")]
    Test {
        /// Only run cases whose label contains this pattern
        pattern: Option<String>,
        /// Run one case at a time (overrides --jobs)
        #[arg(long)]
        sequential: bool,
        /// Number of cases in flight at once
        #[arg(long, short = 'j')]
        jobs: Option<usize>,
        /// Per-case timeout in milliseconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout_ms: Option<u64>,
        /// Verbose output (show every case)
        #[arg(long, short = 'v')]
        verbose: bool,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
        /// Directory to search for vouch.toml (defaults to current directory)
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Output results in JSON format
        #[arg(long, env = "VOUCH_JSON")]
        json: bool,
    },

    /// List registered cases without running them
    ///
    /// EXAMPLES:
    ///     vouch list                   All labels in registration order
    ///     vouch list Array --json      Matching labels as JSON
    #[command(visible_alias = "ls")]
    List {
        /// Only list cases whose label contains this pattern
        pattern: Option<String>,
        /// Output in JSON format
        #[arg(long, env = "VOUCH_JSON")]
        json: bool,
    },

    /// Generate shell completion scripts
    ///
    /// EXAMPLES:
    ///     vouch completions bash > ~/.local/share/bash-completion/completions/vouch
    ///     vouch completions zsh > ~/.zfunc/_vouch
    ///     vouch completions fish > ~/.config/fish/completions/vouch.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    logging::init_tracing(&cli_config);

    match cli.command {
        Commands::Test {
            pattern,
            sequential,
            jobs,
            timeout_ms,
            verbose,
            no_color,
            dir,
            json,
        } => {
            let project_config = vouch_config::ConfigLoader::new()
                .jobs_set_by_flag(jobs.is_some() || sequential)
                .timeout_set_by_flag(timeout_ms.is_some())
                .load_from_directory(&dir)
                .with_context(|| format!("Failed to load configuration from {}", dir.display()))?;

            let args = commands::test::TestArgs {
                pattern,
                sequential,
                jobs,
                timeout_ms,
                verbose,
                no_color: no_color || cli_config.no_color,
                json,
            };
            let exit_code = commands::test::run(args, &project_config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::List { pattern, json } => {
            let args = commands::list::ListArgs { pattern, json };
            commands::list::run(args)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
