//! # storegen CLI
//!
//! Generates the entity, repository and datastore classes a Spring Data
//! MongoDB migration project needs for each new collection.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + files + env).
//! 4. Build the [`OutputManager`].
//! 5. Check the root directory, resolve the tokens, announce the command
//!    and run it.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                    |
//! |------|--------------------------------------------|
//! |  0   | Success                                    |
//! |  1   | Internal error, or no command given        |
//! |  2   | User / input error (incl. existing files)  |
//! |  4   | Configuration error (incl. bad root dir)   |

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use storegen_adapters::{DryRunFilesystem, LocalFilesystem};
use storegen_core::{
    application::{ArtifactWriter, CommandService, Resolution},
    domain::Context,
    error::StoregenError,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod config;
mod error;
mod logging;
mod output;

/// Exit code when no command was given and the listing was printed instead.
const LISTING_EXIT_CODE: u8 = 1;

fn main() -> ExitCode {
    // Missing .env is fine; real deployments use the environment directly.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and must exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        dry_run = cli.global.dry_run,
        tokens = ?cli.tokens,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(Outcome::Completed) => {
            info!("storegen completed successfully");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Listed) => ExitCode::from(LISTING_EXIT_CODE),
        Err(e) => handle_error(e, verbose),
    }
}

enum Outcome {
    Completed,
    Listed,
}

#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<Outcome> {
    let project_dir = match &cli.global.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let config = AppConfig::load(&project_dir, cli.global.config.as_ref())?;
    let output = OutputManager::new(&cli.global, &config);

    let writer: Box<dyn ArtifactWriter> = if cli.global.dry_run {
        Box::new(DryRunFilesystem::new())
    } else {
        Box::new(LocalFilesystem::new())
    };
    let service = CommandService::with_builtin_commands(writer)?;

    let context = build_context(&project_dir, &config, service.writer())?;
    info!(
        namespace = context.namespace(),
        root = %context.root_dir().display(),
        "Context ready"
    );

    let resolved = match service.resolve(&cli.tokens)? {
        Resolution::Listing => {
            output.listing(&service.available())?;
            return Ok(Outcome::Listed);
        }
        Resolution::Command(resolved) => resolved,
    };

    // Announced before the arguments are checked, so a failing run still
    // names the command it tried.
    output.announce(&resolved.path, &resolved.args)?;
    let report = service.execute(&context, resolved)?;
    output.report(&report, cli.global.dry_run)?;
    Ok(Outcome::Completed)
}

/// Resolve the root directory for the configured namespace and make sure it
/// is there before anything is generated.
fn build_context(
    project_dir: &Path,
    config: &AppConfig,
    writer: &dyn ArtifactWriter,
) -> CliResult<Context> {
    let namespace = config.project.namespace.as_str();
    let root: PathBuf = Context::resolve_root(
        project_dir,
        Path::new(&config.project.source_root),
        namespace,
    );

    if !writer.is_dir(&root) {
        return Err(CliError::InvalidRootDirectory {
            path: root,
            namespace: namespace.to_string(),
        });
    }

    Context::new(namespace, root).map_err(|e| CliError::Core(StoregenError::from(e)))
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
