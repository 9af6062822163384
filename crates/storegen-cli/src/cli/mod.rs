//! CLI argument definitions using the clap derive API.
//!
//! clap owns the global flags only. Command tokens are passed through
//! untouched to the core `CommandRouter`, which owns the command tree.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "storegen",
    bin_name = "storegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate MongoDB migration boilerplate",
    long_about = "storegen generates the entity, repository and datastore classes \
                  a Spring Data MongoDB migration project needs for each collection.",
    after_help = "COMMANDS:\n\
        \x20 entity add <collection> <entity-base-name> <id-type>\n\n\
        EXAMPLES:\n\
        \x20 storegen entity add stations Station String\n\
        \x20 storegen --dry-run entity add trips Trip ObjectId\n\
        \x20 storegen -C ../migrator entity add users User Long",
)]
pub struct Cli {
    /// Flags that apply to the whole invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command path followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        help = "Command tokens, e.g. `entity add stations Station String`"
    )]
    pub tokens: Vec<String>,
}
