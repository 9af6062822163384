//! Application layer for storegen.
//!
//! This layer contains:
//! - **Generators**: the leaf/composite tree that emits artifacts
//! - **Commands**: argument parsing and tree construction per command
//! - **Router**: token-path lookup from input to command
//! - **Services**: `CommandService`, the single driving entry point
//! - **Ports**: the `ArtifactWriter` trait implemented by adapters
//! - **Errors**: routing and emission failures
//!
//! All naming and text rules live in `crate::domain`; nothing here decides
//! what a generated file looks like.

pub mod commands;
pub mod error;
pub mod generators;
pub mod ports;
pub mod router;
pub mod services;

pub use commands::{AddEntityCommand, Command};
pub use error::ApplicationError;
pub use generators::{CompositeGenerator, Generator, LeafGenerator};
pub use ports::ArtifactWriter;
pub use router::{CommandFactory, CommandRouter, Resolution, ResolvedCommand};
pub use services::{CommandReport, CommandService, Dispatch};
