//! Executable commands.
//!
//! A command is built from its positional arguments by a factory registered
//! with the [`CommandRouter`](crate::application::router::CommandRouter), then
//! run once against an [`ArtifactWriter`].

pub mod add_entity;

pub use add_entity::AddEntityCommand;

use crate::{
    application::ports::ArtifactWriter, domain::EmittedArtifact, error::StoregenResult,
};

/// A fully-argumented unit of work.
pub trait Command {
    /// Token path the command was registered under, e.g. `entity add`.
    fn name(&self) -> &str;

    /// Run every generator the command owns, in order.
    fn run(&self, writer: &dyn ArtifactWriter) -> StoregenResult<Vec<EmittedArtifact>>;

    /// Manual follow-up the developer still has to do.
    fn next_steps(&self) -> Vec<String> {
        Vec::new()
    }
}
