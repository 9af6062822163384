//! Command Service - the entry point the CLI drives.
//!
//! One call to [`CommandService::dispatch`] covers a whole invocation:
//! 1. Resolve the tokens against the router
//! 2. Instantiate the command with its arguments
//! 3. Run it against the configured writer
//!
//! Callers that announce the command before it runs use
//! [`CommandService::resolve`] and [`CommandService::execute`] instead.

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::ArtifactWriter,
        router::{CommandRouter, Resolution, ResolvedCommand},
    },
    domain::{Context, EmittedArtifact},
    error::StoregenResult,
};

/// What a finished command reports back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub arguments: Vec<String>,
    pub artifacts: Vec<EmittedArtifact>,
    pub next_steps: Vec<String>,
}

/// Result of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing was asked for; here is what could have been.
    Listing(Vec<String>),
    Completed(CommandReport),
}

/// Routes invocations to commands and runs them.
pub struct CommandService {
    router: CommandRouter,
    writer: Box<dyn ArtifactWriter>,
}

impl CommandService {
    pub fn new(router: CommandRouter, writer: Box<dyn ArtifactWriter>) -> Self {
        Self { router, writer }
    }

    /// Service with the built-in commands.
    pub fn with_builtin_commands(writer: Box<dyn ArtifactWriter>) -> StoregenResult<Self> {
        Ok(Self::new(CommandRouter::builtin()?, writer))
    }

    pub fn writer(&self) -> &dyn ArtifactWriter {
        self.writer.as_ref()
    }

    /// Resolve `tokens` and run the matched command.
    #[instrument(skip_all, fields(tokens = ?tokens, root = %context.root_dir().display()))]
    pub fn dispatch(&self, context: &Context, tokens: &[String]) -> StoregenResult<Dispatch> {
        match self.resolve(tokens)? {
            Resolution::Listing => Ok(Dispatch::Listing(self.available())),
            Resolution::Command(resolved) => {
                self.execute(context, resolved).map(Dispatch::Completed)
            }
        }
    }

    /// Match `tokens` to a command without building or running it.
    pub fn resolve(&self, tokens: &[String]) -> StoregenResult<Resolution> {
        self.router.resolve(tokens)
    }

    /// Every command path the router knows, sorted.
    pub fn available(&self) -> Vec<String> {
        self.router.available()
    }

    /// Build `resolved` against `context` and run it.
    #[instrument(skip_all, fields(command = %resolved.path))]
    pub fn execute(
        &self,
        context: &Context,
        resolved: ResolvedCommand,
    ) -> StoregenResult<CommandReport> {
        let command_path = resolved.path.clone();
        let arguments = resolved.args.clone();
        info!(?arguments, "Executing command");

        let command = resolved.instantiate(context)?;
        let artifacts = command.run(self.writer.as_ref())?;

        info!(artifacts = artifacts.len(), "Command completed");

        Ok(CommandReport {
            command: command_path,
            arguments,
            artifacts,
            next_steps: command.next_steps(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{ApplicationError, ports::MockArtifactWriter},
        error::StoregenError,
    };
    use std::path::Path;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn ctx() -> Context {
        Context::new("com.example.app", "/out").unwrap()
    }

    #[test]
    fn empty_invocation_lists_commands() {
        let service = CommandService::with_builtin_commands(Box::new(MockArtifactWriter::new())).unwrap();
        let outcome = service.dispatch(&ctx(), &[]).unwrap();
        assert_eq!(outcome, Dispatch::Listing(vec!["entity add".into()]));
    }

    #[test]
    fn entity_add_reports_all_artifacts() {
        let mut writer = MockArtifactWriter::new();
        writer.expect_create_new().times(7).returning(|_, _| Ok(()));
        let service = CommandService::with_builtin_commands(Box::new(writer)).unwrap();

        let outcome = service
            .dispatch(&ctx(), &tokens(&["entity", "add", "stations", "Station", "String"]))
            .unwrap();

        let Dispatch::Completed(report) = outcome else {
            panic!("expected a completed command");
        };
        assert_eq!(report.command, "entity add");
        assert_eq!(report.arguments, tokens(&["stations", "Station", "String"]));
        assert_eq!(report.artifacts.len(), 7);
        assert_eq!(report.next_steps.len(), 2);
    }

    #[test]
    fn argument_errors_write_nothing() {
        // No expectations: any write would panic the mock.
        let service = CommandService::with_builtin_commands(Box::new(MockArtifactWriter::new())).unwrap();
        let err = service
            .dispatch(&ctx(), &tokens(&["entity", "add", "stations"]))
            .unwrap_err();
        assert!(matches!(
            err,
            StoregenError::Application(ApplicationError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn collision_surfaces_to_caller() {
        let mut writer = MockArtifactWriter::new();
        writer
            .expect_create_new()
            .returning(|path: &Path, _: &str| {
                Err(ApplicationError::Collision {
                    path: path.to_path_buf(),
                }
                .into())
            });
        let service = CommandService::with_builtin_commands(Box::new(writer)).unwrap();

        let err = service
            .dispatch(&ctx(), &tokens(&["entity", "add", "stations", "Station", "String"]))
            .unwrap_err();
        assert!(err.is_collision());
    }

    #[test]
    fn resolve_exposes_path_before_anything_runs() {
        // No expectations: resolving must not touch the writer.
        let service = CommandService::with_builtin_commands(Box::new(MockArtifactWriter::new())).unwrap();

        let Resolution::Command(resolved) = service
            .resolve(&tokens(&["entity", "add", "stations", "Station"]))
            .unwrap()
        else {
            panic!("expected a command");
        };
        assert_eq!(resolved.path, "entity add");
        assert_eq!(resolved.args, tokens(&["stations", "Station"]));

        let err = service.execute(&ctx(), resolved).unwrap_err();
        assert!(matches!(
            err,
            StoregenError::Application(ApplicationError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn report_serializes_kinds_in_kebab_case() {
        let report = CommandReport {
            command: "entity add".into(),
            arguments: tokens(&["stations", "Station", "String"]),
            artifacts: vec![EmittedArtifact {
                name: "StationEntity".into(),
                kind: crate::domain::ArtifactKind::EntityClass,
                path: "/out/entity/StationEntity.java".into(),
            }],
            next_steps: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["artifacts"][0]["kind"], "entity-class");
    }
}
