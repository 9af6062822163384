//! Token-path command routing.
//!
//! Commands are registered under a path of tokens (`entity add`). Resolving
//! an input walks the path one token at a time; the first token that lands
//! on a command ends the walk and everything after it becomes the command's
//! positional arguments.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, commands::{self, Command}},
    domain::Context,
    error::StoregenResult,
};

/// Builds a command from its positional arguments.
pub type CommandFactory =
    for<'a> fn(&'a Context, Vec<String>) -> StoregenResult<Box<dyn Command + 'a>>;

type Children = BTreeMap<&'static str, Node>;

enum Node {
    Group(Children),
    Command(CommandFactory),
}

/// Terminal paths below `children`, each prefixed with `lead`.
fn collect_paths(children: &Children, lead: &mut Vec<&'static str>, out: &mut Vec<String>) {
    for (token, child) in children {
        lead.push(*token);
        match child {
            Node::Command(_) => out.push(lead.join(" ")),
            Node::Group(grandchildren) => collect_paths(grandchildren, lead, out),
        }
        lead.pop();
    }
}

/// Outcome of [`CommandRouter::resolve`].
pub enum Resolution {
    /// No tokens were given.
    Listing,
    Command(ResolvedCommand),
}

/// A matched command together with its arguments, not yet instantiated.
pub struct ResolvedCommand {
    pub path: String,
    pub args: Vec<String>,
    factory: CommandFactory,
}

impl ResolvedCommand {
    /// Build the command against `context`.
    pub fn instantiate<'a>(self, context: &'a Context) -> StoregenResult<Box<dyn Command + 'a>> {
        (self.factory)(context, self.args)
    }
}

/// Trie of command paths.
pub struct CommandRouter {
    root: Children,
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRouter {
    pub fn new() -> Self {
        Self {
            root: Children::new(),
        }
    }

    /// Router with every command storegen ships.
    pub fn builtin() -> StoregenResult<Self> {
        let mut router = Self::new();
        router.register(&["entity", "add"], commands::add_entity::factory)?;
        Ok(router)
    }

    /// Register `factory` under `path`.
    ///
    /// Fails if `path` is empty, already taken, or would pass through or
    /// shadow another command.
    pub fn register(
        &mut self,
        path: &[&'static str],
        factory: CommandFactory,
    ) -> StoregenResult<()> {
        let conflict = || ApplicationError::RouteConflict {
            path: path.join(" "),
        };

        let Some((last, groups)) = path.split_last() else {
            return Err(conflict().into());
        };

        let mut children = &mut self.root;
        for token in groups {
            let node = children
                .entry(*token)
                .or_insert_with(|| Node::Group(Children::new()));
            let Node::Group(next) = node else {
                return Err(conflict().into());
            };
            children = next;
        }

        if children.contains_key(last) {
            return Err(conflict().into());
        }
        children.insert(*last, Node::Command(factory));

        debug!(path = %path.join(" "), "Command registered");
        Ok(())
    }

    /// Walk `tokens` to a command.
    #[instrument(skip(self))]
    pub fn resolve(&self, tokens: &[String]) -> StoregenResult<Resolution> {
        if tokens.is_empty() {
            return Ok(Resolution::Listing);
        }

        let mut children = &self.root;
        let mut walked: Vec<&'static str> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some((&key, child)) = children.get_key_value(token.as_str()) else {
                let mut available = Vec::new();
                collect_paths(children, &mut walked, &mut available);
                return Err(ApplicationError::UnknownCommand {
                    token: token.clone(),
                    available,
                }
                .into());
            };

            walked.push(key);
            match child {
                Node::Command(factory) => {
                    return Ok(Resolution::Command(ResolvedCommand {
                        path: walked.join(" "),
                        args: tokens[i + 1..].to_vec(),
                        factory: *factory,
                    }));
                }
                Node::Group(next) => children = next,
            }
        }

        let path = walked.join(" ");
        let mut available = Vec::new();
        collect_paths(children, &mut walked, &mut available);
        Err(ApplicationError::IncompleteCommand { path, available }.into())
    }

    /// Every registered command path, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(&self.root, &mut Vec::new(), &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{application::ports::ArtifactWriter, domain::EmittedArtifact, error::StoregenError};

    struct Noop(&'static str);

    impl Command for Noop {
        fn name(&self) -> &str {
            self.0
        }

        fn run(&self, _: &dyn ArtifactWriter) -> StoregenResult<Vec<EmittedArtifact>> {
            Ok(Vec::new())
        }
    }

    fn noop<'a>(_: &'a Context, _: Vec<String>) -> StoregenResult<Box<dyn Command + 'a>> {
        Ok(Box::new(Noop("noop")))
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builtin_lists_entity_add() {
        let router = CommandRouter::builtin().unwrap();
        assert_eq!(router.available(), vec!["entity add".to_string()]);
    }

    #[test]
    fn empty_input_is_listing() {
        let router = CommandRouter::builtin().unwrap();
        assert!(matches!(router.resolve(&[]).unwrap(), Resolution::Listing));
    }

    #[test]
    fn remaining_tokens_become_arguments() {
        let router = CommandRouter::builtin().unwrap();
        let Resolution::Command(resolved) = router
            .resolve(&tokens(&["entity", "add", "stations", "Station", "String"]))
            .unwrap()
        else {
            panic!("expected a command");
        };
        assert_eq!(resolved.path, "entity add");
        assert_eq!(resolved.args, tokens(&["stations", "Station", "String"]));

        let ctx = Context::new("com.example.app", "/out").unwrap();
        let command = resolved.instantiate(&ctx).unwrap();
        assert_eq!(command.name(), "entity add");
    }

    #[test]
    fn unknown_token_reports_available() {
        let router = CommandRouter::builtin().unwrap();
        let err = router.resolve(&tokens(&["entity", "remove"])).err().unwrap();
        assert_eq!(
            err,
            StoregenError::Application(ApplicationError::UnknownCommand {
                token: "remove".into(),
                available: vec!["entity add".into()],
            })
        );
    }

    #[test]
    fn unknown_top_level_token() {
        let router = CommandRouter::builtin().unwrap();
        let err = router.resolve(&tokens(&["frobnicate"])).err().unwrap();
        assert!(matches!(
            err,
            StoregenError::Application(ApplicationError::UnknownCommand { ref token, .. }) if token == "frobnicate"
        ));
    }

    #[test]
    fn group_without_command_is_incomplete() {
        let router = CommandRouter::builtin().unwrap();
        let err = router.resolve(&tokens(&["entity"])).err().unwrap();
        assert_eq!(
            err,
            StoregenError::Application(ApplicationError::IncompleteCommand {
                path: "entity".into(),
                available: vec!["entity add".into()],
            })
        );
    }

    #[test]
    fn conflicting_registrations_are_rejected() {
        let mut router = CommandRouter::new();
        router.register(&["entity", "add"], noop).unwrap();

        assert!(router.register(&["entity", "add"], noop).is_err());
        assert!(router.register(&["entity"], noop).is_err());
        assert!(router.register(&["entity", "add", "more"], noop).is_err());
        assert!(router.register(&[], noop).is_err());

        router.register(&["entity", "list"], noop).unwrap();
        assert_eq!(router.available(), vec!["entity add", "entity list"]);
    }
}
