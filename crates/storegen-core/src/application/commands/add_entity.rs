//! `entity add <collection> <entity-base-name> <id-type>`

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        generators::{
            CompositeGenerator, Generator, datastore_classes_generator, entity_class_generator,
            repository_interfaces_generator,
        },
        ports::ArtifactWriter,
    },
    domain::{BaseName, Context, DomainError, EmittedArtifact, NameFamily, validate_type_name},
    error::StoregenResult,
};

use super::Command;

pub const NAME: &str = "entity add";
const USAGE: &str = "<collection> <entity-base-name> <id-type>";

/// Adds one entity with its three repositories and three datastores.
pub struct AddEntityCommand<'a> {
    names: NameFamily,
    collection: String,
    id_type: String,
    tree: CompositeGenerator<'a>,
}

impl<'a> AddEntityCommand<'a> {
    /// Parse positional arguments and build the generator tree.
    ///
    /// Exactly three arguments are accepted.
    #[instrument(skip(context))]
    pub fn from_args(context: &'a Context, args: Vec<String>) -> StoregenResult<Self> {
        let [collection, base, id_type]: [String; 3] =
            args.try_into()
                .map_err(|received: Vec<String>| ApplicationError::InvalidArguments {
                    command: NAME.into(),
                    expected: USAGE.into(),
                    received,
                })?;

        validate_collection(&collection)?;
        let names = NameFamily::derive(&BaseName::parse(&base)?);
        validate_type_name("id type", &id_type)?;

        let children: Vec<Box<dyn Generator + 'a>> = vec![
            Box::new(entity_class_generator(context, &names, &collection)?),
            Box::new(repository_interfaces_generator(context, &names, &id_type)?),
            Box::new(datastore_classes_generator(context, &names, &id_type)?),
        ];
        debug!(entity = names.entity(), "Generator tree built");

        Ok(Self {
            names,
            collection,
            id_type,
            tree: CompositeGenerator::new(NAME, children),
        })
    }
}

/// Router entry point for [`AddEntityCommand`].
pub fn factory<'a>(context: &'a Context, args: Vec<String>) -> StoregenResult<Box<dyn Command + 'a>> {
    Ok(Box::new(AddEntityCommand::from_args(context, args)?))
}

impl Command for AddEntityCommand<'_> {
    fn name(&self) -> &str {
        NAME
    }

    fn run(&self, writer: &dyn ArtifactWriter) -> StoregenResult<Vec<EmittedArtifact>> {
        info!(
            entity = self.names.entity(),
            collection = %self.collection,
            id_type = %self.id_type,
            "Adding entity"
        );
        self.tree.run(writer)
    }

    fn next_steps(&self) -> Vec<String> {
        vec![
            format!("Go to {} and add fields.", self.names.entity()),
            "Link the new datastores in the services e.g. MigrateToTWService.".into(),
        ]
    }
}

// Collection names end up inside a string literal in the entity annotation.
fn validate_collection(raw: &str) -> Result<(), DomainError> {
    let reason = if raw.trim().is_empty() {
        "must not be empty"
    } else if raw.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
        "must not contain quotes, backslashes or control characters"
    } else {
        return Ok(());
    };

    Err(DomainError::InvalidName {
        kind: "collection",
        value: raw.to_string(),
        reason: reason.into(),
    })
}
