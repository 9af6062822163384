use crate::domain::{
    artifact::{ArtifactKind, ArtifactSpec, Declaration},
    context::Context,
    error::DomainError,
    naming::{NameFamily, StoreSide, layout},
    text::{TextAssembler, TextBlock},
};

use super::FRAMEWORK_PACKAGE;

/// Datastore class for one side of the migration.
///
/// The base store is abstract over the framework's repository store. Source
/// and destination stores are Spring components holding their side's
/// repository, a template and an optional transaction manager.
pub fn datastore_class(
    context: &Context,
    names: &NameFamily,
    side: StoreSide,
    id_type: &str,
) -> Result<ArtifactSpec, DomainError> {
    let entity = names.entity();
    let location = layout::datastore(side);
    let package = context.package(&location);

    let spec = match side {
        StoreSide::Base => ArtifactSpec {
            kind: ArtifactKind::DatastoreClass,
            name: names.store(side).to_owned(),
            preamble: TextAssembler::new()
                .line(format!("package {package};"))
                .blank()
                .line(format!(
                    "import {FRAMEWORK_PACKAGE}.spring.mongo.stores.MongoRepositoryStore;"
                ))
                .line(format!(
                    "import {};",
                    context.qualified(layout::ENTITY, entity)
                ))
                .build()?,
            annotations: None,
            declaration: Declaration::AbstractClass,
            clause: Some(
                TextAssembler::new()
                    .line(format!("extends MongoRepositoryStore<{entity}, {id_type}>"))
                    .build()?,
            ),
            body: TextBlock::empty(),
            location,
        },
        StoreSide::Source | StoreSide::Destination => {
            let base_store = names.store(StoreSide::Base);
            let repository = names.repository(side);

            ArtifactSpec {
                kind: ArtifactKind::DatastoreClass,
                name: names.store(side).to_owned(),
                preamble: TextAssembler::new()
                    .line(format!("package {package};"))
                    .blank()
                    .lines([
                        "import org.springframework.data.mongodb.MongoTransactionManager;",
                        "import org.springframework.data.mongodb.core.MongoTemplate;",
                        "import org.springframework.stereotype.Component;",
                        "import com.mongodb.lang.Nullable;",
                        "import lombok.AllArgsConstructor;",
                        "import lombok.Getter;",
                    ])
                    .blank()
                    .line(format!(
                        "import {};",
                        context.qualified(&layout::datastore(StoreSide::Base), base_store)
                    ))
                    .line(format!(
                        "import {};",
                        context.qualified(&layout::repository(side), repository)
                    ))
                    .build()?,
                annotations: Some(
                    TextAssembler::new()
                        .line("@Component")
                        .line("@AllArgsConstructor")
                        .build()?,
                ),
                declaration: Declaration::Class,
                clause: Some(
                    TextAssembler::new()
                        .line(format!("extends {base_store}"))
                        .build()?,
                ),
                body: TextAssembler::indented(4)
                    .line("@Getter")
                    .line(format!("private final {repository} repository;"))
                    .blank()
                    .line("@Getter")
                    .line("private final MongoTemplate mongoTemplate;")
                    .blank()
                    .line("@Getter")
                    .line("@Nullable")
                    .line("private final MongoTransactionManager txManager;")
                    .build()?,
                location,
            }
        }
    };

    Ok(spec)
}
