use crate::domain::{
    artifact::{ArtifactKind, ArtifactSpec, Declaration},
    context::Context,
    error::DomainError,
    naming::{NameFamily, StoreSide, layout},
    text::{TextAssembler, TextBlock},
};

use super::FRAMEWORK_PACKAGE;

/// Repository interface for one side of the migration.
///
/// The base interface extends the framework repository directly; the source
/// and destination interfaces extend the base plus their side's marker
/// interface.
pub fn repository_interface(
    context: &Context,
    names: &NameFamily,
    side: StoreSide,
    id_type: &str,
) -> Result<ArtifactSpec, DomainError> {
    let entity = names.entity();
    let location = layout::repository(side);
    let package = context.package(&location);
    let entity_import = context.qualified(layout::ENTITY, entity);

    let (preamble, annotations, clause) = match side {
        StoreSide::Base => {
            let preamble = TextAssembler::new()
                .line(format!("package {package};"))
                .blank()
                .line(format!(
                    "import {FRAMEWORK_PACKAGE}.spring.mongo.repositories.MigratableMongoRepository;"
                ))
                .line(format!("import {entity_import};"))
                .build()?;
            let clause = TextAssembler::new()
                .line(format!(
                    "extends MigratableMongoRepository<{entity}, {id_type}>"
                ))
                .build()?;
            (preamble, None, clause)
        }
        StoreSide::Source | StoreSide::Destination => {
            let base_repository = names.repository(StoreSide::Base);
            let marker = side_marker_interface(side);
            let mut marker_location = location.clone();
            marker_location.push("common");
            let preamble = TextAssembler::new()
                .line(format!("package {package};"))
                .blank()
                .line("import org.springframework.stereotype.Repository;")
                .line(format!("import {entity_import};"))
                .line(format!(
                    "import {};",
                    context.qualified(&layout::repository(StoreSide::Base), base_repository)
                ))
                .line(format!(
                    "import {};",
                    context.qualified(&marker_location, &marker)
                ))
                .build()?;
            let annotations = TextAssembler::new().line("@Repository").build()?;
            let clause = TextAssembler::new()
                .line("extends")
                .line(format!("    {base_repository},"))
                .line(format!("    {marker}<{entity}, {id_type}>"))
                .build()?;
            (preamble, Some(annotations), clause)
        }
    };

    Ok(ArtifactSpec {
        kind: ArtifactKind::RepositoryInterface,
        name: names.repository(side).to_owned(),
        location,
        preamble,
        annotations,
        declaration: Declaration::Interface,
        clause: Some(clause),
        body: TextBlock::empty(),
    })
}

/// `SrcMongoRepositoryInterface` / `DestMongoRepositoryInterface`
fn side_marker_interface(side: StoreSide) -> String {
    format!("{}MongoRepositoryInterface", side.prefix())
}
