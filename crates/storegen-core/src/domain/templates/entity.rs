use crate::domain::{
    artifact::{ArtifactKind, ArtifactSpec, Declaration},
    context::Context,
    error::DomainError,
    naming::{NameFamily, layout},
    text::TextAssembler,
};

use super::FRAMEWORK_PACKAGE;

/// Entity class mapped to `collection`.
///
/// Field declarations and field copying are left as placeholders for the
/// developer to fill in.
pub fn entity_class(
    context: &Context,
    names: &NameFamily,
    collection: &str,
) -> Result<ArtifactSpec, DomainError> {
    let entity = names.entity();
    let base = names.base().as_str();

    let preamble = TextAssembler::new()
        .line(format!("package {};", context.package(layout::ENTITY)))
        .blank()
        .line("import org.springframework.data.annotation.Id;")
        .line("import org.springframework.data.mongodb.core.mapping.Document;")
        .line("import org.springframework.data.mongodb.core.mapping.Field;")
        .line(format!("import {FRAMEWORK_PACKAGE}.data.MigratableEntity;"))
        .line(format!(
            "import {};",
            context.qualified(&["helpers"], "ObjectIdHelpers")
        ))
        .line("import lombok.Getter;")
        .line("import lombok.Setter;")
        .line("import java.io.Serializable;")
        .blank()
        .build()?;

    let annotations = TextAssembler::new()
        .line(format!("@Document(value = \"{collection}\")"))
        .line("@Getter")
        .line("@Setter")
        .build()?;

    let clause = TextAssembler::new()
        .line("implements MigratableEntity")
        .build()?;

    let body = TextAssembler::indented(4)
        .lines([
            "@Override",
            "public Serializable getMigratableId() {",
            "    return id;",
            "}",
            "",
            "@Override",
            "public String getMigratableDescription() {",
        ])
        .line(format!(
            "    return \"{base}(id=\" + id + \", largeInteger=\" + ("
        ))
        .lines([
            "        id == null ? \"null\" : ObjectIdHelpers.convertObjectIdToLargeInteger(id)",
            "    )",
            "        + \")\";",
            "}",
            "",
            "@Id",
            "public String id;",
            "",
            "// TODO: Add your fields",
            "@Field(value = \"YOUR_FIELD_HERE\")",
            "public String YOUR_FIELD_HERE;",
            "",
        ])
        .line(format!("public {entity} copyAllExceptId() {{"))
        .line(format!("    {entity} copy = new {entity}();"))
        .lines(["    // TODO: Copy the fields", "    return copy;", "}"])
        .build()?;

    Ok(ArtifactSpec {
        kind: ArtifactKind::EntityClass,
        name: entity.to_owned(),
        location: layout::ENTITY.to_vec(),
        preamble,
        annotations: Some(annotations),
        declaration: Declaration::Class,
        clause: Some(clause),
        body,
    })
}
