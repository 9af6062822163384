use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    context::Context,
    error::DomainError,
    text::{TextAssembler, TextBlock},
};

/// Family an artifact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    EntityClass,
    RepositoryInterface,
    DatastoreClass,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityClass => write!(f, "entity class"),
            Self::RepositoryInterface => write!(f, "repository interface"),
            Self::DatastoreClass => write!(f, "datastore class"),
        }
    }
}

/// Shape of the declaration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Class,
    AbstractClass,
    Interface,
}

impl Declaration {
    pub fn render(self, name: &str) -> String {
        match self {
            Self::Class => format!("public class {name}"),
            Self::AbstractClass => format!("public abstract class {name}"),
            Self::Interface => format!("public interface {name}"),
        }
    }
}

/// The ordered sections of one output file.
///
/// Payload text lives in `crate::domain::templates`; this type only knows
/// the order in which sections are laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    /// Type name, also the file stem.
    pub name: String,
    /// Package segments below the root namespace.
    pub location: Vec<&'static str>,
    pub preamble: TextBlock,
    pub annotations: Option<TextBlock>,
    pub declaration: Declaration,
    /// `extends` / `implements` clause.
    pub clause: Option<TextBlock>,
    /// Empty body renders as `{}`.
    pub body: TextBlock,
}

impl ArtifactSpec {
    /// Compose all sections into the final file text.
    pub fn render(&self) -> Result<TextBlock, DomainError> {
        let mut text = TextAssembler::new()
            .block(self.preamble.clone())
            .blank();

        if let Some(annotations) = &self.annotations {
            text = text.block(annotations.clone());
        }
        text = text.line(self.declaration.render(&self.name));
        if let Some(clause) = &self.clause {
            text = text.block(clause.clone());
        }

        if self.body.is_empty() {
            text = text.line("{}");
        } else {
            text = text.line("{").block(self.body.clone()).line("}");
        }

        text.build()
    }

    /// Resolve the target path and content against `context`.
    pub fn describe(&self, context: &Context) -> Result<ArtifactDescriptor, DomainError> {
        Ok(ArtifactDescriptor {
            name: self.name.clone(),
            kind: self.kind,
            path: context.source_file(&self.location, &self.name),
            content: self.render()?,
        })
    }
}

/// Fully resolved output file, consumed once by a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub name: String,
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: TextBlock,
}

impl ArtifactDescriptor {
    pub fn emitted(&self) -> EmittedArtifact {
        EmittedArtifact {
            name: self.name.clone(),
            kind: self.kind,
            path: self.path.clone(),
        }
    }
}

/// What a generator reports after persisting an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedArtifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub path: PathBuf,
}
