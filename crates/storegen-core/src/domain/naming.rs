//! Name derivation for one entity.
//!
//! Every identifier a generator needs (entity class, repositories, stores)
//! is derived here from the user-supplied base name. Generators never format
//! these names themselves.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Which side of the migration a repository or store belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreSide {
    /// Shared abstraction over both sides.
    Base,
    /// The store records are read from.
    Source,
    /// The store records are written to.
    Destination,
}

impl StoreSide {
    /// Generation order.
    pub const ALL: [StoreSide; 3] = [Self::Base, Self::Source, Self::Destination];

    /// Class name prefix.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Source => "Src",
            Self::Destination => "Dest",
        }
    }

    /// Package segment below `repository` / `migrational.datastores`.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Base => "common",
            Self::Source => "src",
            Self::Destination => "dest",
        }
    }
}

impl fmt::Display for StoreSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Validated entity base name, e.g. `Station`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseName(String);

impl BaseName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        validate_identifier("entity name", raw)?;
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed family of identifiers derived from one [`BaseName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFamily {
    base: BaseName,
    entity: String,
    repositories: [String; 3],
    stores: [String; 3],
}

impl NameFamily {
    pub fn derive(base: &BaseName) -> Self {
        let b = base.as_str();
        Self {
            base: base.clone(),
            entity: format!("{b}Entity"),
            repositories: StoreSide::ALL.map(|side| format!("{}{b}Repository", side.prefix())),
            stores: StoreSide::ALL.map(|side| format!("{}{b}Store", side.prefix())),
        }
    }

    pub fn base(&self) -> &BaseName {
        &self.base
    }

    /// `StationEntity`
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// `BaseStationRepository`, `SrcStationRepository`, `DestStationRepository`
    pub fn repository(&self, side: StoreSide) -> &str {
        &self.repositories[index(side)]
    }

    /// `BaseStationStore`, `SrcStationStore`, `DestStationStore`
    pub fn store(&self, side: StoreSide) -> &str {
        &self.stores[index(side)]
    }
}

const fn index(side: StoreSide) -> usize {
    match side {
        StoreSide::Base => 0,
        StoreSide::Source => 1,
        StoreSide::Destination => 2,
    }
}

/// Package segments (below the root namespace) for each artifact family.
pub mod layout {
    use super::StoreSide;

    pub const ENTITY: &[&str] = &["entity"];

    pub fn repository(side: StoreSide) -> Vec<&'static str> {
        vec!["repository", side.segment()]
    }

    pub fn datastore(side: StoreSide) -> Vec<&'static str> {
        vec!["migrational", "datastores", side.segment()]
    }
}

/// Check a (possibly qualified) type name such as `String` or
/// `org.bson.types.ObjectId`.
pub fn validate_type_name(kind: &'static str, raw: &str) -> Result<(), DomainError> {
    raw.split('.').try_for_each(|segment| {
        validate_identifier(kind, segment).map_err(|_| DomainError::InvalidName {
            kind,
            value: raw.to_owned(),
            reason: "expected a type name such as String or org.bson.types.ObjectId".into(),
        })
    })
}

/// ASCII identifier check shared by names, namespaces and type arguments.
pub(crate) fn validate_identifier(kind: &'static str, raw: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidName {
        kind,
        value: raw.to_owned(),
        reason: reason.to_owned(),
    };

    let mut chars = raw.chars();
    let first = chars.next().ok_or_else(|| invalid("cannot be empty"))?;
    if !first.is_ascii_alphabetic() {
        return Err(invalid("must start with an ASCII letter"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("only letters, digits and '_' are allowed"));
    }
    Ok(())
}
