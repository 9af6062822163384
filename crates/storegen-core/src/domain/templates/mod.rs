//! Template payloads for the generated data-access layer.
//!
//! Each builder returns an [`ArtifactSpec`](crate::domain::ArtifactSpec)
//! holding literal Java / Spring Data boilerplate. Section ordering belongs
//! to `ArtifactSpec::render`, not to these builders.

mod datastore;
mod entity;
mod repository;

pub use datastore::datastore_class;
pub use entity::entity_class;
pub use repository::repository_interface;

/// Package of the migration framework the generated code builds on.
pub const FRAMEWORK_PACKAGE: &str = "com.example.mjg";
