// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for storegen.
//!
//! This module contains pure logic with no I/O. Writing artifacts happens
//! through the `ArtifactWriter` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Deterministic**: The same context and names always render the same text
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod artifact;
pub mod context;
pub mod error;
pub mod naming;
pub mod templates;
pub mod text;

// Re-exports for convenience
pub use artifact::{ArtifactDescriptor, ArtifactKind, ArtifactSpec, Declaration, EmittedArtifact};
pub use context::Context;
pub use error::{DomainError, ErrorCategory};
pub use naming::{BaseName, NameFamily, StoreSide, validate_type_name};
pub use text::{Fragment, TextAssembler, TextBlock, assemble};
