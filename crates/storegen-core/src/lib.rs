//! Storegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for storegen, a
//! generator of Spring Data MongoDB boilerplate for projects that migrate
//! data between a source and a destination datastore.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           storegen-cli (CLI)            │
//! │     (Drives CommandService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Application (Router, Commands,        │
//! │   Generator tree, CommandService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ writes through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Port: ArtifactWriter               │
//! │  (implemented in storegen-adapters)     │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Text Assembler, Naming, Context,      │
//! │   Artifact sections, templates)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storegen_core::prelude::*;
//!
//! # fn run(writer: Box<dyn ArtifactWriter>) -> StoregenResult<()> {
//! let context = Context::new("com.example.app", "src/main/java/com/example/app")?;
//! let service = CommandService::with_builtin_commands(writer)?;
//!
//! let tokens: Vec<String> = ["entity", "add", "stations", "Station", "String"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! service.dispatch(&context, &tokens)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ArtifactWriter, Command, CommandReport, CommandRouter, CommandService,
        Dispatch,
    };
    pub use crate::domain::{
        ArtifactKind, BaseName, Context, EmittedArtifact, NameFamily, StoreSide, TextAssembler,
        TextBlock,
    };
    pub use crate::error::{ErrorCategory, StoregenError, StoregenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
