//! Infrastructure adapters for storegen.
//!
//! This crate implements the `ArtifactWriter` port defined in
//! `storegen_core::application::ports`. All disk I/O lives here.

pub mod filesystem;

pub use filesystem::{DryRunFilesystem, LocalFilesystem, MemoryFilesystem};
