//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `storegen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ArtifactWriter`: create-exclusive file emission
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `CommandService::dispatch`, called by the CLI

pub mod output;

pub use output::ArtifactWriter;

#[cfg(test)]
pub use output::MockArtifactWriter;
