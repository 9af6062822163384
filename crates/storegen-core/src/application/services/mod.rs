//! Application services - orchestrate use cases.
//!
//! Services tie the router, commands and the writer port together into the
//! single use case the CLI exposes: "run these tokens".

pub mod command_service;

pub use command_service::{CommandReport, CommandService, Dispatch};
