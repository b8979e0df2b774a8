//! Application layer for avsforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Generators**: Per-component artifact producers
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Orchestration failures (distinct from domain errors)

pub mod error;
pub mod generators;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{GenerateService, GenerationSummary};
