//! Application services - orchestrate use cases.
//!
//! One use case exists: generating a project. [`GenerateService`]
//! coordinates the ports and the component generators to accomplish it.

pub mod generate_service;

pub use generate_service::{GenerateService, GenerationSummary};
