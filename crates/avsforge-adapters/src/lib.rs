//! Infrastructure adapters for avsforge.
//!
//! This crate implements the ports defined in
//! `avsforge_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod config_provider;
pub mod embedded;
pub mod filesystem;
pub mod renderer;
pub mod resources;

// Re-export commonly used adapters
pub use config_provider::FixedConfigProvider;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use resources::BundledResources;
