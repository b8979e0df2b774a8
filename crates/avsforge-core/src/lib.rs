//! Avsforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the avsforge
//! AVS scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          avsforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │           (GenerateService)             │
//! │    Orchestrates Project Generation      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Config, Resources, Render, Filesystem) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    avsforge-adapters (Infrastructure)   │
//! │ (BundledResources, LocalFilesystem, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectConfig, Artifact, Layout, ..)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use avsforge_core::{
//!     application::GenerateService,
//!     domain::{ConfigDefaults, TemplateKind},
//! };
//!
//! // 1. Describe the defaults handed to the configuration collector
//! let defaults = ConfigDefaults::new("my-avs", TemplateKind::TaskBased);
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(provider, resources, renderer, filesystem);
//! service.generate("./".as_ref(), &defaults).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerationSummary,
        ports::{ConfigProvider, Filesystem, ResourceProvider, TemplateRenderer},
    };
    pub use crate::domain::{
        Artifact, ConfigDefaults, ProjectConfig, RelativePath, TemplateContext, TemplateKind,
        TemplateName, TemplateSource,
    };
    pub use crate::error::{AvsforgeError, AvsforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
