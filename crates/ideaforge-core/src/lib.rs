//! IdeaForge Core - Idea-to-Blueprint Pipeline
//!
//! This crate provides the domain and application layers for the
//! IdeaForge blueprint generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          ideaforge-cli (CLI)            │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Generation Pipeline (Pure)       │
//! │  (Generator: classify → stack → files)  │
//! │          No Ports, No Effects           │
//! └──────────────────┬──────────────────────┘
//!                    │ produces Blueprint
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │    (ExportService writes FileSets)      │
//! └──────────────────┬──────────────────────┘
//!                    │ through
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   ideaforge-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ideaforge_core::domain::GenerateRequest;
//! use ideaforge_core::generate::Generator;
//!
//! let request = GenerateRequest::new("a chat app for study groups");
//! let blueprint = Generator::new().generate(&request);
//!
//! assert!(blueprint.title.starts_with("Social/Chat"));
//! assert!(blueprint.files.contains("package.json"));
//! ```

// Pure domain values and rule tables
pub mod domain;

// The idea-to-blueprint pipeline
pub mod generate;

// Effectful use cases behind ports
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::Filesystem, ExportOptions, ExportReport, ExportService,
    };
    pub use crate::domain::{
        Blueprint, Domain, FileSet, GenerateRequest, OrderedSet, StackCategory, TechStack,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::generate::Generator;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
