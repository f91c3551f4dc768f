//! Docforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the docforge
//! documentation scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          docforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (AnswerCollector, ScaffoldService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Driven: Prompter, Filesystem)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    docforge-adapters (Infrastructure)   │
//! │  (LocalFilesystem, ScriptedPrompter..)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (Layer catalog, slug, ProjectPlan)    │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The whole tool is a single linear pipeline: collect answers, derive a
//! folder plan from the immutable layer catalog, materialize the plan on
//! disk. There is no concurrency and no state beyond the run's own
//! answer/plan objects.

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnswerCollector, AnswerOverrides, ScaffoldOptions, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, Prompter, SelectChoice},
    };
    pub use crate::domain::{
        FolderPlanEntry, LAYER_CATALOG, Layer, LayerDefinition, PlannedFolder, ProjectAnswers,
        ProjectPlan, build_plan, slugify,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
