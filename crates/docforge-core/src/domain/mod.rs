//! Domain layer: pure scaffolding logic, no I/O.
//!
//! Everything here is deterministic and synchronous. The domain knows
//! nothing about prompting or the filesystem; it turns validated answers
//! into a [`ProjectPlan`] that the application layer materializes.

pub mod answers;
pub mod error;
pub mod layer;
pub mod plan;
pub mod slug;

pub use answers::ProjectAnswers;
pub use error::{DomainError, ErrorCategory};
pub use layer::{LAYER_CATALOG, Layer, LayerDefinition};
pub use plan::{FolderPlanEntry, PlannedFolder, ProjectPlan, SeedFile, build_plan};
pub use slug::slugify;
