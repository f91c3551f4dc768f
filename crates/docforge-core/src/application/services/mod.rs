pub mod collector;
pub mod scaffold_service;

pub use collector::{AnswerCollector, AnswerOverrides};
pub use scaffold_service::{ScaffoldOptions, ScaffoldReport, ScaffoldService};
