//! Application layer: use-case orchestration behind ports.
//!
//! Two services make up the whole pipeline:
//! - [`AnswerCollector`] drives the [`ports::Prompter`] port to gather
//!   validated answers;
//! - [`ScaffoldService`] materializes the folder plan through the
//!   [`ports::Filesystem`] port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    AnswerCollector, AnswerOverrides, ScaffoldOptions, ScaffoldReport, ScaffoldService,
};
