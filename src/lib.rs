pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod github;
pub mod ui;

pub use engine::{Finding, FindingKind, ValidationEngine, ValidationReport};
pub use error::{Result, TagCheckError};
