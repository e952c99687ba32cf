//! Domain types - pure values independent of the GitHub fetch layer

pub mod branch;
pub mod commit;
pub mod tag;
pub mod version;

pub use branch::BranchKind;
pub use commit::{CommitRecord, FileDiff, VersionDelta};
pub use tag::{ReleaseClass, Tag, TagCategory};
pub use version::VersionTuple;
