//! Branch metadata collection.
//!
//! The module is split so the renderer only depends on the
//! [`BranchMetadataSource`] contract; the git2-backed and in-memory sources
//! are interchangeable implementations of it.

pub mod catalog;
pub mod memory;
pub mod repository;
pub mod source;

pub use catalog::{BranchCatalog, BranchInfo, BranchLookup};
pub use memory::InMemorySource;
pub use repository::{GitBranchSource, shorten_ref_name};
pub use source::{BranchMetadataSource, DETACHED_HEAD};
