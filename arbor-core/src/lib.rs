//! # Arbor Core Library
//!
//! Renders the local branches of a repository as a tree, each branch hung
//! under the upstream it tracks.
//!
//! The pipeline is [`BranchMetadataSource`] → [`TopologyBuilder`] →
//! [`PresentationEngine`] → [`ColumnFormatter`]; [`render_branch_map`] runs
//! all of it for one repository.

pub mod columns;
pub mod config;
pub mod error;
pub mod git;
pub mod output;
pub mod presentation;
pub mod review;
pub mod topology;

pub use columns::{Cell, ColumnFormatter, DEFAULT_SEPARATOR, OutputRow, Paint};
pub use config::{ArborConfig, ConfigDirs};
pub use error::{ArborError, Result};
pub use git::{BranchCatalog, BranchInfo, BranchLookup, BranchMetadataSource, GitBranchSource, InMemorySource};
pub use output::{ColorMode, print_error};
pub use presentation::{
  BranchClass, HeadContext, Namespaces, PresentationEngine, PresentationOptions, render_branch_map,
};
pub use review::{NoReviewStatus, ReviewState, ReviewStatus, ReviewStatusSource, StatusTable};
pub use topology::{Forest, NodeKind, TopologyBuilder};
