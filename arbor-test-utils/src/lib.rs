//! Test utilities shared across the arbor workspace
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by every test, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod git;

pub use git::{
  GitRepoTestGuard, checkout_branch, create_branch, create_commit, create_remote_tracking_branch, set_gone_upstream,
  set_upstream,
};
