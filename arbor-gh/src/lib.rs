//! # GitHub Review Status
//!
//! GitHub REST client and a [`ReviewStatusSource`](arbor_core::ReviewStatusSource)
//! that reports the pull request state of each local branch.

pub mod client;
pub mod consts;
pub mod creds;
pub mod endpoints;
pub mod models;
pub mod repo;
pub mod review;

pub use client::{GitHubClient, create_github_client};
pub use creds::{Credentials, load_credentials};
pub use models::{GitHubAuth, GitHubPullRequest, GitHubReview};
pub use repo::GitHubRepo;
pub use review::GitHubReviewSource;
