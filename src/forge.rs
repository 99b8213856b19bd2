//! Read-only interface to remote git forges.
//!
//! Provides the branch-comparison query used to list the commits that
//! differ between two branches, through a common trait.

/// Connection configuration for the GitHub API.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common trait for forge platform abstraction.
pub mod traits;

/// Wire types for the compare endpoint and the normalized commit.
pub mod types;
