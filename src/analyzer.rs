//! Commit filtering, classification, and changelog rendering.

/// Changelog bucket structure and markdown rendering.
pub mod changelog;

/// CI-only commit filtering.
pub mod filter;

/// Platform and category classification rules.
pub mod group;
