//! Configuration resolved from CLI arguments.
use crate::{
    cli,
    error::{ChangelogError, Result},
};

/// Resolved settings for a single changelog run.
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Base branch of the comparison.
    pub base: String,
    /// Branch to compare against the base.
    pub compare: String,
}

impl ChangelogConfig {
    /// Build configuration from CLI arguments, validating the repo slug.
    pub fn from_args(args: &cli::Args) -> Result<Self> {
        let (owner, repo) = args.repo.split_once('/').ok_or_else(|| {
            ChangelogError::invalid_args(format!(
                "repo must be in owner/repo form: {}",
                args.repo
            ))
        })?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(ChangelogError::invalid_args(format!(
                "repo must be in owner/repo form: {}",
                args.repo
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            base: args.base.clone(),
            compare: args.compare.clone(),
        })
    }
}
