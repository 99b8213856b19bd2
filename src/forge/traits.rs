//! Traits related to remote git forges
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    error::Result,
    forge::types::{CompareRequest, ForgeCommit},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    /// List the commits reachable from the compare branch but not the
    /// base branch, in the order the forge returns them.
    async fn compare_commits(
        &self,
        req: CompareRequest,
    ) -> Result<Vec<ForgeCommit>>;
}
