//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Url,
    header::{HeaderMap, HeaderValue},
};

use crate::{
    error::{ChangelogError, Result},
    forge::{
        config::{RemoteConfig, USER_AGENT},
        traits::Forge,
        types::{CompareRequest, CompareResponse, ForgeCommit},
    },
};

/// GitHub forge implementation using reqwest for branch comparison
/// queries.
pub struct Github {
    base_url: Url,
    client: Client,
}

impl Github {
    /// Create GitHub client with the fixed User-Agent header and API
    /// base URL for the configured repository.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.append("User-Agent", HeaderValue::from_static(USER_AGENT));

        let client = Client::builder().default_headers(headers).build()?;

        let base_url = Url::parse(&format!(
            "{}://{}/repos/{}/{}/",
            config.scheme, config.host, config.owner, config.repo
        ))?;

        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl Forge for Github {
    async fn compare_commits(
        &self,
        req: CompareRequest,
    ) -> Result<Vec<ForgeCommit>> {
        let url = self
            .base_url
            .join(&format!("compare/{}...{}", req.base, req.compare))?;

        debug!("fetching comparison: {url}");

        let request = self.client.get(url).build()?;
        let response = self.client.execute(request).await?;
        let result = response.error_for_status()?;
        let body = result.text().await?;
        let compare: CompareResponse = serde_json::from_str(&body)?;

        let commits = compare.commits.ok_or_else(|| {
            ChangelogError::malformed("response missing commits array")
        })?;

        info!(
            "fetched {} commits between {} and {}",
            commits.len(),
            req.base,
            req.compare
        );

        Ok(commits.into_iter().map(ForgeCommit::from).collect())
    }
}
