//! Configuration for the GitHub API connection.

/// GitHub REST API host queried for branch comparisons.
pub const GITHUB_API_HOST: &str = "api.github.com";
/// URL scheme used for all API requests.
pub const GITHUB_API_SCHEME: &str = "https";
/// Fixed User-Agent header sent with every request.
pub const USER_AGENT: &str =
    "Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0)";

/// Remote repository connection configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Remote forge host (e.g., "api.github.com").
    pub host: String,
    /// URL scheme (http or https).
    pub scheme: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RemoteConfig {
    /// GitHub.com configuration for an owner/repo pair.
    pub fn github(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            host: GITHUB_API_HOST.to_string(),
            scheme: GITHUB_API_SCHEME.to_string(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_remote_config() {
        let remote = RemoteConfig::github("acme", "mobile-app");
        assert_eq!(remote.host, GITHUB_API_HOST);
        assert_eq!(remote.scheme, "https");
        assert_eq!(remote.owner, "acme");
        assert_eq!(remote.repo, "mobile-app");
    }
}
