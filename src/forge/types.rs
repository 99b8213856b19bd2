//! Wire types for the compare endpoint and the normalized commit.
use serde::Deserialize;

/// Branch pair identifying one comparison query.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub base: String,
    pub compare: String,
}

/// Response body of the compare endpoint. Only the `commits` array is
/// read; `None` means the response was missing it.
#[derive(Debug, Deserialize)]
pub struct CompareResponse {
    #[serde(default)]
    pub commits: Option<Vec<CompareCommit>>,
}

/// One commit entry as returned by the compare endpoint.
#[derive(Debug, Deserialize)]
pub struct CompareCommit {
    pub sha: String,
    pub commit: CommitDetail,
    /// Absent when the forge cannot resolve the author to an account.
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CommitAuthor {
    pub login: String,
}

/// Represents a normalized commit returned from the forge.
#[derive(Debug, Clone)]
pub struct ForgeCommit {
    pub sha: String,
    pub message: String,
    pub author_login: Option<String>,
}

impl From<CompareCommit> for ForgeCommit {
    fn from(entry: CompareCommit) -> Self {
        Self {
            sha: entry.sha,
            message: entry.commit.message,
            author_login: entry.author.map(|a| a.login),
        }
    }
}
