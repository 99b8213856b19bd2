//! Filters out commits that only touch CI services.
use crate::forge::types::ForgeCommit;

/// Commit-message substrings identifying CI-only commits.
const CI_SERVICE_NAMES: [&str; 3] = ["travis", "circleci", "circle ci"];

/// Drop commits whose message mentions a CI service, case-insensitively.
/// Order is preserved for retained commits.
pub fn filter_ci_commits(commits: Vec<ForgeCommit>) -> Vec<ForgeCommit> {
    commits
        .into_iter()
        .filter(|commit| {
            let text = commit.message.to_lowercase();
            !CI_SERVICE_NAMES.iter().any(|name| text.contains(name))
        })
        .collect()
}
