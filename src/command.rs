//! Changelog generation command implementation.
use log::*;

use crate::{
    analyzer::{changelog::Changelog, filter},
    cli,
    config::ChangelogConfig,
    error::Result,
    forge::{
        config::RemoteConfig,
        github::Github,
        traits::Forge,
        types::CompareRequest,
    },
};

/// Execute changelog generation for the configured branch comparison.
pub async fn execute(args: &cli::Args) -> Result<String> {
    let config = ChangelogConfig::from_args(args)?;
    let forge = Github::new(RemoteConfig::github(
        config.owner.clone(),
        config.repo.clone(),
    ))?;

    generate(&forge, &config).await
}

/// Fetch, filter, classify, and render the report. No partial output:
/// either the full report is returned or the first error propagates.
pub async fn generate(
    forge: &dyn Forge,
    config: &ChangelogConfig,
) -> Result<String> {
    let commits = forge
        .compare_commits(CompareRequest {
            base: config.base.clone(),
            compare: config.compare.clone(),
        })
        .await?;

    let commits = filter::filter_ci_commits(commits);

    info!("{} commits left after CI filtering", commits.len());

    let changelog = Changelog::from_commits(&commits);

    changelog.render()
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ChangelogError,
        forge::{traits::MockForge, types::ForgeCommit},
    };

    use super::*;

    fn config() -> ChangelogConfig {
        ChangelogConfig {
            owner: "acme".to_string(),
            repo: "mobile-app".to_string(),
            base: "0.50-stable".to_string(),
            compare: "0.51-stable".to_string(),
        }
    }

    fn commit(sha: &str, message: &str, author: Option<&str>) -> ForgeCommit {
        ForgeCommit {
            sha: sha.to_string(),
            message: message.to_string(),
            author_login: author.map(|a| a.to_string()),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_generate_end_to_end() {
        let mut forge = MockForge::new();

        forge.expect_compare_commits().returning(|req| {
            assert_eq!(req.base, "0.50-stable");
            assert_eq!(req.compare, "0.51-stable");

            Ok(vec![
                commit("1111111aaa", "Update travis cache settings", None),
                commit(
                    "2222222bbb",
                    "Breaking: rename Android bridge package",
                    Some("alice"),
                ),
                commit("3333333ccc", "Add RCTScrollView snap prop", None),
            ])
        });

        let report = generate(&forge, &config()).await.expect("report");

        let breaking_android = report
            .find("## Breaking changes\n\n### Android")
            .expect("breaking android section");
        let breaking_line = report
            .find("* Breaking: rename Android bridge package (2222222) - @alice")
            .expect("breaking android line");
        let ios_section = report.find("\n## iOS").expect("ios section");
        let ios_line = report
            .find("* Add RCTScrollView snap prop (3333333)")
            .expect("ios feat line");

        assert!(breaking_android < breaking_line);
        assert!(ios_section < ios_line);

        // the CI commit is filtered out entirely
        assert!(!report.contains("travis"));
        assert!(!report.contains("1111111"));
    }

    #[test_log::test(tokio::test)]
    async fn test_generate_propagates_fetch_failure() {
        let mut forge = MockForge::new();

        forge.expect_compare_commits().returning(|_| {
            Err(ChangelogError::Transport("connection refused".to_string()))
        });

        let result = generate(&forge, &config()).await;

        assert!(matches!(result, Err(ChangelogError::Transport(_))));
    }
}
