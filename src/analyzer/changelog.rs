//! Changelog bucket structure and fixed-skeleton markdown rendering.
use serde::Serialize;
use tera::{Context, Tera};

use crate::{
    analyzer::group::{Category, GroupParser, Platform},
    error::Result,
    forge::types::ForgeCommit,
};

/// Template for the report. The section order is fixed; bucket bodies
/// are pre-joined line blocks, so empty buckets render as empty bodies
/// rather than omitted sections.
const REPORT_TEMPLATE: &str = r#"
## Breaking changes

### Android

{{ breaking.android }}

### iOS

{{ breaking.ios }}

### Unknown

{{ breaking.unknown }}


## Android

### Bugfixes

{{ android.fix }}

### New features and enhancements

{{ android.feat }}

### Others

{{ android.others }}


## iOS

### Bugfixes

{{ ios.fix }}

### New features and enhancements

{{ ios.feat }}

### Others

{{ ios.others }}


## Unknown

### Bugfixes

{{ unknown.fix }}

### New features and enhancements

{{ unknown.feat }}

### Others

{{ unknown.others }}
"#;

/// Per-platform line buckets for breaking changes.
#[derive(Debug, Default)]
pub struct PlatformBuckets {
    pub android: Vec<String>,
    pub ios: Vec<String>,
    pub unknown: Vec<String>,
}

impl PlatformBuckets {
    fn bucket_mut(&mut self, platform: Platform) -> &mut Vec<String> {
        match platform {
            Platform::Android => &mut self.android,
            Platform::Ios => &mut self.ios,
            Platform::Unknown => &mut self.unknown,
        }
    }

    fn rendered(&self) -> RenderedSection {
        RenderedSection {
            android: self.android.join("\n"),
            ios: self.ios.join("\n"),
            unknown: self.unknown.join("\n"),
        }
    }
}

/// Per-category line buckets within one platform.
#[derive(Debug, Default)]
pub struct CategoryBuckets {
    pub fix: Vec<String>,
    pub feat: Vec<String>,
    pub others: Vec<String>,
}

impl CategoryBuckets {
    fn rendered(&self) -> RenderedCategories {
        RenderedCategories {
            fix: self.fix.join("\n"),
            feat: self.feat.join("\n"),
            others: self.others.join("\n"),
        }
    }
}

#[derive(Debug, Serialize)]
struct RenderedSection {
    android: String,
    ios: String,
    unknown: String,
}

#[derive(Debug, Serialize)]
struct RenderedCategories {
    fix: String,
    feat: String,
    others: String,
}

#[derive(Debug, Serialize)]
struct RenderedReport {
    breaking: RenderedSection,
    android: RenderedCategories,
    ios: RenderedCategories,
    unknown: RenderedCategories,
}

/// Classified changelog. Every commit lands in exactly one bucket, in
/// the order the forge returned it.
#[derive(Debug, Default)]
pub struct Changelog {
    pub breaking: PlatformBuckets,
    pub android: CategoryBuckets,
    pub ios: CategoryBuckets,
    pub unknown: CategoryBuckets,
}

impl Changelog {
    /// Classify commits into buckets in a single pass. Breaking commits
    /// use only the platform axis; everything else buckets by category
    /// within its platform.
    pub fn from_commits(commits: &[ForgeCommit]) -> Self {
        let parser = GroupParser::new();
        let mut changelog = Self::default();

        for commit in commits {
            let change = subject_line(&commit.message);
            let line = format_change_line(commit);
            let platform = parser.platform(change);

            match parser.category(change) {
                Category::Breaking => {
                    changelog.breaking.bucket_mut(platform).push(line);
                }
                Category::Fix => {
                    changelog.platform_mut(platform).fix.push(line);
                }
                Category::Feat => {
                    changelog.platform_mut(platform).feat.push(line);
                }
                Category::Others => {
                    changelog.platform_mut(platform).others.push(line);
                }
            }
        }

        changelog
    }

    fn platform_mut(&mut self, platform: Platform) -> &mut CategoryBuckets {
        match platform {
            Platform::Android => &mut self.android,
            Platform::Ios => &mut self.ios,
            Platform::Unknown => &mut self.unknown,
        }
    }

    /// Render the markdown report with its fixed heading skeleton.
    pub fn render(&self) -> Result<String> {
        let rendered = RenderedReport {
            breaking: self.breaking.rendered(),
            android: self.android.rendered(),
            ios: self.ios.rendered(),
            unknown: self.unknown.rendered(),
        };

        let context = Context::from_serialize(&rendered)?;
        let report = Tera::one_off(REPORT_TEMPLATE, &context, false)?;

        Ok(report)
    }
}

/// Text before the first newline of a commit message.
pub fn subject_line(message: &str) -> &str {
    message.split('\n').next().unwrap_or("")
}

/// Format one commit as a report line: subject, short sha, and author
/// handle. The author suffix is omitted when the handle is unknown.
pub fn format_change_line(commit: &ForgeCommit) -> String {
    let subject = subject_line(&commit.message);
    let short_sha = &commit.sha[..commit.sha.len().min(7)];

    match &commit.author_login {
        Some(login) => format!("* {subject} ({short_sha}) - @{login}"),
        None => format!("* {subject} ({short_sha})"),
    }
}

#[cfg(test)]
#[path = "./changelog_tests.rs"]
mod tests;
