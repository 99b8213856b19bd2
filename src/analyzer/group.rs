use std::sync::LazyLock;

use regex::Regex;

/// Kind of change inferred from a commit subject line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    Breaking,
    Fix,
    Feat,
    #[default]
    Others,
}

/// Mobile platform a commit is inferred to affect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Platform {
    Android,
    Ios,
    #[default]
    Unknown,
}

// BREAKING
static BREAKING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(breaking)\b").unwrap());

// FIX
static FIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(fix(es|ed|ing)?|crash|exception)\b").unwrap()
});

// FEAT
static FEAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(feature|add(s|ed)?|introduc(e|ed|ing)?|implement(s|ed)?)\b",
    )
    .unwrap()
});

// ANDROID: whole word android/java, or the substring android anywhere
static ANDROID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\b(android|java)\b|android)").unwrap());

// IOS: whole-word platform terms, a trailing-boundary ios token, or an
// rct-prefixed identifier
static IOS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\b(ios|xcode|swift|objective-c|iphone|ipad)\b|ios\b|\brct)",
    )
    .unwrap()
});

/// Ordered category rules. First match wins; `Others` is the fallback.
static CATEGORY_RULES: [(&LazyLock<Regex>, Category); 3] = [
    (&BREAKING_REGEX, Category::Breaking),
    (&FIX_REGEX, Category::Fix),
    (&FEAT_REGEX, Category::Feat),
];

/// Ordered platform rules. First match wins; `Unknown` is the fallback.
static PLATFORM_RULES: [(&LazyLock<Regex>, Platform); 2] = [
    (&ANDROID_REGEX, Platform::Android),
    (&IOS_REGEX, Platform::Ios),
];

#[derive(Default)]
/// Determines which changelog buckets a commit belongs to by matching
/// its subject line against ordered lists of regex rules.
pub struct GroupParser {}

impl GroupParser {
    /// Create new group parser backed by the fixed rule lists.
    pub fn new() -> Self {
        Self {}
    }

    /// Determine the change category for a subject line, checking
    /// breaking changes first, then bug fixes, then features.
    pub fn category(&self, change: &str) -> Category {
        for (pattern, category) in CATEGORY_RULES.iter() {
            if pattern.is_match(change) {
                return *category;
            }
        }

        Category::default()
    }

    /// Determine the platform for a subject line. Android wins when both
    /// platform rules match.
    pub fn platform(&self, change: &str) -> Platform {
        for (pattern, platform) in PLATFORM_RULES.iter() {
            if pattern.is_match(change) {
                return *platform;
            }
        }

        Platform::default()
    }
}
