//! Which changed paths take part in review.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Paths matching any of these are never reviewed: binary assets, minified
/// bundles, dependency and VCS directories, lockfiles, logs, caches and
/// build output.
const EXCLUDE_PATTERNS: &[&str] = &[
    r"(?i)\.(png|jpg|jpeg|gif|svg|ico|woff|woff2|ttf|eot)$",
    r"(?i)\.(min\.js|min\.css)$",
    r"node_modules",
    r"\.git",
    r"package-lock\.json$",
    r"(?i)yarn\.lock$",
    r"(?i)\.log$",
    r"(?i)\.lock$",
    r"(?i)\.cache$",
    r"dist/",
    r"build/",
    r"coverage/",
];

static EXCLUDE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    EXCLUDE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("Invalid exclude pattern"))
        .collect()
});

/// Whether a changed path should be included in review.
pub fn is_eligible(path: &str) -> bool {
    !EXCLUDE_REGEXES.iter().any(|re| re.is_match(path))
}
