//! File-type categories for PR description statistics.

use std::fmt;
use std::path::Path;

/// Category of a changed file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    JavaScriptTypeScript,
    Python,
    Java,
    Go,
    Rust,
    Php,
    Ruby,
    Stylesheets,
    Html,
    Configuration,
    Documentation,
    Sql,
    ShellScripts,
    Docker,
    GitHubActions,
    Other,
}

impl FileCategory {
    /// Get the display label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::JavaScriptTypeScript => "JavaScript/TypeScript",
            FileCategory::Python => "Python",
            FileCategory::Java => "Java",
            FileCategory::Go => "Go",
            FileCategory::Rust => "Rust",
            FileCategory::Php => "PHP",
            FileCategory::Ruby => "Ruby",
            FileCategory::Stylesheets => "Stylesheets",
            FileCategory::Html => "HTML",
            FileCategory::Configuration => "Configuration",
            FileCategory::Documentation => "Documentation",
            FileCategory::Sql => "SQL",
            FileCategory::ShellScripts => "Shell Scripts",
            FileCategory::Docker => "Docker",
            FileCategory::GitHubActions => "GitHub Actions",
            FileCategory::Other => "Other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Rule {
    extensions: &'static [&'static str],
    /// Additionally require this substring in the path.
    path_contains: Option<&'static str>,
    category: FileCategory,
}

impl Rule {
    const fn ext(extensions: &'static [&'static str], category: FileCategory) -> Self {
        Self {
            extensions,
            path_contains: None,
            category,
        }
    }

    fn matches(&self, extension: &str, path: &str) -> bool {
        self.extensions.iter().any(|ext| *ext == extension)
            && self.path_contains.is_none_or(|needle| path.contains(needle))
    }
}

/// Classification rules, evaluated in order; the first match wins.
///
/// The GitHub Actions rule comes after the generic YAML rule and therefore
/// never matches. The order is kept so that workflow files keep counting as
/// Configuration.
const RULES: &[Rule] = &[
    Rule::ext(&[".js", ".ts", ".jsx", ".tsx"], FileCategory::JavaScriptTypeScript),
    Rule::ext(&[".py"], FileCategory::Python),
    Rule::ext(&[".java"], FileCategory::Java),
    Rule::ext(&[".go"], FileCategory::Go),
    Rule::ext(&[".rs"], FileCategory::Rust),
    Rule::ext(&[".php"], FileCategory::Php),
    Rule::ext(&[".rb"], FileCategory::Ruby),
    Rule::ext(&[".css", ".scss", ".sass", ".less"], FileCategory::Stylesheets),
    Rule::ext(&[".html", ".htm"], FileCategory::Html),
    Rule::ext(&[".json", ".yaml", ".yml", ".xml"], FileCategory::Configuration),
    Rule::ext(&[".md", ".txt", ".rst"], FileCategory::Documentation),
    Rule::ext(&[".sql"], FileCategory::Sql),
    Rule::ext(&[".sh", ".bash", ".zsh"], FileCategory::ShellScripts),
    Rule::ext(&[".dockerfile"], FileCategory::Docker),
    Rule {
        extensions: &[".yml", ".yaml"],
        path_contains: Some("github/workflows"),
        category: FileCategory::GitHubActions,
    },
];

/// Lower-cased extension of the last path component, including the dot.
///
/// Dotfiles such as `.gitignore` and names without a dot have no extension.
fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Classify a path by its extension.
pub fn classify(path: &str) -> FileCategory {
    let extension = extension_of(path);
    RULES
        .iter()
        .find(|rule| rule.matches(&extension, path))
        .map(|rule| rule.category)
        .unwrap_or(FileCategory::Other)
}

/// Number of changed files in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeCount {
    pub category: FileCategory,
    pub count: usize,
}

/// Count paths per category, in the order each category is first seen.
pub fn count_file_types<S: AsRef<str>>(paths: &[S]) -> Vec<FileTypeCount> {
    let mut counts: Vec<FileTypeCount> = Vec::new();

    for path in paths {
        let category = classify(path.as_ref());
        match counts.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.count += 1,
            None => counts.push(FileTypeCount { category, count: 1 }),
        }
    }

    counts
}
