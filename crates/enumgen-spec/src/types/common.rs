use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Target programming languages.
///
/// Declaration order is the order in which renderers run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Kotlin,
    JavaScript,
    Swift,
    CSharp,
    #[serde(rename = "golang")]
    Go,
}

impl Language {
    /// Every supported language, in generation order.
    pub const ALL: [Language; 5] = [
        Language::Kotlin,
        Language::JavaScript,
        Language::Swift,
        Language::CSharp,
        Language::Go,
    ];

    /// Token used to select this language in `--langs`.
    pub fn token(self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::JavaScript => "javascript",
            Language::Swift => "swift",
            Language::CSharp => "csharp",
            Language::Go => "golang",
        }
    }

    /// Subdirectory of the output root that receives this language's file.
    pub fn dir_name(self) -> &'static str {
        self.token()
    }

    /// Conventional source file extension (without the dot).
    pub fn file_extension(self) -> &'static str {
        match self {
            Language::Kotlin => "kt",
            Language::JavaScript => "js",
            Language::Swift => "swift",
            Language::CSharp => "cs",
            Language::Go => "go",
        }
    }

    /// Human-readable name used in console output.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Kotlin => "Kotlin",
            Language::JavaScript => "JavaScript",
            Language::Swift => "Swift",
            Language::CSharp => "C#",
            Language::Go => "Go",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The set of languages activated by a comma-separated `--langs` value.
///
/// A token activates every language whose token it contains, so `golang`
/// and `my-golang-build` both select Go. Tokens that contain no known
/// language token are remembered so they can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSelection {
    languages: BTreeSet<Language>,
    unknown: IndexSet<String>,
}

impl LanguageSelection {
    /// Parse a comma-separated language list.
    pub fn parse(list: &str) -> Self {
        let mut selection = Self::default();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let before = selection.languages.len();
            let mut matched = false;
            for lang in Language::ALL {
                if token.contains(lang.token()) {
                    selection.languages.insert(lang);
                    matched = true;
                }
            }
            if !matched {
                selection.unknown.insert(token.to_string());
            }
            tracing::trace!(
                token,
                added = selection.languages.len() - before,
                "parsed language token"
            );
        }
        selection
    }

    /// Select every supported language.
    pub fn all() -> Self {
        Language::ALL.into_iter().collect()
    }

    pub fn contains(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Activated languages in generation order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.iter().copied()
    }

    /// Tokens that did not match any supported language, in input order.
    pub fn unknown_tokens(&self) -> impl Iterator<Item = &str> {
        self.unknown.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl FromIterator<Language> for LanguageSelection {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        Self {
            languages: iter.into_iter().collect(),
            unknown: IndexSet::new(),
        }
    }
}
