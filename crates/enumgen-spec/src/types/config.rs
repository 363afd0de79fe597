use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::common::{Language, LanguageSelection};

pub const DEFAULT_INPUT: &str = "./enum.txt";
pub const DEFAULT_PACKAGE: &str = "EnumPackage";
pub const DEFAULT_OUTPUT: &str = "lib";
pub const DEFAULT_LANGS: &str = "kotlin,javascript,swift,csharp,golang";

/// Run configuration, built once at startup and passed by reference.
///
/// Also the shape of the optional JSON config file; every field may be
/// omitted there and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Input file with one `NAME = VALUE` per line
    pub input: PathBuf,

    /// Root directory for generated files
    pub output: PathBuf,

    /// Package/namespace identifier, also the output file stem
    pub package: String,

    /// Comma-separated language list
    pub langs: String,

    /// Report failures through the exit code
    pub strict: bool,

    /// Reject values that are not decimal integers
    pub check_values: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            package: DEFAULT_PACKAGE.to_string(),
            langs: DEFAULT_LANGS.to_string(),
            strict: false,
            check_values: false,
        }
    }
}

impl GenerationConfig {
    /// Languages activated by `langs`.
    pub fn selection(&self) -> LanguageSelection {
        LanguageSelection::parse(&self.langs)
    }

    /// Directory that receives the file for `language`.
    pub fn language_dir(&self, language: Language) -> PathBuf {
        self.output.join(language.dir_name())
    }

    /// Full path of the file generated for `language`.
    pub fn output_path(&self, language: Language) -> PathBuf {
        self.language_dir(language)
            .join(format!("{}.{}", self.package, language.file_extension()))
    }
}
