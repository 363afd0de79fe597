pub mod loader;
pub mod parser;
pub mod types;

// Re-exports
pub use parser::{parse_file, parse_line, parse_reader, parse_str, ParseError, ParsedEntries};
pub use types::common::{Language, LanguageSelection};
pub use types::config::GenerationConfig;
pub use types::entry::EnumEntry;
pub use types::error::{Issue, Severity, ValidationReport};
