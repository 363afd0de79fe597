use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::types::config::GenerationConfig;
use crate::types::entry::EnumEntry;
use crate::types::error::{Issue, E_PARSE_ERROR};

/// Separator between name and value on an input line.
pub const SEPARATOR: &str = " = ";

/// Errors raised while reading the input file
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Error opening file: {source}")]
    InputOpen { path: PathBuf, source: io::Error },

    #[error("Error reading file: {0}")]
    InputRead(#[source] io::Error),
}

/// Entries read from an input, plus the read error that stopped reading early, if any.
#[derive(Debug, Default)]
pub struct ParsedEntries {
    /// Entries in line order
    pub entries: Vec<EnumEntry>,
    /// Set when reading stopped on an I/O error; `entries` holds what came before it
    pub read_error: Option<ParseError>,
}

impl ParsedEntries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No usable entry was found. Generation must not run in this case.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<EnumEntry> {
        self.entries
    }
}

/// Parse a single `NAME = VALUE` line.
///
/// Returns `None` unless splitting on `" = "` yields exactly two parts.
pub fn parse_line(line: &str) -> Option<EnumEntry> {
    let mut parts = line.split(SEPARATOR);
    let name = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(EnumEntry::new(name, value))
}

/// Parse every line of `reader`, skipping lines that are not `NAME = VALUE`.
///
/// Lines are split on raw bytes; invalid UTF-8 is decoded lossily rather
/// than treated as an error. Only an I/O failure stops reading.
pub fn parse_reader<R: BufRead>(mut reader: R) -> ParsedEntries {
    let mut parsed = ParsedEntries::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "stopped reading input");
                parsed.read_error = Some(ParseError::InputRead(e));
                break;
            }
        }

        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        match parse_line(&line) {
            Some(entry) => parsed.entries.push(entry),
            None => tracing::trace!(line = line_no, "skipping malformed line"),
        }
    }

    parsed
}

/// Drop a trailing `\n`, then a trailing `\r`.
fn trim_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

/// Parse entries from an in-memory string
pub fn parse_str(content: &str) -> ParsedEntries {
    parse_reader(content.as_bytes())
}

/// Open and parse an input file.
pub fn parse_file(path: &Path) -> Result<ParsedEntries, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = parse_reader(BufReader::new(file));
    tracing::debug!(
        path = %path.display(),
        entries = parsed.len(),
        "parsed input file"
    );
    Ok(parsed)
}

/// Parse a JSON config file's content
#[allow(clippy::result_large_err)]
pub fn parse_config(content: &str, file_path: &str) -> Result<GenerationConfig, Issue> {
    serde_json::from_str(content).map_err(|e| serde_error_to_issue(e, file_path))
}

/// Convert a serde_json error into an Issue pointing at the line and column
fn serde_error_to_issue(err: serde_json::Error, file_path: &str) -> Issue {
    let line = err.line();
    let col = err.column();
    let location = format!("{line}:{col}");

    Issue::error(
        E_PARSE_ERROR,
        format!("JSON parse error: {err}"),
        file_path,
        &location,
    )
    .with_hint("Check JSON syntax and field names")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Read;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("RED = 1"), Some(EnumEntry::new("RED", "1")));
    }

    #[test]
    fn test_parse_line_keeps_value_verbatim() {
        assert_eq!(
            parse_line("MASK = 0xFF // top"),
            Some(EnumEntry::new("MASK", "0xFF // top"))
        );
        assert_eq!(parse_line("EMPTY = "), Some(EnumEntry::new("EMPTY", "")));
        assert_eq!(
            parse_line("RED  =  1"),
            Some(EnumEntry::new("RED ", " 1"))
        );
    }

    #[test]
    fn test_parse_line_rejects_wrong_part_count() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("RED"), None);
        assert_eq!(parse_line("RED=1"), None);
        assert_eq!(parse_line("RED =1"), None);
        assert_eq!(parse_line("A = B = C"), None);
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let parsed = parse_str("RED = 1\nGREEN = 2\nBLUE = 3\nRED = 1\n");
        assert!(parsed.read_error.is_none());
        assert_eq!(
            parsed.into_entries(),
            vec![
                EnumEntry::new("RED", "1"),
                EnumEntry::new("GREEN", "2"),
                EnumEntry::new("BLUE", "3"),
                EnumEntry::new("RED", "1"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let parsed = parse_str("RED = 1\n\n# comment\nA = B = C\nGREEN = 2");
        assert_eq!(
            parsed.into_entries(),
            vec![EnumEntry::new("RED", "1"), EnumEntry::new("GREEN", "2")]
        );
    }

    #[test]
    fn test_parse_strips_crlf() {
        let parsed = parse_str("RED = 1\r\nGREEN = 2\r\n");
        assert_eq!(
            parsed.into_entries(),
            vec![EnumEntry::new("RED", "1"), EnumEntry::new("GREEN", "2")]
        );
    }

    #[test]
    fn test_parse_no_matching_lines_is_empty() {
        let parsed = parse_str("just text\nRED=1\n");
        assert!(parsed.is_empty());
        assert!(parsed.read_error.is_none());
    }

    #[test]
    fn test_invalid_utf8_does_not_stop_parsing() {
        let bytes: &[u8] = b"RED = 1\nCAF\xc9 = 2\nBLUE = 3\n";
        let parsed = parse_reader(bytes);
        assert!(parsed.read_error.is_none());
        assert_eq!(
            parsed.into_entries(),
            vec![
                EnumEntry::new("RED", "1"),
                EnumEntry::new("CAF\u{FFFD}", "2"),
                EnumEntry::new("BLUE", "3"),
            ]
        );
    }

    #[test]
    fn test_trailing_cr_on_last_line_is_stripped() {
        let parsed = parse_str("RED = 1\r\nGREEN = 2\r");
        assert_eq!(
            parsed.into_entries(),
            vec![EnumEntry::new("RED", "1"), EnumEntry::new("GREEN", "2")]
        );
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device lost"))
        }
    }

    #[test]
    fn test_read_error_keeps_partial_entries() {
        let reader = BufReader::new((&b"RED = 1\nGREEN = 2\n"[..]).chain(BrokenReader));
        let parsed = parse_reader(reader);
        assert!(matches!(parsed.read_error, Some(ParseError::InputRead(_))));
        assert_eq!(
            parsed.entries,
            vec![EnumEntry::new("RED", "1"), EnumEntry::new("GREEN", "2")]
        );
        assert_eq!(
            parsed.read_error.unwrap().to_string(),
            "Error reading file: device lost"
        );
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enum.txt");
        std::fs::write(&path, "RED = 1\nGREEN = 2\n").unwrap();

        let parsed = parse_file(&path).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ParseError::InputOpen { .. }));
        assert!(err.to_string().starts_with("Error opening file:"));
    }

    #[test]
    fn test_parse_valid_config() {
        let json = r#"{ "package": "Color", "langs": "swift" }"#;
        let config = parse_config(json, "enumgen.json").unwrap();
        assert_eq!(config.package, "Color");
        assert_eq!(config.langs, "swift");
    }

    #[test]
    fn test_parse_invalid_config() {
        let err = parse_config("{ invalid json }", "enumgen.json").unwrap_err();
        assert_eq!(err.code, E_PARSE_ERROR);
        assert_eq!(err.origin, "enumgen.json");
        assert!(err.message.contains("JSON parse error"));
    }
}
