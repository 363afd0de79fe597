use std::path::Path;

use crate::parser;
use crate::types::config::GenerationConfig;
use crate::types::error::Issue;

/// Load a JSON config file. Missing fields take their defaults.
#[allow(clippy::result_large_err)]
pub fn load_config(path: &Path) -> Result<GenerationConfig, LoadError> {
    let file = path.to_string_lossy().into_owned();

    if !path.is_file() {
        return Err(LoadError::ConfigNotFound(file));
    }

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::IoError(file.clone(), e))?;

    let config = parser::parse_config(&content, &file).map_err(LoadError::ConfigParseError)?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Errors that prevent the config file from loading
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("failed to parse {}: {}", .0.origin, .0.message)]
    ConfigParseError(Issue),

    #[error("I/O error reading {0}: {1}")]
    IoError(String, std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("enumgen.json");
        std::fs::write(
            &path,
            r#"{
                "input": "colors.txt",
                "package": "Color",
                "output": "generated",
                "langs": "swift,golang",
                "strict": true
            }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.input, PathBuf::from("colors.txt"));
        assert_eq!(config.output, PathBuf::from("generated"));
        assert_eq!(config.package, "Color");
        assert!(config.strict);
        assert!(!config.check_values);
    }

    #[test]
    fn test_load_missing_config() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::ConfigNotFound(_)));
    }

    #[test]
    fn test_load_invalid_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("enumgen.json");
        std::fs::write(&path, "not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, LoadError::ConfigParseError(_)));
    }
}
