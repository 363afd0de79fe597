use std::io;
use std::path::PathBuf;

use enumgen_spec::Language;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("failed to create directory: {}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating {} file: {source}", .language.display_name())]
    OutputCreate {
        language: Language,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing {} file {}: {source}", .language.display_name(), .path.display())]
    OutputWrite {
        language: Language,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
