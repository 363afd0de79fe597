use std::path::{Component, Path, PathBuf};

use crate::error::CodegenError;

/// Create `path` and any missing ancestors. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<(), CodegenError> {
    std::fs::create_dir_all(path).map_err(|source| CodegenError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })
}

/// Lexically clean a path: drop `.` segments, fold `name/..` pairs, and
/// drop `..` directly under the root. The filesystem is not consulted.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.into_iter().collect()
}
