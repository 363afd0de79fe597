use serde::{Deserialize, Serialize};

/// One member of the enum being generated.
///
/// Both sides are kept exactly as they appeared in the input line. The
/// value is raw text and is spliced unchanged into every target language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumEntry {
    /// Left-hand side of `NAME = VALUE`
    pub name: String,
    /// Right-hand side of `NAME = VALUE`
    pub value: String,
}

impl EnumEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
