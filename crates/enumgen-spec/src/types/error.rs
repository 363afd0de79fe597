// ── Issue codes ──

pub const E_PARSE_ERROR: &str = "E_PARSE_ERROR";
pub const E_INVALID_VALUE: &str = "E_INVALID_VALUE";
pub const W_UNKNOWN_LANGUAGE: &str = "W_UNKNOWN_LANGUAGE";

/// How serious an issue is. Only errors block generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in the config, the input entries, or the language list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Stable machine-readable code
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    /// Where it came from: the input or config file, or a flag such as `--langs`
    pub origin: String,
    /// What it is about: an entry name, a language token, a line:col
    pub subject: String,
    pub hint: Option<String>,
}

impl Issue {
    pub fn error(code: &'static str, message: impl Into<String>, origin: &str, subject: &str) -> Self {
        Self::new(Severity::Error, code, message.into(), origin, subject)
    }

    pub fn warning(code: &'static str, message: impl Into<String>, origin: &str, subject: &str) -> Self {
        Self::new(Severity::Warning, code, message.into(), origin, subject)
    }

    fn new(severity: Severity, code: &'static str, message: String, origin: &str, subject: &str) -> Self {
        Self {
            code,
            severity,
            message,
            origin: origin.to_string(),
            subject: subject.to_string(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Issues collected by the validation rules, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Any error-severity issue. Warnings alone never block generation.
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}
