/// Spaces per indentation level in every generated file.
pub const INDENT_WIDTH: usize = 4;

/// Output buffer for one generated file, with indentation tracking.
#[derive(Debug, Clone, Default)]
pub struct EmitContext {
    /// Current indentation level
    indent_level: usize,
    /// Text emitted so far
    buf: String,
}

impl EmitContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current indentation string.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_level * INDENT_WIDTH)
    }

    /// Increase indentation by one level.
    pub fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation by one level.
    pub fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Append one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let indent = self.indent();
        self.buf.push_str(&indent);
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Append an empty line (no indentation).
    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// Consume the context and return the emitted text.
    pub fn finish(self) -> String {
        self.buf
    }
}
