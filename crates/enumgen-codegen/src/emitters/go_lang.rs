use enumgen_spec::{EnumEntry, Language};

use super::ELEMENT_TYPE;
use crate::context::EmitContext;
use crate::traits::LanguageEmitter;

/// Go emitter: `type Element int` plus a grouped `const` block.
///
/// Lines are indented with four spaces rather than gofmt's tabs.
pub struct GoEmitter;

impl LanguageEmitter for GoEmitter {
    fn language(&self) -> Language {
        Language::Go
    }

    fn emit_header(&self, package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("package {package}"));
        ctx.blank_line();
    }

    fn emit_open(&self, _package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("type {ELEMENT_TYPE} int"));
        ctx.blank_line();
        ctx.line("const (");
        ctx.push_indent();
    }

    fn emit_entry(&self, entry: &EnumEntry, ctx: &mut EmitContext) {
        ctx.line(format!("{} {ELEMENT_TYPE} = {}", entry.name, entry.value));
    }

    fn emit_close(&self, ctx: &mut EmitContext) {
        ctx.pop_indent();
        ctx.line(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_go_const_block() {
        let entries = vec![
            EnumEntry::new("RED", "1"),
            EnumEntry::new("GREEN", "2"),
            EnumEntry::new("BLUE", "3"),
        ];
        let code = GoEmitter.emit(&entries, "Color");
        assert_eq!(
            code,
            "package Color\n\ntype Element int\n\nconst (\n    RED Element = 1\n    GREEN Element = 2\n    BLUE Element = 3\n)\n"
        );
    }
}
