use enumgen_spec::{EnumEntry, Language};

use super::ELEMENT_TYPE;
use crate::context::EmitContext;
use crate::traits::LanguageEmitter;

/// Kotlin emitter: `enum class Element(val value: Int)` inside `package <pkg>`.
pub struct KotlinEmitter;

impl LanguageEmitter for KotlinEmitter {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn emit_header(&self, package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("package {package}"));
        ctx.blank_line();
    }

    fn emit_open(&self, _package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("enum class {ELEMENT_TYPE}(val value: Int) {{"));
        ctx.push_indent();
    }

    fn emit_entry(&self, entry: &EnumEntry, ctx: &mut EmitContext) {
        ctx.line(format!("{}({}),", entry.name, entry.value));
    }

    fn emit_close(&self, ctx: &mut EmitContext) {
        ctx.pop_indent();
        ctx.line("}");
    }
}
