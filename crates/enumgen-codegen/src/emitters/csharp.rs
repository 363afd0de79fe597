use enumgen_spec::{EnumEntry, Language};

use super::ELEMENT_TYPE;
use crate::context::EmitContext;
use crate::traits::LanguageEmitter;

/// C# emitter: `public enum Element` inside `namespace <pkg>`.
pub struct CSharpEmitter;

impl LanguageEmitter for CSharpEmitter {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn emit_header(&self, package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("namespace {package} {{"));
        ctx.push_indent();
    }

    fn emit_open(&self, _package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("public enum {ELEMENT_TYPE} {{"));
        ctx.push_indent();
    }

    fn emit_entry(&self, entry: &EnumEntry, ctx: &mut EmitContext) {
        ctx.line(format!("{} = {},", entry.name, entry.value));
    }

    fn emit_close(&self, ctx: &mut EmitContext) {
        // enum, then namespace
        ctx.pop_indent();
        ctx.line("}");
        ctx.pop_indent();
        ctx.line("}");
    }
}
