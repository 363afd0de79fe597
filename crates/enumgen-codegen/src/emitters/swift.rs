use enumgen_spec::{EnumEntry, Language};

use crate::context::EmitContext;
use crate::traits::LanguageEmitter;

/// Swift emitter: `public enum <pkg>: Int`.
pub struct SwiftEmitter;

impl LanguageEmitter for SwiftEmitter {
    fn language(&self) -> Language {
        Language::Swift
    }

    fn emit_open(&self, package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("public enum {package}: Int {{"));
        ctx.push_indent();
    }

    fn emit_entry(&self, entry: &EnumEntry, ctx: &mut EmitContext) {
        ctx.line(format!("case {} = {}", entry.name, entry.value));
    }

    fn emit_close(&self, ctx: &mut EmitContext) {
        ctx.pop_indent();
        ctx.line("}");
    }
}
