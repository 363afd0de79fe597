use enumgen_spec::{EnumEntry, Language};

use crate::context::EmitContext;
use crate::traits::LanguageEmitter;

/// JavaScript emitter: a frozen object exported under the package name.
pub struct JavaScriptEmitter;

impl LanguageEmitter for JavaScriptEmitter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn emit_open(&self, package: &str, ctx: &mut EmitContext) {
        ctx.line(format!("export const {package} = Object.freeze({{"));
        ctx.push_indent();
    }

    fn emit_entry(&self, entry: &EnumEntry, ctx: &mut EmitContext) {
        ctx.line(format!("{}: {},", entry.name, entry.value));
    }

    fn emit_close(&self, ctx: &mut EmitContext) {
        ctx.pop_indent();
        ctx.line("});");
    }
}
