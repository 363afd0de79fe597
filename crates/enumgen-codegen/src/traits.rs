use enumgen_spec::{EnumEntry, Language};

use crate::context::EmitContext;

/// Language-specific enum emitter.
///
/// Each target language implements this trait to turn an entry list into
/// the language's enum declaration. Names and values are spliced in
/// verbatim; nothing is quoted or escaped.
pub trait LanguageEmitter {
    /// Which language this emitter targets.
    fn language(&self) -> Language;

    /// Package, namespace, or module declaration. Default: none.
    fn emit_header(&self, _package: &str, _ctx: &mut EmitContext) {}

    /// Opening of the enum construct.
    fn emit_open(&self, package: &str, ctx: &mut EmitContext);

    /// One enum member.
    fn emit_entry(&self, entry: &EnumEntry, ctx: &mut EmitContext);

    /// Closing of every construct opened by `emit_header` and `emit_open`.
    fn emit_close(&self, ctx: &mut EmitContext);

    /// File extension for this language (e.g., "kt", "go").
    fn file_extension(&self) -> &'static str {
        self.language().file_extension()
    }

    /// Render the whole file.
    fn emit(&self, entries: &[EnumEntry], package: &str) -> String {
        let mut ctx = EmitContext::new();
        self.emit_header(package, &mut ctx);
        self.emit_open(package, &mut ctx);
        for entry in entries {
            self.emit_entry(entry, &mut ctx);
        }
        self.emit_close(&mut ctx);
        ctx.finish()
    }
}
