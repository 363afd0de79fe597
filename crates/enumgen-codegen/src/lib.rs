pub mod context;
pub mod error;
pub mod fs;
pub mod generator;
pub mod traits;

// Language emitters
pub mod emitters;

// Re-exports
pub use context::EmitContext;
pub use error::CodegenError;
pub use fs::{clean_path, ensure_dir};
pub use generator::{generate_all, EnumGenerator, GeneratedFile, GenerationReport, RenderOutcome};
pub use traits::LanguageEmitter;
