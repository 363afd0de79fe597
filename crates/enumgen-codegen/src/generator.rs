use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use enumgen_spec::{EnumEntry, GenerationConfig, Language, LanguageSelection};

use crate::emitters;
use crate::error::CodegenError;
use crate::fs::{clean_path, ensure_dir};
use crate::traits::LanguageEmitter;

/// One rendered source file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub language: Language,
    /// Path relative to the output root, e.g. `swift/Color.swift`
    pub relative_path: PathBuf,
    pub content: String,
}

/// Renders and writes the enum file for a single language.
pub struct EnumGenerator {
    emitter: Box<dyn LanguageEmitter>,
}

impl std::fmt::Debug for EnumGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumGenerator")
            .field("language", &self.emitter.language())
            .finish()
    }
}

impl EnumGenerator {
    pub fn new(language: Language) -> Self {
        Self {
            emitter: emitters::create_emitter(language),
        }
    }

    pub fn language(&self) -> Language {
        self.emitter.language()
    }

    /// Render the file in memory. Same input, same bytes.
    pub fn render(&self, entries: &[EnumEntry], package: &str) -> GeneratedFile {
        let language = self.language();
        let relative_path = Path::new(language.dir_name())
            .join(format!("{package}.{}", self.emitter.file_extension()));

        GeneratedFile {
            language,
            relative_path,
            content: self.emitter.emit(entries, package),
        }
    }

    /// Render and write the file under `output_root`, replacing any previous
    /// file. Returns the written path, lexically cleaned.
    ///
    /// A file that fails mid-write is left as is.
    pub fn write(
        &self,
        entries: &[EnumEntry],
        output_root: &Path,
        package: &str,
    ) -> Result<PathBuf, CodegenError> {
        let language = self.language();
        let generated = self.render(entries, package);

        ensure_dir(&output_root.join(language.dir_name()))?;

        let path = clean_path(&output_root.join(&generated.relative_path));
        let mut file = File::create(&path).map_err(|source| CodegenError::OutputCreate {
            language,
            path: path.clone(),
            source,
        })?;

        file.write_all(generated.content.as_bytes())
            .map_err(|source| CodegenError::OutputWrite {
                language,
                path: path.clone(),
                source,
            })?;

        tracing::debug!(
            %language,
            path = %path.display(),
            bytes = generated.content.len(),
            "wrote enum file"
        );
        Ok(path)
    }
}

/// Result of one renderer run.
#[derive(Debug)]
pub struct RenderOutcome {
    pub language: Language,
    /// Written path, or the reason this renderer stopped
    pub result: Result<PathBuf, CodegenError>,
}

/// Per-language outcomes of a generation run, in the order they ran.
#[derive(Debug, Default)]
pub struct GenerationReport {
    outcomes: Vec<RenderOutcome>,
}

impl GenerationReport {
    pub fn push(&mut self, outcome: RenderOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[RenderOutcome] {
        &self.outcomes
    }

    /// Paths of every file that was written.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
    }

    /// Renderers that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (Language, &CodegenError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.language, e)))
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }
}

/// Run every selected renderer over `entries`.
///
/// The output root is prepared first; failing that, nothing runs. After
/// that each renderer fails on its own without stopping the others.
pub fn generate_all(
    entries: &[EnumEntry],
    config: &GenerationConfig,
    selection: &LanguageSelection,
) -> Result<GenerationReport, CodegenError> {
    ensure_dir(&config.output)?;

    let mut report = GenerationReport::default();
    for language in selection.languages() {
        let result = EnumGenerator::new(language).write(entries, &config.output, &config.package);
        if let Err(e) = &result {
            tracing::warn!(%language, error = %e, "renderer failed");
        }
        report.push(RenderOutcome { language, result });
    }

    Ok(report)
}
