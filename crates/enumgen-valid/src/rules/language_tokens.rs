use enumgen_spec::types::error::W_UNKNOWN_LANGUAGE;
use enumgen_spec::{Issue, Language, LanguageSelection, ValidationReport};

/// Warn about `--langs` tokens that select no language.
pub fn check(selection: &LanguageSelection, report: &mut ValidationReport) {
    let known = Language::ALL
        .iter()
        .map(|lang| lang.token())
        .collect::<Vec<_>>()
        .join(", ");

    for token in selection.unknown_tokens() {
        report.push(
            Issue::warning(
                W_UNKNOWN_LANGUAGE,
                format!("Unrecognized language '{token}' is ignored"),
                "--langs",
                token,
            )
            .with_hint(format!("Recognized languages: {known}")),
        );
    }
}
