use enumgen_spec::{EnumEntry, GenerationConfig, LanguageSelection, ValidationReport};

use crate::rules;

/// Validate parsed entries and the language selection.
/// Runs every enabled rule and returns a consolidated report.
///
/// Value checking only runs when `config.check_values` is set; without it
/// the report can hold warnings but never errors.
pub fn validate(
    entries: &[EnumEntry],
    selection: &LanguageSelection,
    config: &GenerationConfig,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    rules::language_tokens::check(selection, &mut report);

    if config.check_values {
        let file = config.input.to_string_lossy();
        rules::integer_values::check(entries, &file, &mut report);
    }

    tracing::debug!(
        entries = entries.len(),
        issues = report.issues().len(),
        blocking = report.has_errors(),
        "validation finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_spec::Severity;

    fn entries() -> Vec<EnumEntry> {
        vec![EnumEntry::new("RED", "1"), EnumEntry::new("GREEN", "two")]
    }

    #[test]
    fn test_values_unchecked_by_default() {
        let config = GenerationConfig::default();
        let report = validate(&entries(), &config.selection(), &config);
        assert!(report.issues().is_empty());
    }

    #[test]
    fn test_check_values_reports_errors() {
        let config = GenerationConfig {
            check_values: true,
            ..Default::default()
        };
        let report = validate(&entries(), &config.selection(), &config);
        assert!(report.has_errors());
        assert_eq!(report.count(Severity::Error), 1);
        assert_eq!(report.issues()[0].subject, "GREEN");
        assert_eq!(report.issues()[0].origin, "./enum.txt");
    }

    #[test]
    fn test_unknown_tokens_are_warnings_only() {
        let config = GenerationConfig {
            langs: "swift,rust".to_string(),
            ..Default::default()
        };
        let report = validate(&entries(), &config.selection(), &config);
        assert!(!report.has_errors());
        assert_eq!(report.count(Severity::Warning), 1);
    }
}
