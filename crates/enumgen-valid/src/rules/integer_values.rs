use enumgen_spec::types::error::E_INVALID_VALUE;
use enumgen_spec::{EnumEntry, Issue, ValidationReport};

/// Check that every value is an optionally signed decimal integer that fits in `i64`.
///
/// Every target declares its enum over a plain integer type, so anything
/// else produces source that does not compile.
pub fn check(entries: &[EnumEntry], file: &str, report: &mut ValidationReport) {
    for entry in entries {
        if entry.value.parse::<i64>().is_err() {
            report.push(
                Issue::error(
                    E_INVALID_VALUE,
                    format!(
                        "Value '{}' of '{}' is not a decimal integer",
                        entry.value, entry.name
                    ),
                    file,
                    &entry.name,
                )
                .with_hint("Use a plain decimal value such as 42 or -1"),
            );
        }
    }
}
