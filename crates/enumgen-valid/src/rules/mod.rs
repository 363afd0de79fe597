pub mod integer_values;
pub mod language_tokens;
