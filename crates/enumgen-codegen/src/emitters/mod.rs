pub mod csharp;
pub mod go_lang;
pub mod javascript;
pub mod kotlin;
pub mod swift;

use enumgen_spec::Language;

use crate::traits::LanguageEmitter;

/// Fixed type name used by the Kotlin, C#, and Go emitters. Swift and
/// JavaScript name the type after the package instead.
pub const ELEMENT_TYPE: &str = "Element";

/// Create the appropriate language emitter for the given language.
pub fn create_emitter(language: Language) -> Box<dyn LanguageEmitter> {
    match language {
        Language::Kotlin => Box::new(kotlin::KotlinEmitter),
        Language::JavaScript => Box::new(javascript::JavaScriptEmitter),
        Language::Swift => Box::new(swift::SwiftEmitter),
        Language::CSharp => Box::new(csharp::CSharpEmitter),
        Language::Go => Box::new(go_lang::GoEmitter),
    }
}
