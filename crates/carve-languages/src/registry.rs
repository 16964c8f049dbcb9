//! Language registry with extension-based lookup.

use crate::Language;
use std::path::Path;

/// Built-in languages in lookup order.
static LANGUAGES: &[&'static dyn Language] = &[
    &crate::python::Python,
    &crate::c::C,
    &crate::cpp::Cpp,
    &crate::java::Java,
    &crate::javascript::JavaScript,
    &crate::go::Go,
    &crate::rust::Rust,
];

/// All built-in languages.
pub fn all_languages() -> &'static [&'static dyn Language] {
    LANGUAGES
}

/// Find language support for a file path by extension.
pub fn support_for_path(path: &Path) -> Option<&'static dyn Language> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.extensions().contains(&ext.as_str()))
        .copied()
}
