//! JavaScript language support.

use crate::{Language, SpanStrategy};

pub struct JavaScript;

impl Language for JavaScript {
    fn name(&self) -> &'static str {
        "JavaScript"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["js", "mjs", "cjs", "jsx"]
    }
    fn span_strategy(&self) -> SpanStrategy {
        SpanStrategy::BraceCount
    }
    fn ctags_kind_args(&self) -> &'static [&'static str] {
        &["--javascript-kinds=fm"]
    }
    fn ctags_function_kinds(&self) -> &'static [&'static str] {
        &["function", "method"]
    }
}
