//! Java language support.

use crate::{Language, SpanStrategy};

pub struct Java;

impl Language for Java {
    fn name(&self) -> &'static str {
        "Java"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }
    fn span_strategy(&self) -> SpanStrategy {
        SpanStrategy::BraceCount
    }
    fn ctags_kind_args(&self) -> &'static [&'static str] {
        &["--java-kinds=m"]
    }
    fn ctags_function_kinds(&self) -> &'static [&'static str] {
        &["method"]
    }
}
