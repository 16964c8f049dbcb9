//! C language support.

use crate::{Language, SpanStrategy};

pub struct C;

impl Language for C {
    fn name(&self) -> &'static str {
        "C"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["c", "h"]
    }
    fn span_strategy(&self) -> SpanStrategy {
        SpanStrategy::BraceCount
    }
    fn ctags_kind_args(&self) -> &'static [&'static str] {
        &["--c-kinds=f"]
    }
}
