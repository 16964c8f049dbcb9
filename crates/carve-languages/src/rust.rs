//! Rust language support.

use crate::{Language, SpanStrategy};

pub struct Rust;

impl Language for Rust {
    fn name(&self) -> &'static str {
        "Rust"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["rs"]
    }
    fn span_strategy(&self) -> SpanStrategy {
        SpanStrategy::BraceCount
    }
    fn ctags_kind_args(&self) -> &'static [&'static str] {
        &["--rust-kinds=fP"]
    }
    fn ctags_function_kinds(&self) -> &'static [&'static str] {
        &["function", "method"]
    }
}
