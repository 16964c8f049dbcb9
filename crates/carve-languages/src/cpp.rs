//! C++ language support.

use crate::{Language, SpanStrategy};

pub struct Cpp;

impl Language for Cpp {
    fn name(&self) -> &'static str {
        "C++"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["cpp", "cc", "cxx", "hpp", "hh", "hxx"]
    }
    fn span_strategy(&self) -> SpanStrategy {
        SpanStrategy::BraceCount
    }
    fn ctags_kind_args(&self) -> &'static [&'static str] {
        &["--c++-kinds=f"]
    }
}
