//! Go language support.

use crate::{Language, SpanStrategy};

pub struct Go;

impl Language for Go {
    fn name(&self) -> &'static str {
        "Go"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["go"]
    }
    fn span_strategy(&self) -> SpanStrategy {
        SpanStrategy::BraceCount
    }
    fn ctags_kind_args(&self) -> &'static [&'static str] {
        &["--go-kinds=f"]
    }
    fn ctags_function_kinds(&self) -> &'static [&'static str] {
        // universal-ctags prints "func" in -x output; exuberant forks
        // have used "function"
        &["func", "function"]
    }
}
