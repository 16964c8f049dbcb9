//! Core language support trait.

/// How a function's line span is computed for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStrategy {
    /// Count `{`/`}` on raw text forward from the declaration line.
    /// Tolerant of invalid syntax elsewhere in the file.
    BraceCount,
    /// Use the grammar node's own extent (tree-sitter), including
    /// leading decorators.
    GrammarNode,
}

/// Per-language behavior needed to locate and span functions.
pub trait Language: Send + Sync {
    /// Display name for this language (e.g., "Python", "C++")
    fn name(&self) -> &'static str;

    /// File extensions this language handles (e.g., ["py", "pyi", "pyw"])
    fn extensions(&self) -> &'static [&'static str];

    /// How function spans are resolved for this language.
    fn span_strategy(&self) -> SpanStrategy;

    /// Extra `ctags -x` arguments restricting output to function
    /// definitions. Only meaningful for `BraceCount` languages.
    fn ctags_kind_args(&self) -> &'static [&'static str] {
        &[]
    }

    /// Values of the kind column in `ctags -x` output accepted as
    /// function definitions for this language.
    fn ctags_function_kinds(&self) -> &'static [&'static str] {
        &["function"]
    }
}
