//! Error types for extraction.
//!
//! Fatal errors (environment, input, parse) abort the invocation;
//! `NameNotFound`, `UnbalancedBraces` and `BadNodeSpan` are scoped to a
//! single candidate and reported inline while the batch continues.
//! User cancellation is not an error and never appears here - the
//! selector returns `None` for it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// External symbol indexer is not installed.
    #[error("{tool} not found; install universal-ctags to index brace-delimited sources")]
    IndexerMissing { tool: String },

    /// External symbol indexer ran but failed.
    #[error("ctags failed on {path}: {message}")]
    IndexerFailed { path: String, message: String },

    /// Interactive selection requested without an attached terminal.
    #[error("no interactive terminal; pass one or more function names")]
    NoTerminal,

    /// File extension maps to no supported language.
    #[error("unsupported file type: {path}")]
    Unsupported { path: String },

    #[error("cannot read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Source failed to parse under its grammar.
    #[error("{path}: {message}")]
    Parse { path: String, message: String },

    /// Requested name is absent from the candidate set.
    #[error("function '{name}' not found in {path}")]
    NameNotFound { name: String, path: String },

    /// The locator produced no candidates at all.
    #[error("no functions found in {path}")]
    NoFunctions { path: String },

    /// Brace scan hit end of file before the body closed.
    #[error("unbalanced braces in '{name}' starting at line {line}")]
    UnbalancedBraces { name: String, line: usize },

    /// Grammar reported a degenerate extent for the node.
    #[error("grammar reported an invalid span for '{name}' at line {line}")]
    BadNodeSpan { name: String, line: usize },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl ExtractError {
    /// Whether this error aborts the whole invocation, as opposed to
    /// one reported inline for a single candidate.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::NameNotFound { .. } | Self::UnbalancedBraces { .. } | Self::BadNodeSpan { .. }
        )
    }
}
