//! Language support for carve.
//!
//! This crate provides the `Language` trait and implementations for the
//! languages carve can extract functions from. Each language struct IS
//! its support implementation.
//!
//! Two span strategies exist:
//!
//! - `BraceCount`: function bodies are bounded by `{`/`}`, so the span
//!   can be found by textual balance counting from a known start line.
//!   Start lines come from an external symbol indexer (ctags).
//! - `GrammarNode`: function extent comes from the language grammar
//!   itself (tree-sitter), including any leading decorators.
//!
//! # Example
//!
//! ```ignore
//! use carve_languages::{support_for_path, SpanStrategy};
//! use std::path::Path;
//!
//! if let Some(support) = support_for_path(Path::new("foo.py")) {
//!     assert_eq!(support.span_strategy(), SpanStrategy::GrammarNode);
//! }
//! ```

mod registry;
mod traits;

// Language implementations
pub mod c;
pub mod cpp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;

pub use registry::{all_languages, support_for_path};
pub use traits::{Language, SpanStrategy};

pub use python::{FnDecl, GrammarError, Python, function_decls};
