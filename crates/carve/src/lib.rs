//! Carve - locate a named function in a source file and print its
//! exact extent.
//!
//! The pipeline per invocation:
//!
//! file text → symbol locator → {name: [positions]} →
//! (direct name match | interactive selector) → span resolver →
//! line ranges → formatted blocks
//!
//! Brace-delimited languages are indexed by an external `ctags`
//! subprocess and spanned by textual brace counting; Python is indexed
//! and spanned through its tree-sitter grammar.
//!
//! # Example
//!
//! ```ignore
//! use carve::locate::{GrammarProvider, SymbolIndexProvider};
//! use std::path::Path;
//!
//! let index = GrammarProvider.index(Path::new("app.py"), source)?;
//! for name in index.names() {
//!     println!("{name}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod locate;
pub mod output;
pub mod selector;
pub mod span;
