//! Symbol location: mapping function names to candidate start lines.
//!
//! Two providers implement `SymbolIndexProvider`: `CtagsProvider`
//! shells out to an external structural indexer for brace-delimited
//! languages, `GrammarProvider` walks the tree-sitter AST for Python.
//! The orchestrator depends only on the trait, so tests can substitute
//! a canned index.

use crate::error::ExtractError;
use carve_languages::{FnDecl, Language, function_decls};
use std::path::{Path, PathBuf};
use std::process::Command;

/// One (name, position) pair produced by a locator. Multiple
/// candidates may share a name (overloads, redefinitions).
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    /// Declaration line, 1-indexed. Decorators are not included here;
    /// the span resolver widens the start from `decl`.
    pub line: usize,
    /// Grammar node details, present only for grammar-walk candidates.
    pub decl: Option<FnDecl>,
}

/// Candidates in discovery order, queryable by name.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    entries: Vec<Candidate>,
}

impl SymbolIndex {
    pub fn from_entries(entries: Vec<Candidate>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All candidates for `name`, in discovery order.
    pub fn candidates(&self, name: &str) -> Vec<&Candidate> {
        self.entries.iter().filter(|c| c.name == name).collect()
    }

    /// Deduplicated names in lexicographic order, for display.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Maps a file to its function-definition candidates.
pub trait SymbolIndexProvider {
    fn index(&self, path: &Path, source: &str) -> Result<SymbolIndex, ExtractError>;
}

/// Locates functions with an external `ctags -x` subprocess.
pub struct CtagsProvider {
    binary: PathBuf,
    language: &'static dyn Language,
}

impl CtagsProvider {
    /// Resolve the ctags binary on PATH. Absence is fatal for the
    /// invocation: brace-delimited files cannot be indexed without it.
    pub fn locate(
        language: &'static dyn Language,
        bin_override: Option<&str>,
    ) -> Result<Self, ExtractError> {
        let tool = bin_override.unwrap_or("ctags");
        let binary = which::which(tool).map_err(|_| ExtractError::IndexerMissing {
            tool: tool.to_string(),
        })?;
        Ok(Self { binary, language })
    }
}

impl SymbolIndexProvider for CtagsProvider {
    fn index(&self, path: &Path, source: &str) -> Result<SymbolIndex, ExtractError> {
        let output = Command::new(&self.binary)
            .arg("-x")
            .args(self.language.ctags_kind_args())
            .arg(path)
            .output()
            .map_err(|e| ExtractError::IndexerFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ExtractError::IndexerFailed {
                path: path.display().to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line_count = source.lines().count();
        Ok(SymbolIndex::from_entries(parse_tags_output(
            &stdout,
            self.language.ctags_function_kinds(),
            line_count,
        )))
    }
}

/// Parse `ctags -x` rows: `<name> <kind> <line> <file> [source text]`.
/// Malformed rows and positions outside the file are skipped silently
/// rather than failing the whole scan.
fn parse_tags_output(output: &str, kinds: &[&str], line_count: usize) -> Vec<Candidate> {
    let mut entries = Vec::new();
    for row in output.lines() {
        let mut parts = row.split_whitespace();
        let (Some(name), Some(kind), Some(line_str)) = (parts.next(), parts.next(), parts.next())
        else {
            continue;
        };
        if parts.next().is_none() {
            continue; // missing file column
        }
        if !kinds.contains(&kind) {
            continue;
        }
        let Ok(line) = line_str.parse::<usize>() else {
            continue;
        };
        if line == 0 || line > line_count {
            continue;
        }
        entries.push(Candidate {
            name: name.to_string(),
            line,
            decl: None,
        });
    }
    entries
}

/// Locates functions by walking the Python grammar tree.
pub struct GrammarProvider;

impl SymbolIndexProvider for GrammarProvider {
    fn index(&self, path: &Path, source: &str) -> Result<SymbolIndex, ExtractError> {
        let decls = function_decls(source).map_err(|e| ExtractError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let entries = decls
            .into_iter()
            .map(|decl| Candidate {
                name: decl.name.clone(),
                line: decl.decl_line,
                decl: Some(decl),
            })
            .collect();
        Ok(SymbolIndex::from_entries(entries))
    }
}
