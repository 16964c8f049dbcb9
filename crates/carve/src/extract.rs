//! Extraction orchestrator.
//!
//! Composes locator, selector and span resolver for one invocation:
//! build the symbol index, settle on the requested names (directly or
//! through the interactive selector), resolve each candidate's span,
//! and emit labeled blocks. Per-candidate failures are reported to
//! stderr and the batch continues; partial success is an expected
//! outcome, not an error.

use crate::config::CarveConfig;
use crate::error::ExtractError;
use crate::locate::{CtagsProvider, GrammarProvider, SymbolIndex, SymbolIndexProvider};
use crate::output::{Block, format_json};
use crate::selector;
use crate::span::{resolve_braced, resolve_decl};
use carve_languages::{SpanStrategy, support_for_path};
use std::io::IsTerminal;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Print candidate names instead of extracting.
    pub list: bool,
    /// Emit blocks as JSON instead of labeled text.
    pub json: bool,
}

/// Run one extraction. Returns the process exit code.
pub fn run(file: &Path, names: &[String], options: &ExtractOptions, config: &CarveConfig) -> i32 {
    match run_inner(file, names, options, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

fn run_inner(
    file: &Path,
    names: &[String],
    options: &ExtractOptions,
    config: &CarveConfig,
) -> Result<i32, ExtractError> {
    let language = support_for_path(file).ok_or_else(|| ExtractError::Unsupported {
        path: file.display().to_string(),
    })?;

    let content = std::fs::read_to_string(file).map_err(|source| ExtractError::FileRead {
        path: file.display().to_string(),
        source,
    })?;
    let lines: Vec<&str> = content.lines().collect();

    let provider: Box<dyn SymbolIndexProvider> = match language.span_strategy() {
        SpanStrategy::BraceCount => Box::new(CtagsProvider::locate(
            language,
            config.ctags.bin.as_deref(),
        )?),
        SpanStrategy::GrammarNode => Box::new(GrammarProvider),
    };

    let index = provider.index(file, &content)?;
    if index.is_empty() {
        return Err(ExtractError::NoFunctions {
            path: file.display().to_string(),
        });
    }

    if options.list {
        for name in index.names() {
            println!("{name}");
        }
        return Ok(0);
    }

    let requested: Vec<String> = if names.is_empty() {
        if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
            return Err(ExtractError::NoTerminal);
        }
        match selector::select(index.names(), config.ui.max_rows)? {
            Some(name) => vec![name],
            None => {
                println!("Selection cancelled.");
                return Ok(0);
            }
        }
    } else {
        names.to_vec()
    };

    let (blocks, item_errors) = extract_blocks(&lines, &index, &requested, file);
    for e in &item_errors {
        eprintln!("{e}");
    }

    if options.json {
        println!("{}", format_json(&blocks));
    } else {
        for block in &blocks {
            print!("{}", block.format_text());
        }
    }
    // Per-item failures are already reported; they do not fail the batch.
    Ok(0)
}

/// Resolve every candidate for every requested name.
///
/// Lookup misses and span failures land in the returned error list;
/// extraction continues with the remaining candidates.
pub fn extract_blocks(
    lines: &[&str],
    index: &SymbolIndex,
    names: &[String],
    file: &Path,
) -> (Vec<Block>, Vec<ExtractError>) {
    let mut blocks = Vec::new();
    let mut errors = Vec::new();

    for name in names {
        let candidates = index.candidates(name);
        if candidates.is_empty() {
            errors.push(ExtractError::NameNotFound {
                name: name.clone(),
                path: file.display().to_string(),
            });
            continue;
        }

        let ambiguous = candidates.len() > 1;
        for (k, candidate) in candidates.iter().enumerate() {
            let span = match &candidate.decl {
                Some(decl) => resolve_decl(decl),
                None => resolve_braced(lines, candidate.line),
            };
            match span {
                Some(span) => {
                    let match_index = ambiguous.then_some(k + 1);
                    blocks.push(Block::new(name, match_index, candidate.line, span, lines));
                }
                None => errors.push(match &candidate.decl {
                    Some(_) => ExtractError::BadNodeSpan {
                        name: name.clone(),
                        line: candidate.line,
                    },
                    None => ExtractError::UnbalancedBraces {
                        name: name.clone(),
                        line: candidate.line,
                    },
                }),
            }
        }
    }

    (blocks, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::Candidate;
    use carve_languages::FnDecl;

    fn index_of(entries: Vec<(&str, usize)>) -> SymbolIndex {
        SymbolIndex::from_entries(
            entries
                .into_iter()
                .map(|(name, line)| Candidate {
                    name: name.to_string(),
                    line,
                    decl: None,
                })
                .collect(),
        )
    }

    #[test]
    fn test_single_function_extraction() {
        let lines = vec!["int add(int a,int b) {", "return a+b;", "}"];
        let index = index_of(vec![("add", 1)]);
        let (blocks, errors) =
            extract_blocks(&lines, &index, &["add".to_string()], Path::new("file.c"));
        assert!(errors.is_empty());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].header(), "--- add (line 1) ---");
        assert_eq!(blocks[0].text, "int add(int a,int b) {\nreturn a+b;\n}");
    }

    #[test]
    fn test_overloads_get_match_indices_in_discovery_order() {
        let lines = vec![
            "void foo() {",     // 1
            "}",                // 2
            "",                 // 3
            "void foo(int) {",  // 4
            "  bar();",         // 5
            "}",                // 6
        ];
        let index = index_of(vec![("foo", 1), ("foo", 4)]);
        let (blocks, errors) =
            extract_blocks(&lines, &index, &["foo".to_string()], Path::new("file.c"));
        assert!(errors.is_empty());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header(), "--- foo (match 1 at line 1) ---");
        assert_eq!(blocks[1].header(), "--- foo (match 2 at line 4) ---");
        assert_eq!(blocks[0].end_line, 2);
        assert_eq!(blocks[1].end_line, 6);
    }

    #[test]
    fn test_missing_name_does_not_abort_batch() {
        let lines = vec!["void real() {", "}"];
        let index = index_of(vec![("real", 1)]);
        let (blocks, errors) = extract_blocks(
            &lines,
            &index,
            &["ghost".to_string(), "real".to_string()],
            Path::new("file.c"),
        );
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "real");
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ExtractError::NameNotFound { name, .. } if name == "ghost"));
        assert!(!errors[0].is_fatal());
    }

    #[test]
    fn test_unbalanced_candidate_reported_inline() {
        let lines = vec!["void broken() {", "  no_close();", "", "void fine() {", "}"];
        let index = index_of(vec![("broken", 1), ("fine", 4)]);
        let (blocks, errors) = extract_blocks(
            &lines,
            &index,
            &["broken".to_string(), "fine".to_string()],
            Path::new("file.c"),
        );
        // broken swallows fine's brace in its scan and still fails at
        // EOF, but fine resolves independently.
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "fine");
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ExtractError::UnbalancedBraces { line: 1, .. }));
    }

    #[test]
    fn test_grammar_candidate_spans_decorators() {
        let lines = vec!["@app.route('/')", "def handler():", "    return index()"];
        let index = SymbolIndex::from_entries(vec![Candidate {
            name: "handler".to_string(),
            line: 2,
            decl: Some(FnDecl {
                name: "handler".to_string(),
                decl_line: 2,
                end_line: 3,
                decorator_lines: vec![1],
            }),
        }]);
        let (blocks, errors) = extract_blocks(
            &lines,
            &index,
            &["handler".to_string()],
            Path::new("app.py"),
        );
        assert!(errors.is_empty());
        assert_eq!(blocks[0].start_line, 1);
        assert_eq!(blocks[0].end_line, 3);
        assert_eq!(blocks[0].header(), "--- handler (line 2) ---");
    }
}
