//! Function span resolution.
//!
//! A span is the inclusive 1-indexed line range of a function's full
//! textual body. Two resolvers exist, one per `SpanStrategy`; both
//! return a valid non-empty span or nothing - never an empty result.

use carve_languages::{FnDecl, SpanStrategy};

/// Inclusive line range of a function body, plus the strategy that
/// computed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
    pub strategy: SpanStrategy,
}

impl Span {
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Resolve a span by brace counting forward from `start_line`.
///
/// Works on raw text and tolerates invalid syntax elsewhere in the
/// file. The scan is "inside a body" once the counter has gone
/// positive; the span ends on the first line where it returns to zero
/// after that. Returns None if `start_line` is out of range or the
/// file ends before the braces balance.
///
/// Known limitation: delimiter characters are counted anywhere on the
/// line, including inside string literals and comments, so lines like
/// `"{"` or `// }` can miscount.
pub fn resolve_braced(lines: &[&str], start_line: usize) -> Option<Span> {
    if start_line == 0 || start_line > lines.len() {
        return None;
    }

    let mut depth: i64 = 0;
    let mut in_body = false;
    for (idx, line) in lines.iter().enumerate().skip(start_line - 1) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    in_body = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if in_body && depth == 0 {
            return Some(Span {
                start_line,
                end_line: idx + 1,
                strategy: SpanStrategy::BraceCount,
            });
        }
    }
    None
}

/// Resolve a span from a grammar node.
///
/// The end boundary comes from the grammar; the start is lowered to
/// the earliest decorator line when decorators are attached. A node
/// whose reported end precedes its declaration is rejected rather than
/// guessed at.
pub fn resolve_decl(decl: &FnDecl) -> Option<Span> {
    if decl.end_line < decl.decl_line {
        return None;
    }
    let start_line = decl
        .decorator_lines
        .iter()
        .copied()
        .min()
        .map_or(decl.decl_line, |d| d.min(decl.decl_line));
    Some(Span {
        start_line,
        end_line: decl.end_line,
        strategy: SpanStrategy::GrammarNode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_function() {
        let lines = vec!["int add(int a,int b) {", "return a+b;", "}"];
        let span = resolve_braced(&lines, 1).unwrap();
        assert_eq!((span.start_line, span.end_line), (1, 3));
        assert_eq!(span.line_count(), 3);
    }

    #[test]
    fn test_signature_before_open_brace() {
        let lines = vec![
            "static int",
            "compute(int x)",
            "{",
            "    return x * 2;",
            "}",
            "int other() { return 0; }",
        ];
        let span = resolve_braced(&lines, 1).unwrap();
        assert_eq!((span.start_line, span.end_line), (1, 5));
    }

    #[test]
    fn test_single_line_body() {
        let lines = vec!["int zero() { return 0; }", "int one() { return 1; }"];
        let span = resolve_braced(&lines, 2).unwrap();
        assert_eq!((span.start_line, span.end_line), (2, 2));
    }

    #[test]
    fn test_nested_braces() {
        let lines = vec![
            "void f() {",
            "  if (x) {",
            "    g();",
            "  }",
            "}",
            "void h() {}",
        ];
        let span = resolve_braced(&lines, 1).unwrap();
        assert_eq!((span.start_line, span.end_line), (1, 5));
    }

    #[test]
    fn test_unbalanced_fails() {
        let lines = vec!["void f() {", "  g();"];
        assert!(resolve_braced(&lines, 1).is_none());
    }

    #[test]
    fn test_start_out_of_range() {
        let lines = vec!["void f() {}"];
        assert!(resolve_braced(&lines, 0).is_none());
        assert!(resolve_braced(&lines, 2).is_none());
    }

    #[test]
    fn test_perturbation_below_end_does_not_change_span() {
        let mut lines = vec!["void f() {", "  g();", "}", "void h() {", "}"];
        let before = resolve_braced(&lines, 1).unwrap();
        lines[3] = "int completely_different() {{{";
        lines[4] = "}}}";
        let after = resolve_braced(&lines, 1).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_decl_span_without_decorators() {
        let decl = FnDecl {
            name: "f".into(),
            decl_line: 10,
            end_line: 14,
            decorator_lines: vec![],
        };
        let span = resolve_decl(&decl).unwrap();
        assert_eq!((span.start_line, span.end_line), (10, 14));
        assert_eq!(span.strategy, SpanStrategy::GrammarNode);
    }

    #[test]
    fn test_decl_span_includes_earliest_decorator() {
        let decl = FnDecl {
            name: "f".into(),
            decl_line: 12,
            end_line: 20,
            decorator_lines: vec![10, 11],
        };
        let span = resolve_decl(&decl).unwrap();
        assert_eq!((span.start_line, span.end_line), (10, 20));
    }

    #[test]
    fn test_degenerate_node_span_rejected() {
        let decl = FnDecl {
            name: "f".into(),
            decl_line: 5,
            end_line: 3,
            decorator_lines: vec![],
        };
        assert!(resolve_decl(&decl).is_none());
    }
}
