//! Output formatting for extracted blocks.
//!
//! Text mode prints one labeled block per resolved (name, position)
//! pair; JSON mode serializes the same data as an array.

use serde::Serialize;

use crate::span::Span;

/// Width of the rule separating blocks.
pub const RULE_WIDTH: usize = 40;

/// One resolved function occurrence, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    pub name: String,
    /// 1-based occurrence index, present only when the name has
    /// multiple candidates.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_index: Option<usize>,
    /// Candidate declaration line (the locator's position).
    pub line: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub text: String,
}

impl Block {
    pub fn new(name: &str, match_index: Option<usize>, line: usize, span: Span, lines: &[&str]) -> Self {
        let text = lines[span.start_line - 1..span.end_line].join("\n");
        Self {
            name: name.to_string(),
            match_index,
            line,
            start_line: span.start_line,
            end_line: span.end_line,
            text,
        }
    }

    /// Header labeling the block, with an occurrence index when the
    /// name is ambiguous.
    pub fn header(&self) -> String {
        match self.match_index {
            Some(k) => format!("--- {} (match {} at line {}) ---", self.name, k, self.line),
            None => format!("--- {} (line {}) ---", self.name, self.line),
        }
    }

    /// Full text rendering: header, verbatim lines, a blank line, the
    /// separator rule, and a trailing blank line.
    pub fn format_text(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n\n",
            self.header(),
            self.text,
            "-".repeat(RULE_WIDTH)
        )
    }
}

/// Render blocks as a JSON array.
pub fn format_json(blocks: &[Block]) -> String {
    serde_json::to_string_pretty(blocks).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carve_languages::SpanStrategy;

    fn span(start_line: usize, end_line: usize) -> Span {
        Span {
            start_line,
            end_line,
            strategy: SpanStrategy::BraceCount,
        }
    }

    #[test]
    fn test_single_match_block() {
        let lines = vec!["int add(int a,int b) {", "return a+b;", "}"];
        let block = Block::new("add", None, 1, span(1, 3), &lines);
        assert_eq!(
            block.format_text(),
            "--- add (line 1) ---\n\
             int add(int a,int b) {\n\
             return a+b;\n\
             }\n\
             \n\
             ----------------------------------------\n\
             \n"
        );
    }

    #[test]
    fn test_multi_match_header() {
        let lines = vec!["void foo() {", "}", "void foo(int x) {", "}"];
        let first = Block::new("foo", Some(1), 1, span(1, 2), &lines);
        let second = Block::new("foo", Some(2), 3, span(3, 4), &lines);
        assert_eq!(first.header(), "--- foo (match 1 at line 1) ---");
        assert_eq!(second.header(), "--- foo (match 2 at line 3) ---");
    }

    #[test]
    fn test_header_uses_candidate_line_not_span_start() {
        // A decorated Python function spans from the decorator but is
        // labeled by its def line.
        let lines = vec!["@cached", "def f():", "    pass"];
        let block = Block::new(
            "f",
            None,
            2,
            Span {
                start_line: 1,
                end_line: 3,
                strategy: SpanStrategy::GrammarNode,
            },
            &lines,
        );
        assert_eq!(block.header(), "--- f (line 2) ---");
        assert!(block.text.starts_with("@cached\n"));
    }

    #[test]
    fn test_json_output() {
        let lines = vec!["void f() {", "}"];
        let blocks = vec![Block::new("f", None, 1, span(1, 2), &lines)];
        let json = format_json(&blocks);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "f");
        assert_eq!(value[0]["start_line"], 1);
        assert_eq!(value[0]["end_line"], 2);
        assert!(value[0].get("match").is_none());
    }
}
