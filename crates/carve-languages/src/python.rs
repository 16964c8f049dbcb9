//! Python language support.
//!
//! Python function extents come from the tree-sitter grammar rather
//! than brace counting: `function_definition` nodes carry their own
//! end position, and decorators live on a wrapping
//! `decorated_definition` node.

use crate::{Language, SpanStrategy};
use thiserror::Error;
use tree_sitter::{Node, Parser};

pub struct Python;

impl Language for Python {
    fn name(&self) -> &'static str {
        "Python"
    }
    fn extensions(&self) -> &'static [&'static str] {
        &["py", "pyi", "pyw"]
    }
    fn span_strategy(&self) -> SpanStrategy {
        SpanStrategy::GrammarNode
    }
}

/// A function definition found by the grammar walk.
///
/// `decl_line` is the line bearing the `def` keyword; decorators are
/// recorded separately so the span resolver can widen the start.
/// All lines are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnDecl {
    pub name: String,
    pub decl_line: usize,
    pub end_line: usize,
    pub decorator_lines: Vec<usize>,
}

/// Error parsing a source file under its grammar.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("python grammar failed to load")]
    Grammar,
    #[error("syntax error near line {line}")]
    Syntax { line: usize },
}

/// Collect every function definition in `source`, at any nesting
/// depth, in depth-first pre-order (discovery order). Duplicate names
/// are all kept; they distinguish shadowed or redefined functions.
pub fn function_decls(source: &str) -> Result<Vec<FnDecl>, GrammarError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|_| GrammarError::Grammar)?;
    let tree = parser.parse(source, None).ok_or(GrammarError::Grammar)?;
    let root = tree.root_node();

    if root.has_error() {
        let line = first_error_line(root).unwrap_or(root.start_position().row + 1);
        return Err(GrammarError::Syntax { line });
    }

    let mut decls = Vec::new();
    let mut cursor = root.walk();
    // Depth-first pre-order over the whole tree.
    'walk: loop {
        let node = cursor.node();
        if node.kind() == "function_definition" {
            if let Some(decl) = decl_from_node(&node, source) {
                decls.push(decl);
            }
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }
    Ok(decls)
}

fn decl_from_node(node: &Node, source: &str) -> Option<FnDecl> {
    let name = node
        .child_by_field_name("name")?
        .utf8_text(source.as_bytes())
        .ok()?
        .to_string();

    let mut decorator_lines = Vec::new();
    if let Some(parent) = node.parent() {
        if parent.kind() == "decorated_definition" {
            let mut cursor = parent.walk();
            for child in parent.named_children(&mut cursor) {
                if child.kind() == "decorator" {
                    decorator_lines.push(child.start_position().row + 1);
                }
            }
        }
    }

    Some(FnDecl {
        name,
        decl_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
        decorator_lines,
    })
}

/// Line of the first ERROR or MISSING node under `node`.
fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_error_line(child) {
            return Some(line);
        }
    }
    None
}
