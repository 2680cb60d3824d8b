//! Source parsing for spec files
//!
//! Thin wrapper over tree-sitter. The grammar is chosen from the file name
//! alone; typed annotations and embedded markup parse without a build step.
//! Parsing is pure: callers read the file and hand the text in.

pub mod commands;
pub mod taxonomy;

use crate::core::{Dialect, Error, Result};
use anyhow::Context;
use std::path::PathBuf;
use tree_sitter::{Node, Parser, Tree};

/// Parse result for one spec file
#[derive(Debug)]
pub struct SpecAst {
    pub tree: Tree,
    pub source: String,
    pub path: PathBuf,
    pub dialect: Dialect,
}

/// Parse spec source text into an AST, or a structured parse error
pub fn parse(content: &str, path: PathBuf) -> Result<SpecAst> {
    let dialect = Dialect::from_path(&path).ok_or_else(|| {
        Error::Unsupported(format!("unrecognized spec extension: {}", path.display()))
    })?;
    parse_with_dialect(content, path, dialect)
}

/// Parse with an explicit dialect, bypassing file-name detection
pub fn parse_with_dialect(content: &str, path: PathBuf, dialect: Dialect) -> Result<SpecAst> {
    let mut parser = Parser::new();
    let language = grammar_for(dialect);
    parser
        .set_language(&language)
        .with_context(|| format!("Failed to set {} grammar", dialect.display_name()))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(&path, 1, 0, "parser produced no tree"))?;

    if tree.root_node().has_error() {
        let err = first_syntax_error(tree.root_node(), content);
        return Err(Error::parse(&path, err.line, err.column, err.message));
    }

    Ok(SpecAst {
        tree,
        source: content.to_string(),
        path,
        dialect,
    })
}

fn grammar_for(dialect: Dialect) -> tree_sitter::Language {
    match dialect {
        // The JavaScript grammar covers JSX
        Dialect::JavaScript | Dialect::Jsx => tree_sitter_javascript::LANGUAGE.into(),
        Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

struct SyntaxError {
    line: usize,
    column: usize,
    message: String,
}

/// Locate the first ERROR or MISSING node in source order
fn first_syntax_error(root: Node, source: &str) -> SyntaxError {
    fn find<'a>(node: Node<'a>) -> Option<Node<'a>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        for child in node.children(&mut node.walk()) {
            if let Some(found) = find(child) {
                return Some(found);
            }
        }
        None
    }

    match find(root) {
        Some(node) => {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                let text = node.utf8_text(source.as_bytes()).unwrap_or("");
                let snippet: String = text.chars().take(24).collect();
                format!("unexpected `{}`", snippet.trim())
            };
            SyntaxError {
                line: pos.row + 1,
                column: pos.column,
                message,
            }
        }
        None => SyntaxError {
            line: 1,
            column: 0,
            message: "malformed source".into(),
        },
    }
}
