//! Structure-preserving body stripping
//!
//! A single top-down pass collects one patch per matched test declaration
//! whose body still has statements; the patches are spliced into the
//! original text back to front. Everything outside the replaced body
//! blocks, description strings included, survives byte-for-byte, and a
//! second run finds only empty bodies and changes nothing.

use crate::analyzers::{commands, SpecAst};
use crate::core::{SourceSpan, TransformResult};
use tree_sitter::Node;

/// Replacement emitted for each non-empty test body
const EMPTY_BODY: &str = "{}";

/// Strip every non-empty test body in the file
pub fn strip_test_bodies(ast: &SpecAst) -> TransformResult {
    let mut patches = Vec::new();
    collect_patches(ast.tree.root_node(), &ast.source, &mut patches);

    let changed_test_count = patches.len();
    let rewritten_text = apply_patches(&ast.source, patches);

    TransformResult {
        path: ast.path.clone(),
        original_text: ast.source.clone(),
        rewritten_text,
        changed_test_count,
    }
}

/// Byte ranges of test bodies to replace, in source order
fn collect_patches(node: Node, source: &str, patches: &mut Vec<SourceSpan>) {
    if node.kind() == "call_expression" {
        if let Some(decl) = commands::test_declaration(node, source) {
            if decl.statement_count > 0 {
                patches.push(SourceSpan::new(
                    decl.body.start_byte(),
                    decl.body.end_byte(),
                ));
            }
            // The body is being replaced wholesale; nothing inside it can
            // produce a further patch.
            return;
        }
    }

    for child in node.children(&mut node.walk()) {
        collect_patches(child, source, patches);
    }
}

/// Splice replacements back to front so earlier offsets stay valid
fn apply_patches(source: &str, patches: Vec<SourceSpan>) -> String {
    let mut text = source.to_string();
    for span in patches.into_iter().rev() {
        text.replace_range(span.start..span.end, EMPTY_BODY);
    }
    text
}
