//! Call classification and test-case extraction
//!
//! A single depth-first walk over the parse tree finds every call whose
//! callee is a member expression (`receiver.member(...)`), classifies the
//! member name against the taxonomy, and attributes it to the innermost
//! enclosing test. Test scope is an explicit stack threaded through the
//! walk, so the traversal is reentrant and has no module-level state.

use crate::analyzers::{taxonomy, SpecAst};
use crate::core::{CommandOccurrence, SourceSpan, TestCase};
use tree_sitter::Node;

/// Test declaration callee names
const TEST_CALLEES: &[&str] = &["it", "specify"];
/// Suite declaration callee names
const SUITE_CALLEES: &[&str] = &["describe", "context"];
/// Modifier members allowed on declaration callees (`it.only`, `describe.skip`)
const DECLARATION_MODIFIERS: &[&str] = &["only", "skip"];

/// Everything a single walk extracts from one file
#[derive(Debug, Default)]
pub struct FileCommands {
    /// Source-ordered classified calls
    pub occurrences: Vec<CommandOccurrence>,
    /// Test declarations in declaration order; duplicates stay distinct
    pub tests: Vec<TestCase>,
}

#[derive(Default)]
struct Scopes {
    /// Open test scopes: (description, index into `FileCommands::tests`)
    tests: Vec<(String, usize)>,
    /// Open suite names, outermost first
    suites: Vec<String>,
}

/// Walk the tree and extract commands and test cases
pub fn extract_commands(ast: &SpecAst) -> FileCommands {
    let mut out = FileCommands::default();
    let mut scopes = Scopes::default();
    visit(ast.tree.root_node(), ast.source.as_str(), &mut scopes, &mut out);

    // Chained calls are visited outermost first; a stable sort on the member
    // position restores textual order.
    out.occurrences
        .sort_by_key(|occ| (occ.line, occ.column));
    out
}

fn visit(node: Node, source: &str, scopes: &mut Scopes, out: &mut FileCommands) {
    if node.kind() == "call_expression" {
        if let Some(decl) = test_declaration(node, source) {
            let index = out.tests.len();
            let pos = node.start_position();
            out.tests.push(TestCase {
                name: decl.name.clone(),
                suites: scopes.suites.clone(),
                line: pos.row + 1,
                column: pos.column,
                body_span: SourceSpan::new(decl.body.start_byte(), decl.body.end_byte()),
                statement_count: decl.statement_count,
            });
            visit_declaration_arguments(node, decl.function, source, scopes, out, |scopes| {
                scopes.tests.push((decl.name.clone(), index));
            });
            scopes.tests.pop();
            return;
        }
        if let Some(suite) = suite_declaration(node, source) {
            visit_declaration_arguments(node, suite.function, source, scopes, out, |scopes| {
                scopes.suites.push(suite.name.clone());
            });
            scopes.suites.pop();
            return;
        }
        if let Some((member, prop)) = member_callee(node, source) {
            let pos = prop.start_position();
            let (enclosing_test, enclosing_test_index) = match scopes.tests.last() {
                Some((name, index)) => (Some(name.clone()), Some(*index)),
                None => (None, None),
            };
            out.occurrences.push(CommandOccurrence {
                category: taxonomy::classify(&member),
                callee: member,
                line: pos.row + 1,
                column: pos.column,
                enclosing_test,
                enclosing_test_index,
            });
        }
    }

    for child in node.children(&mut node.walk()) {
        visit(child, source, scopes, out);
    }
}

/// Visit a declaration's arguments; the body function runs under the pushed
/// scope, every other argument under the current one.
fn visit_declaration_arguments(
    call: Node,
    body_fn: Node,
    source: &str,
    scopes: &mut Scopes,
    out: &mut FileCommands,
    push: impl FnOnce(&mut Scopes),
) {
    let mut push = Some(push);
    if let Some(args) = call.child_by_field_name("arguments") {
        for arg in args.named_children(&mut args.walk()) {
            if arg.id() == body_fn.id() {
                if let Some(push) = push.take() {
                    push(scopes);
                }
            }
            visit(arg, source, scopes, out);
        }
    }
    // Keep push/pop balanced even if the body went missing mid-walk
    if let Some(push) = push.take() {
        push(scopes);
    }
}

/// A matched `it`/`specify` call
pub(crate) struct TestDeclaration<'a> {
    pub name: String,
    /// The body function argument (arrow or function expression)
    pub function: Node<'a>,
    /// The function's body: a statement block, or an expression for
    /// brace-less arrows
    pub body: Node<'a>,
    /// Statements in the body, comments excluded
    pub statement_count: usize,
}

/// A matched `describe`/`context` call
pub(crate) struct SuiteDeclaration<'a> {
    pub name: String,
    pub function: Node<'a>,
}

/// Match a call against the test-declaration pattern: `it`/`specify`
/// (optionally `.only`/`.skip`), a string description, and a function body.
pub(crate) fn test_declaration<'a>(node: Node<'a>, source: &str) -> Option<TestDeclaration<'a>> {
    let (name, function, body, statement_count) = declaration(node, source, TEST_CALLEES)?;
    Some(TestDeclaration {
        name,
        function,
        body,
        statement_count,
    })
}

pub(crate) fn suite_declaration<'a>(node: Node<'a>, source: &str) -> Option<SuiteDeclaration<'a>> {
    let (name, function, _, _) = declaration(node, source, SUITE_CALLEES)?;
    Some(SuiteDeclaration { name, function })
}

fn declaration<'a>(
    node: Node<'a>,
    source: &str,
    callees: &[&str],
) -> Option<(String, Node<'a>, Node<'a>, usize)> {
    let callee = node.child_by_field_name("function")?;
    let base = declaration_callee_name(callee, source)?;
    if !callees.contains(&base.as_str()) {
        return None;
    }

    let args = node.child_by_field_name("arguments")?;
    let mut cursor = args.walk();
    let description = string_literal(args.named_children(&mut cursor).next()?, source)?;

    // The body is the last function-valued argument; Cypress allows an
    // options object between the description and the body.
    let function = args
        .named_children(&mut args.walk())
        .filter(is_function_node)
        .last()?;
    let body = function.child_by_field_name("body")?;
    let statement_count = if body.kind() == "statement_block" {
        body.named_children(&mut body.walk())
            .filter(|child| child.kind() != "comment")
            .count()
    } else {
        // Brace-less arrow body is one expression statement
        1
    };
    Some((description, function, body, statement_count))
}

fn declaration_callee_name(callee: Node, source: &str) -> Option<String> {
    match callee.kind() {
        "identifier" => text(callee, source),
        "member_expression" => {
            let object = callee.child_by_field_name("object")?;
            let property = callee.child_by_field_name("property")?;
            if object.kind() != "identifier" {
                return None;
            }
            let modifier = text(property, source)?;
            if !DECLARATION_MODIFIERS.contains(&modifier.as_str()) {
                return None;
            }
            text(object, source)
        }
        _ => None,
    }
}

fn is_function_node(node: &Node) -> bool {
    matches!(
        node.kind(),
        "arrow_function" | "function_expression" | "function" | "generator_function"
    )
}

/// Member-expression callee of a call: `(receiver.member)(...)`
fn member_callee<'a>(node: Node<'a>, source: &str) -> Option<(String, Node<'a>)> {
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "member_expression" {
        return None;
    }
    let property = callee.child_by_field_name("property")?;
    if property.kind() != "property_identifier" {
        return None;
    }
    Some((text(property, source)?, property))
}

/// Contents of a string or template literal, exactly as written
fn string_literal(node: Node, source: &str) -> Option<String> {
    match node.kind() {
        "string" => {
            let mut out = String::new();
            for child in node.children(&mut node.walk()) {
                if matches!(child.kind(), "string_fragment" | "escape_sequence") {
                    out.push_str(child.utf8_text(source.as_bytes()).ok()?);
                }
            }
            Some(out)
        }
        "template_string" => {
            let raw = node.utf8_text(source.as_bytes()).ok()?;
            Some(raw.get(1..raw.len().checked_sub(1)?)?.to_string())
        }
        _ => None,
    }
}

fn text(node: Node, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes())
        .ok()
        .map(|t| t.to_string())
}
