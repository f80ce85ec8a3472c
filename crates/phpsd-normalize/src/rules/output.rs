//! Output statement normalization
//!
//! Raw template text becomes an explicit `echo` of a string literal, a
//! multi-expression `echo` becomes one statement per expression, and a
//! `print` used as a statement becomes the equivalent `echo`.

use phpsd_syntax::kinds::{self, field};
use phpsd_syntax::{FieldValue, Span, SyntaxNode};

use super::strings::string_literal;

/// Rewrite raw output text (inline HTML emitted as-is) into an explicit
/// echo of an equivalent literal. The statement inherits the raw region's
/// span; the literal is synthesized.
pub(crate) fn raw_text_to_echo(node: SyntaxNode) -> SyntaxNode {
    match node.kind {
        kinds::TEXT => {
            let text = node.token_text().unwrap_or_default().to_string();
            echo_of_literal(node.span, text)
        }
        kinds::TEXT_INTERPOLATION => {
            let inner = node
                .nodes_under(field::CHILDREN)
                .into_iter()
                .find(|n| n.kind == kinds::TEXT)
                .and_then(|n| n.token_text())
                .map(str::to_string);
            match inner {
                Some(text) => echo_of_literal(node.span, text),
                // an empty `?><?php` gap; dropped by the container pass
                None => node,
            }
        }
        _ => node,
    }
}

fn echo_of_literal(span: Option<Span>, text: String) -> SyntaxNode {
    let mut echo = SyntaxNode::synthetic(kinds::ECHO_STATEMENT);
    echo.span = span;
    echo.set_node_field(field::CHILDREN, vec![string_literal(text)]);
    echo
}

/// Per-statement-list cleanup: drop leftover empty output gaps, rewrite
/// statement-level `print`, and split multi-expression `echo` statements
/// in source order. Split statements are synthesized and span-less; their
/// expressions keep their parsed spans.
pub(crate) fn normalize_output_statements(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::PROGRAM && node.kind != kinds::COMPOUND_STATEMENT {
        return node;
    }
    let values = node.take_values(field::CHILDREN);
    let mut out: Vec<FieldValue> = Vec::with_capacity(values.len());
    for value in values {
        let FieldValue::Node(stmt) = value else {
            out.push(value);
            continue;
        };
        let stmt = *stmt;
        match stmt.kind {
            kinds::TEXT_INTERPOLATION => {
                // nothing survives of an empty output gap
            }
            kinds::EXPRESSION_STATEMENT => match print_expression(stmt) {
                Ok(echo) => out.push(FieldValue::node(echo)),
                Err(stmt) => out.push(FieldValue::node(stmt)),
            },
            kinds::ECHO_STATEMENT => {
                let mut stmt = stmt;
                let mut exprs = Vec::new();
                for value in stmt.take_values(field::CHILDREN) {
                    flatten_sequence(value, &mut exprs);
                }
                if exprs.len() <= 1 {
                    stmt.set_node_field(field::CHILDREN, exprs);
                    out.push(FieldValue::node(stmt));
                } else {
                    for expr in exprs {
                        let mut echo = SyntaxNode::synthetic(kinds::ECHO_STATEMENT);
                        echo.set_node_field(field::CHILDREN, vec![expr]);
                        out.push(FieldValue::node(echo));
                    }
                }
            }
            _ => out.push(FieldValue::node(stmt)),
        }
    }
    node.set_field_values(field::CHILDREN, out);
    node
}

/// A comma-separated expression list may arrive either as a plain list of
/// children or nested inside sequence expression nodes; either way every
/// expression ends up its own operand.
fn flatten_sequence(value: FieldValue, out: &mut Vec<SyntaxNode>) {
    let FieldValue::Node(node) = value else {
        return;
    };
    let mut node = *node;
    if node.kind == kinds::SEQUENCE_EXPRESSION {
        for inner in node.take_values(field::CHILDREN) {
            flatten_sequence(inner, out);
        }
    } else {
        out.push(node);
    }
}

/// `print e;` carries the statement's span over to the echo form, a
/// one-to-one rewrite of the same source region. Returns the statement
/// unchanged when it is not a print expression.
fn print_expression(mut stmt: SyntaxNode) -> Result<SyntaxNode, SyntaxNode> {
    let is_print = matches!(
        stmt.node_field(field::CHILDREN),
        Some(inner) if inner.kind == kinds::PRINT_INTRINSIC
    );
    if !is_print {
        return Err(stmt);
    }
    let Some(FieldValue::Node(print)) = stmt.take_field(field::CHILDREN) else {
        return Err(stmt);
    };
    let mut print = *print;
    let mut echo = SyntaxNode::synthetic(kinds::ECHO_STATEMENT);
    echo.span = stmt.span;
    echo.set_field_values(field::CHILDREN, print.take_values(field::CHILDREN));
    Ok(echo)
}
