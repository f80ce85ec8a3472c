//! String literal canonicalization and interpolation expansion

use phpsd_syntax::kinds::{self, field};
use phpsd_syntax::{FieldValue, Scalar, Span, SyntaxNode};

/// Build the canonical string literal shape: kind `string` with a single
/// decoded `value` scalar.
pub(crate) fn string_literal(value: impl Into<String>) -> SyntaxNode {
    let mut node = SyntaxNode::synthetic(kinds::STRING);
    node.fields
        .push((field::VALUE, FieldValue::Scalar(Scalar::Str(value.into()))));
    node
}

/// Rewrite plain string literals (single-quoted, or double-quoted without
/// embedded expressions) into the canonical shape, decoding escape
/// sequences so the quoting style no longer shows in the tree. The span is
/// inherited: the canonical node still names the original literal's bytes.
pub(crate) fn canonical_string_literals(node: SyntaxNode) -> SyntaxNode {
    let plain = node.kind == kinds::STRING
        || (node.kind == kinds::ENCAPSED_STRING && !has_embedded_expression(&node));
    if !plain {
        return node;
    }
    if node.kind == kinds::STRING && node.field(field::VALUE).is_some() {
        // already canonical
        return node;
    }
    let Some(value) = decoded_value(&node) else {
        return node;
    };
    let mut out = string_literal(value);
    out.span = node.span;
    out
}

/// Expand an interpolated string into an equivalent concatenation tree:
/// a lone embedded expression becomes an explicit string cast, anything
/// longer a left-associative `.` chain of literals and expressions in
/// source order. Only the top of the expansion inherits the original span;
/// the synthesized interior must never anchor a partial text replacement.
pub(crate) fn expand_interpolation(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::ENCAPSED_STRING || !has_embedded_expression(&node) {
        return node;
    }
    let span = node.span;

    enum Part {
        Text(String),
        Expr(SyntaxNode),
    }

    let mut parts: Vec<Part> = Vec::new();
    for value in node.take_values(field::CHILDREN) {
        let FieldValue::Node(child) = value else {
            continue;
        };
        let child = *child;
        let piece = match child.kind {
            kinds::STRING_CONTENT => child.token_text().map(str::to_string),
            kinds::ESCAPE_SEQUENCE => child.token_text().map(decode_escape),
            _ => {
                parts.push(Part::Expr(child));
                continue;
            }
        };
        let piece = piece.unwrap_or_default();
        match parts.last_mut() {
            Some(Part::Text(text)) => text.push_str(&piece),
            _ => parts.push(Part::Text(piece)),
        }
    }

    let mut operands: Vec<SyntaxNode> = parts
        .into_iter()
        .map(|part| match part {
            Part::Text(text) => string_literal(text),
            Part::Expr(expr) => expr,
        })
        .collect();

    match operands.len() {
        0 => {
            let mut literal = string_literal("");
            literal.span = span;
            literal
        }
        1 => {
            let only = operands.remove(0);
            if only.kind == kinds::STRING {
                // interpolation that carried no expression after all
                let mut literal = only;
                literal.span = span;
                literal
            } else {
                cast_to_string(only, span)
            }
        }
        _ => {
            let mut iter = operands.into_iter();
            let mut acc = match iter.next() {
                Some(first) => first,
                None => return string_literal(""),
            };
            for next in iter {
                acc = concat(acc, next);
            }
            acc.span = span;
            acc
        }
    }
}

fn has_embedded_expression(node: &SyntaxNode) -> bool {
    node.nodes_under(field::CHILDREN)
        .iter()
        .any(|n| n.kind != kinds::STRING_CONTENT && n.kind != kinds::ESCAPE_SEQUENCE)
}

fn decoded_value(node: &SyntaxNode) -> Option<String> {
    let parts = node.nodes_under(field::CHILDREN);
    if parts.is_empty() {
        // either a bare token or an empty literal
        return match node.token_text() {
            Some(raw) => Some(decode_quoted(raw)),
            None => Some(String::new()),
        };
    }
    let mut out = String::new();
    for part in parts {
        match part.kind {
            kinds::STRING_CONTENT => out.push_str(part.token_text()?),
            kinds::ESCAPE_SEQUENCE => out.push_str(&decode_escape(part.token_text()?)),
            _ => return None,
        }
    }
    Some(out)
}

/// Decode a raw quoted literal, quotes included.
fn decode_quoted(raw: &str) -> String {
    let (inner, double) = match raw.as_bytes().first() {
        Some(b'\'') => (raw.trim_matches('\''), false),
        Some(b'"') => (raw.trim_matches('"'), true),
        _ => return raw.to_string(),
    };
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('\\'),
            Some(next) => {
                let seq = format!("\\{next}");
                let decoded = decode_escape(&seq);
                if !double && next != '\\' && next != '\'' {
                    // single quotes only escape backslash and quote
                    out.push('\\');
                    out.push(next);
                } else {
                    out.push_str(&decoded);
                }
            }
        }
    }
    out
}

/// Decode one escape sequence; unknown sequences keep their backslash,
/// matching runtime behavior.
pub(crate) fn decode_escape(seq: &str) -> String {
    let Some(rest) = seq.strip_prefix('\\') else {
        return seq.to_string();
    };
    match rest {
        "n" => "\n".to_string(),
        "t" => "\t".to_string(),
        "r" => "\r".to_string(),
        "v" => "\u{000B}".to_string(),
        "f" => "\u{000C}".to_string(),
        "e" => "\u{001B}".to_string(),
        "\\" => "\\".to_string(),
        "'" => "'".to_string(),
        "\"" => "\"".to_string(),
        "$" => "$".to_string(),
        _ => {
            if let Some(hex) = rest.strip_prefix('x') {
                if let Ok(byte) = u8::from_str_radix(hex, 16) {
                    return (byte as char).to_string();
                }
            } else if let Some(code) = rest.strip_prefix("u{").and_then(|s| s.strip_suffix('}')) {
                if let Some(c) = u32::from_str_radix(code, 16).ok().and_then(char::from_u32) {
                    return c.to_string();
                }
            } else if !rest.is_empty() && rest.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
                if let Some(c) = u32::from_str_radix(rest, 8).ok().and_then(char::from_u32) {
                    return c.to_string();
                }
            }
            seq.to_string()
        }
    }
}

fn cast_to_string(expr: SyntaxNode, span: Option<Span>) -> SyntaxNode {
    let mut node = SyntaxNode::synthetic(kinds::CAST_EXPRESSION);
    node.span = span;
    node.fields.push((
        field::TYPE,
        FieldValue::node(SyntaxNode::synthetic_token(kinds::CAST_TYPE, "string")),
    ));
    node.fields.push((field::VALUE, FieldValue::node(expr)));
    node
}

pub(crate) fn concat(left: SyntaxNode, right: SyntaxNode) -> SyntaxNode {
    let mut node = SyntaxNode::synthetic(kinds::BINARY_EXPRESSION);
    node.fields.push((field::LEFT, FieldValue::node(left)));
    node.fields
        .push((field::OPERATOR, FieldValue::Scalar(Scalar::str("."))));
    node.fields.push((field::RIGHT, FieldValue::node(right)));
    node
}
