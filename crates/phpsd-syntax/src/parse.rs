//! PHP parser adapter
//!
//! Wraps tree-sitter with the tree-sitter-php grammar and lowers the
//! concrete syntax tree into the owned [`SyntaxNode`] model. The adapter is
//! deliberately generic: it never special-cases a grammar production, it
//! only applies the field mapping convention described in [`crate::node`].
//!
//! Parser instances are short-lived; one is constructed per `parse_source`
//! call. The grammar disallows a shebang line, so the caller-facing entry
//! point strips it first and reports spans relative to the stripped text.

use tree_sitter::{Language, Node, Parser};

use crate::error::{Error, Result};
use crate::kinds::{self, field};
use crate::node::{FieldValue, Scalar, SyntaxNode};
use crate::span::Span;

/// A parsed file: the stripped text that all spans index into, the
/// shebang line (with its newline) if one was removed, and the lowered
/// program node.
#[derive(Debug)]
pub struct ParsedSource {
    pub shebang: Option<String>,
    pub text: String,
    pub root: SyntaxNode,
}

impl ParsedSource {
    /// Reattach the shebang in front of text derived from `self.text`.
    pub fn with_shebang(&self, body: String) -> String {
        match &self.shebang {
            Some(line) => format!("{line}{body}"),
            None => body,
        }
    }
}

/// Split a leading interpreter directive off `source`. The shebang part
/// keeps its trailing newline so the two halves concatenate back to the
/// original text.
pub fn split_shebang(source: &str) -> (Option<&str>, &str) {
    if !source.starts_with("#!") {
        return (None, source);
    }
    match source.find('\n') {
        Some(pos) => (Some(&source[..=pos]), &source[pos + 1..]),
        None => (Some(source), ""),
    }
}

/// Parse PHP source into the generic tree model.
///
/// Returns `Error::Parse` with the offset of the first error node when the
/// text is not valid under the grammar.
pub fn parse_source(source: &str) -> Result<ParsedSource> {
    let (shebang, body) = split_shebang(source);

    let language: Language = tree_sitter_php::LANGUAGE_PHP.into();
    let mut parser = Parser::new();
    parser.set_language(&language)?;

    let tree = parser.parse(body, None).ok_or(Error::ParserCancelled)?;
    let root = tree.root_node();
    if root.has_error() {
        let offset = first_error_offset(root).unwrap_or(0);
        tracing::debug!(offset, "rejecting source with parse error");
        return Err(Error::Parse { offset });
    }

    Ok(ParsedSource {
        shebang: shebang.map(str::to_string),
        text: body.to_string(),
        root: lower(root, body),
    })
}

fn first_error_offset(node: Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_byte());
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(offset) = first_error_offset(child) {
            return Some(offset);
        }
    }
    None
}

/// Lower one concrete node into the owned model.
fn lower(node: Node<'_>, src: &str) -> SyntaxNode {
    let span = Span::new(node.start_byte(), node.end_byte());
    let mut out = SyntaxNode::new(node.kind(), span);

    if node.child_count() == 0 {
        // Bare token: the text is the whole story.
        out.fields
            .push((field::TEXT, FieldValue::Scalar(Scalar::str(span.slice(src)))));
        return out;
    }

    // Group children under their field key, first occurrence fixing the
    // key's position, so repeated grammar fields become ordered lists.
    let mut groups: Vec<(&'static str, Vec<FieldValue>)> = Vec::new();
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if let Some((key, value)) = classify(child, cursor.field_name(), src) {
                match groups.iter_mut().find(|(k, _)| *k == key) {
                    Some((_, values)) => values.push(value),
                    None => groups.push((key, vec![value])),
                }
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }

    for (key, mut values) in groups {
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            FieldValue::List(values)
        };
        out.fields.push((key, value));
    }
    out
}

/// Decide where (and whether) a child lands in the parent's field map.
fn classify(
    child: Node<'_>,
    field_name: Option<&'static str>,
    src: &str,
) -> Option<(&'static str, FieldValue)> {
    if child.kind() == kinds::COMMENT {
        return None;
    }
    let token = || Scalar::str(&src[child.start_byte()..child.end_byte()]);
    match field_name {
        Some(name) => {
            // A named grammar field; anonymous occupants (operators, cast
            // keywords) are kept as scalar text.
            if child.is_named() {
                Some((name, FieldValue::node(lower(child, src))))
            } else {
                Some((name, FieldValue::Scalar(token())))
            }
        }
        None if child.is_named() => {
            Some((field::CHILDREN, FieldValue::node(lower(child, src))))
        }
        None => {
            // Unnamed anonymous token. Punctuation is redundant with the
            // node kind and dropped; operator-shaped tokens and the worded
            // logical operators are meaning-bearing and kept.
            let text = &src[child.start_byte()..child.end_byte()];
            if is_significant_token(text) {
                Some((field::CHILDREN, FieldValue::Scalar(token())))
            } else {
                None
            }
        }
    }
}

fn is_significant_token(text: &str) -> bool {
    const WORDED: [&str; 4] = ["and", "or", "xor", "instanceof"];
    if WORDED.iter().any(|w| text.eq_ignore_ascii_case(w)) {
        return true;
    }
    !text.is_empty() && text.chars().all(|c| "+-*/%.!<>=&|^~?@".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn find_by_kind<'a>(node: &'a SyntaxNode, kind: &str, out: &mut Vec<&'a SyntaxNode>) {
        if node.kind == kind {
            out.push(node);
        }
        for (_, value) in node.fields() {
            for child in value_nodes(value) {
                find_by_kind(child, kind, out);
            }
        }
    }

    fn value_nodes(value: &FieldValue) -> Vec<&SyntaxNode> {
        match value {
            FieldValue::Node(n) => vec![n],
            FieldValue::List(items) => items.iter().filter_map(FieldValue::as_node).collect(),
            FieldValue::Scalar(_) => Vec::new(),
        }
    }

    fn assert_spans_nested(node: &SyntaxNode) {
        let span = node.span.expect("parsed nodes carry spans");
        for (_, value) in node.fields() {
            for child in value_nodes(value) {
                let child_span = child.span.expect("parsed nodes carry spans");
                assert!(
                    span.contains(child_span),
                    "{} span {:?} escapes parent {} {:?}",
                    child.kind,
                    child_span,
                    node.kind,
                    span
                );
                assert_spans_nested(child);
            }
        }
    }

    #[test]
    fn test_parse_simple_program() {
        let parsed = parse_source("<?php echo 'hi';\n").unwrap();
        assert_eq!(parsed.root.kind, "program");
        assert!(parsed.shebang.is_none());
        let mut echoes = Vec::new();
        find_by_kind(&parsed.root, "echo_statement", &mut echoes);
        assert_eq!(echoes.len(), 1);
    }

    #[test]
    fn test_parse_rejects_invalid_source() {
        let err = parse_source("<?php if (").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_shebang_is_split_and_spans_are_relative() {
        let source = "#!/usr/bin/env php\n<?php echo 1;\n";
        let parsed = parse_source(source).unwrap();
        assert_eq!(parsed.shebang.as_deref(), Some("#!/usr/bin/env php\n"));
        assert_eq!(parsed.text, "<?php echo 1;\n");
        assert_eq!(parsed.root.span.unwrap().start, 0);
        assert_eq!(parsed.with_shebang(parsed.text.clone()), source);
    }

    #[test]
    fn test_split_shebang_without_newline() {
        let (shebang, rest) = split_shebang("#!/bin/env php");
        assert_eq!(shebang, Some("#!/bin/env php"));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_spans_nest_within_parents() {
        let parsed = parse_source(
            "<?php\nfunction greet($name) {\n    return 'Hello, ' . $name;\n}\n",
        )
        .unwrap();
        assert_spans_nested(&parsed.root);
    }

    #[test]
    fn test_binary_operator_is_captured_as_scalar() {
        let parsed = parse_source("<?php $x = $a . $b;\n").unwrap();
        let mut binaries = Vec::new();
        find_by_kind(&parsed.root, "binary_expression", &mut binaries);
        assert_eq!(binaries.len(), 1);
        let op = binaries[0]
            .fields()
            .iter()
            .find_map(|(_, v)| match v {
                FieldValue::Scalar(s) => s.as_str(),
                _ => None,
            })
            .expect("operator token recorded");
        assert_eq!(op, ".");
    }

    #[test]
    fn test_comments_are_dropped() {
        let with = parse_source("<?php // note\necho 1;\n").unwrap();
        let without = parse_source("<?php echo 1;\n").unwrap();
        assert!(with.root.structural_eq(&without.root));
    }

    #[test]
    fn test_identical_sources_lower_identically() {
        let a = parse_source("<?php echo 1 + 2;\n").unwrap();
        let b = parse_source("<?php echo 1 + 2;\n").unwrap();
        assert_eq!(a.root, b.root);
    }
}
