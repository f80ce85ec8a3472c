//! Generic, introspectable syntax tree
//!
//! Every node carries a kind tag, an optional span into its own source
//! text, and an ordered field map. The field map is the sole traversal
//! surface: the normalizer pipeline, the differ, and the printer never
//! reach for kind-specific accessors, they walk `fields()`.
//!
//! Field mapping convention (established by the parser adapter, maintained
//! by every normalization rule): a field holding exactly one child is a
//! `Node` value, two or more children become a `List`, zero children means
//! the key is absent. Children without a grammar field name are gathered
//! under the `children` key with the same one/many convention.

use serde::Serialize;

use crate::Span;
use crate::kinds::field;

/// A non-structural leaf value, compared by plain equality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Bool(bool),
    Null,
}

impl Scalar {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// One field slot of a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    Scalar(Scalar),
    Node(Box<SyntaxNode>),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn node(node: SyntaxNode) -> Self {
        Self::Node(Box::new(node))
    }

    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }
}

/// A flattened leaf as seen by the differ's quick-reject check: scalars
/// survive, node-typed leaves are masked down to an opaque placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlatValue<'a> {
    Scalar(&'a Scalar),
    Node,
}

/// An owned tree node. `span: None` marks a node synthesized by
/// normalization; such nodes are never used as anchors for text reuse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxNode {
    pub kind: &'static str,
    pub span: Option<Span>,
    pub fields: Vec<(&'static str, FieldValue)>,
}

impl SyntaxNode {
    pub fn new(kind: &'static str, span: Span) -> Self {
        Self {
            kind,
            span: Some(span),
            fields: Vec::new(),
        }
    }

    /// A span-less node synthesized during normalization.
    pub fn synthetic(kind: &'static str) -> Self {
        Self {
            kind,
            span: None,
            fields: Vec::new(),
        }
    }

    /// A synthesized leaf token, e.g. the default `0` exit status.
    pub fn synthetic_token(kind: &'static str, text: impl Into<String>) -> Self {
        let mut node = Self::synthetic(kind);
        node.fields.push((field::TEXT, FieldValue::Scalar(Scalar::str(text))));
        node
    }

    /// The ordered field map; stable for a given kind.
    pub fn fields(&self) -> &[(&'static str, FieldValue)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// The single child node under `name`, if the field holds exactly one.
    pub fn node_field(&self, name: &str) -> Option<&SyntaxNode> {
        self.field(name).and_then(FieldValue::as_node)
    }

    /// Leaf token text, for nodes the adapter lowered as bare tokens.
    pub fn token_text(&self) -> Option<&str> {
        match self.field(field::TEXT)? {
            FieldValue::Scalar(s) => s.as_str(),
            _ => None,
        }
    }

    /// All child nodes under `name`, whether stored as `Node` or `List`.
    pub fn nodes_under(&self, name: &str) -> Vec<&SyntaxNode> {
        match self.field(name) {
            Some(FieldValue::Node(n)) => vec![n],
            Some(FieldValue::List(items)) => {
                items.iter().filter_map(FieldValue::as_node).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Remove and return the field named `name`.
    pub fn take_field(&mut self, name: &str) -> Option<FieldValue> {
        let idx = self.fields.iter().position(|(n, _)| *n == name)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn remove_field(&mut self, name: &str) -> bool {
        self.take_field(name).is_some()
    }

    /// Remove the field named `name` and return its values as a vector:
    /// a `Node` or `Scalar` becomes a singleton, a `List` its items, an
    /// absent field the empty vector.
    pub fn take_values(&mut self, name: &str) -> Vec<FieldValue> {
        match self.take_field(name) {
            None => Vec::new(),
            Some(FieldValue::List(items)) => items,
            Some(value) => vec![value],
        }
    }

    /// Store values under `name` following the one/many convention; an
    /// empty vector removes the field. Keeps the field's position when it
    /// already exists, appends otherwise.
    pub fn set_field_values(&mut self, name: &'static str, mut values: Vec<FieldValue>) {
        let value = match values.len() {
            0 => {
                self.remove_field(name);
                return;
            }
            1 => values.remove(0),
            _ => FieldValue::List(values),
        };
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Store child nodes under `name` following the one/many convention.
    pub fn set_node_field(&mut self, name: &'static str, nodes: Vec<SyntaxNode>) {
        self.set_field_values(name, nodes.into_iter().map(FieldValue::node).collect());
    }

    /// Deep equality ignoring spans. This is the notion of equality behind
    /// normalization idempotence and canonical-tree comparison.
    pub fn structural_eq(&self, other: &SyntaxNode) -> bool {
        if self.kind != other.kind || self.fields.len() != other.fields.len() {
            return false;
        }
        self.fields
            .iter()
            .zip(other.fields.iter())
            .all(|((na, va), (nb, vb))| na == nb && field_value_eq(va, vb))
    }

    /// Flatten the field map into dotted-path leaves in field order.
    /// `List` structure is expanded into `path.N` keys; `Node` values stay
    /// leaves and are masked, since subtrees are compared structurally by
    /// the differ, not through this map.
    pub fn flatten(&self) -> Vec<(String, FlatValue<'_>)> {
        let mut flat = Vec::new();
        for (name, value) in &self.fields {
            flatten_value(name, value, &mut flat);
        }
        flat
    }
}

fn field_value_eq(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        (FieldValue::Scalar(x), FieldValue::Scalar(y)) => x == y,
        (FieldValue::Node(x), FieldValue::Node(y)) => x.structural_eq(y),
        (FieldValue::List(xs), FieldValue::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| field_value_eq(x, y))
        }
        _ => false,
    }
}

fn flatten_value<'a>(path: &str, value: &'a FieldValue, out: &mut Vec<(String, FlatValue<'a>)>) {
    match value {
        FieldValue::Scalar(s) => out.push((path.to_string(), FlatValue::Scalar(s))),
        FieldValue::Node(_) => out.push((path.to_string(), FlatValue::Node)),
        FieldValue::List(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_value(&format!("{path}.{i}"), item, out);
            }
        }
    }
}

/// The differ's quick-reject check: field paths, path order, and scalar
/// leaves must match exactly; node-typed leaves only have to line up
/// positionally. A `List` length mismatch surfaces here as differing key
/// sets, which is what forces whole-parent replacement for sequence edits.
pub fn masked_fields_eq(a: &SyntaxNode, b: &SyntaxNode) -> bool {
    a.flatten() == b.flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds;
    use pretty_assertions::assert_eq;

    fn var(name: &str, span: Option<Span>) -> SyntaxNode {
        let mut node = match span {
            Some(s) => SyntaxNode::new(kinds::VARIABLE_NAME, s),
            None => SyntaxNode::synthetic(kinds::VARIABLE_NAME),
        };
        node.set_node_field(
            field::CHILDREN,
            vec![SyntaxNode::synthetic_token(kinds::NAME, name)],
        );
        node
    }

    fn concat(left: SyntaxNode, right: SyntaxNode) -> SyntaxNode {
        let mut node = SyntaxNode::synthetic(kinds::BINARY_EXPRESSION);
        node.fields.push((field::LEFT, FieldValue::node(left)));
        node.fields
            .push((field::OPERATOR, FieldValue::Scalar(Scalar::str("."))));
        node.fields.push((field::RIGHT, FieldValue::node(right)));
        node
    }

    #[test]
    fn test_structural_eq_ignores_spans() {
        let a = var("x", Some(Span::new(0, 2)));
        let b = var("x", None);
        assert!(a.structural_eq(&b));
    }

    #[test]
    fn test_structural_eq_detects_scalar_difference() {
        let a = var("x", None);
        let b = var("y", None);
        assert!(!a.structural_eq(&b));
    }

    #[test]
    fn test_set_node_field_one_many_convention() {
        let mut node = SyntaxNode::synthetic(kinds::ECHO_STATEMENT);
        node.set_node_field(field::CHILDREN, vec![var("a", None)]);
        assert!(matches!(
            node.field(field::CHILDREN),
            Some(FieldValue::Node(_))
        ));

        node.set_node_field(field::CHILDREN, vec![var("a", None), var("b", None)]);
        assert!(matches!(
            node.field(field::CHILDREN),
            Some(FieldValue::List(items)) if items.len() == 2
        ));

        node.set_node_field(field::CHILDREN, Vec::new());
        assert!(node.field(field::CHILDREN).is_none());
    }

    #[test]
    fn test_flatten_expands_lists_and_masks_nodes() {
        let node = concat(var("a", None), var("b", None));
        let flat = node.flatten();
        let paths: Vec<&str> = flat.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["left", "operator", "right"]);
        assert_eq!(flat[0].1, FlatValue::Node);
        assert_eq!(flat[1].1, FlatValue::Scalar(&Scalar::str(".")));
    }

    #[test]
    fn test_masked_eq_ignores_subtree_contents() {
        let a = concat(var("a", None), var("b", None));
        let b = concat(var("x", None), var("y", None));
        assert!(masked_fields_eq(&a, &b));
    }

    #[test]
    fn test_masked_eq_rejects_list_length_mismatch() {
        let mut a = SyntaxNode::synthetic(kinds::COMPOUND_STATEMENT);
        a.set_node_field(field::CHILDREN, vec![var("a", None), var("b", None)]);
        let mut b = SyntaxNode::synthetic(kinds::COMPOUND_STATEMENT);
        b.set_node_field(
            field::CHILDREN,
            vec![var("a", None), var("b", None), var("c", None)],
        );
        assert!(!masked_fields_eq(&a, &b));
    }

    #[test]
    fn test_masked_eq_rejects_operator_difference() {
        let a = concat(var("a", None), var("b", None));
        let mut b = concat(var("a", None), var("b", None));
        b.fields[1].1 = FieldValue::Scalar(Scalar::str("&&"));
        assert!(!masked_fields_eq(&a, &b));
    }
}
