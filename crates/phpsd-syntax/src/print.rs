//! Canonical source rendering
//!
//! Prints a (normalized) tree back to PHP text. Only the constructs the
//! normalizer rewrites need structural printing; anything else falls back
//! to slicing the node's span out of the original text. The diff path
//! never depends on printed output.

use crate::error::{Error, Result};
use crate::kinds::{self, field};
use crate::node::{FieldValue, SyntaxNode};

/// Render `root` (a `program` node) as canonical source text.
///
/// `source` is the text the tree was parsed from (shebang already
/// stripped); it backs the span-slice fallback for constructs outside the
/// canonical subset.
pub fn print_canonical(root: &SyntaxNode, source: &str) -> Result<String> {
    let mut printer = Printer {
        out: String::new(),
        source,
    };
    for child in root.nodes_under(field::CHILDREN) {
        if child.kind == kinds::PHP_TAG {
            printer.out.push_str("<?php\n");
        } else {
            printer.stmt(child, 0)?;
        }
    }
    Ok(printer.out)
}

struct Printer<'a> {
    out: String,
    source: &'a str,
}

impl Printer<'_> {
    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("    ");
        }
    }

    fn stmt(&mut self, node: &SyntaxNode, depth: usize) -> Result<()> {
        self.indent(depth);
        match node.kind {
            kinds::ECHO_STATEMENT => {
                self.out.push_str("echo ");
                self.expr_list(&node.nodes_under(field::CHILDREN))?;
                self.out.push_str(";\n");
            }
            kinds::EXPRESSION_STATEMENT => {
                self.expr_list(&node.nodes_under(field::CHILDREN))?;
                self.out.push_str(";\n");
            }
            kinds::RETURN_STATEMENT => {
                self.out.push_str("return");
                let values = node.nodes_under(field::CHILDREN);
                if !values.is_empty() {
                    self.out.push(' ');
                    self.expr_list(&values)?;
                }
                self.out.push_str(";\n");
            }
            kinds::EXIT_STATEMENT => {
                self.out.push_str("exit(");
                self.expr_list(&node.nodes_under(field::CHILDREN))?;
                self.out.push_str(");\n");
            }
            kinds::COMPOUND_STATEMENT => {
                self.out.push_str("{\n");
                for child in node.nodes_under(field::CHILDREN) {
                    self.stmt(child, depth + 1)?;
                }
                self.indent(depth);
                self.out.push_str("}\n");
            }
            kinds::IF_STATEMENT => {
                self.out.push_str("if ");
                self.expr(require(node, field::CONDITION)?)?;
                self.out.push(' ');
                self.branch_body(require(node, field::BODY)?, depth)?;
                for clause in node.nodes_under(field::ALTERNATIVE) {
                    match clause.kind {
                        kinds::ELSE_IF_CLAUSE => {
                            self.out.push_str(" elseif ");
                            self.expr(require(clause, field::CONDITION)?)?;
                            self.out.push(' ');
                            self.branch_body(require(clause, field::BODY)?, depth)?;
                        }
                        kinds::ELSE_CLAUSE => {
                            self.out.push_str(" else ");
                            self.branch_body(require(clause, field::BODY)?, depth)?;
                        }
                        _ => self.fallback(clause)?,
                    }
                }
                self.out.push('\n');
            }
            kinds::FUNCTION_DEFINITION => {
                self.out.push_str("function ");
                self.expr(require(node, field::NAME)?)?;
                self.parameters(node)?;
                self.out.push(' ');
                self.branch_body(require(node, field::BODY)?, depth)?;
                self.out.push('\n');
            }
            kinds::METHOD_DECLARATION => {
                self.modifiers(node)?;
                self.out.push_str("function ");
                self.expr(require(node, field::NAME)?)?;
                self.parameters(node)?;
                self.out.push(' ');
                self.branch_body(require(node, field::BODY)?, depth)?;
                self.out.push('\n');
            }
            kinds::PROPERTY_DECLARATION => {
                self.modifiers(node)?;
                let elements: Vec<&SyntaxNode> = node
                    .nodes_under(field::CHILDREN)
                    .into_iter()
                    .filter(|n| !kinds::is_modifier(n.kind))
                    .collect();
                self.expr_list(&elements)?;
                self.out.push_str(";\n");
            }
            kinds::CLASS_DECLARATION => {
                self.out.push_str("class ");
                self.expr(require(node, field::NAME)?)?;
                self.out.push_str(" {\n");
                if let Some(body) = node.node_field(field::BODY) {
                    for member in body.nodes_under(field::CHILDREN) {
                        self.stmt(member, depth + 1)?;
                    }
                }
                self.indent(depth);
                self.out.push_str("}\n");
            }
            _ => {
                self.fallback(node)?;
                self.out.push('\n');
            }
        }
        Ok(())
    }

    /// Bodies hang off the opening line: `if (...) {` ... `}` with no
    /// trailing newline, so clauses can chain on the same line.
    fn branch_body(&mut self, body: &SyntaxNode, depth: usize) -> Result<()> {
        if body.kind == kinds::COMPOUND_STATEMENT {
            self.out.push_str("{\n");
            for child in body.nodes_under(field::CHILDREN) {
                self.stmt(child, depth + 1)?;
            }
            self.indent(depth);
            self.out.push('}');
            Ok(())
        } else {
            self.fallback(body)
        }
    }

    fn parameters(&mut self, node: &SyntaxNode) -> Result<()> {
        self.out.push('(');
        if let Some(params) = node.node_field(field::PARAMETERS) {
            let entries = params.nodes_under(field::CHILDREN);
            for (i, param) in entries.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                match param.kind {
                    kinds::SIMPLE_PARAMETER => {
                        self.expr(require(param, field::NAME)?)?;
                        if let Some(default) = param.node_field("default_value") {
                            self.out.push_str(" = ");
                            self.expr(default)?;
                        }
                    }
                    _ => self.fallback(param)?,
                }
            }
        }
        self.out.push(')');
        Ok(())
    }

    fn modifiers(&mut self, node: &SyntaxNode) -> Result<()> {
        for child in node.nodes_under(field::CHILDREN) {
            if kinds::is_modifier(child.kind) {
                match child.token_text() {
                    Some(text) => self.out.push_str(text),
                    None => self.fallback(child)?,
                }
                self.out.push(' ');
            }
        }
        Ok(())
    }

    fn expr_list(&mut self, nodes: &[&SyntaxNode]) -> Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.expr(node)?;
        }
        Ok(())
    }

    fn expr(&mut self, node: &SyntaxNode) -> Result<()> {
        match node.kind {
            kinds::STRING => match node.field(field::VALUE) {
                Some(FieldValue::Scalar(value)) => {
                    let text = value.as_str().unwrap_or_default();
                    self.out.push('\'');
                    for c in text.chars() {
                        match c {
                            '\\' => self.out.push_str("\\\\"),
                            '\'' => self.out.push_str("\\'"),
                            _ => self.out.push(c),
                        }
                    }
                    self.out.push('\'');
                }
                _ => self.fallback(node)?,
            },
            kinds::VARIABLE_NAME => {
                let inner = node.nodes_under(field::CHILDREN);
                match inner.first().and_then(|n| n.token_text()) {
                    Some(name) => {
                        self.out.push('$');
                        self.out.push_str(name);
                    }
                    None => self.fallback(node)?,
                }
            }
            kinds::NAME
            | kinds::INTEGER
            | kinds::FLOAT
            | kinds::BOOLEAN
            | kinds::NULL
            | kinds::CAST_TYPE => match node.token_text() {
                Some(text) => self.out.push_str(text),
                None => self.fallback(node)?,
            },
            kinds::BINARY_EXPRESSION => {
                self.expr(require(node, field::LEFT)?)?;
                let op = node
                    .field(field::OPERATOR)
                    .and_then(|v| match v {
                        FieldValue::Scalar(s) => s.as_str(),
                        _ => None,
                    })
                    .unwrap_or("?");
                self.out.push(' ');
                self.out.push_str(op);
                self.out.push(' ');
                self.expr(require(node, field::RIGHT)?)?;
            }
            kinds::ASSIGNMENT_EXPRESSION => {
                self.expr(require(node, field::LEFT)?)?;
                self.out.push_str(" = ");
                self.expr(require(node, field::RIGHT)?)?;
            }
            kinds::PARENTHESIZED_EXPRESSION => {
                self.out.push('(');
                self.expr_list(&node.nodes_under(field::CHILDREN))?;
                self.out.push(')');
            }
            kinds::CAST_EXPRESSION => {
                self.out.push('(');
                match node.field(field::TYPE) {
                    Some(FieldValue::Node(cast_type)) => self.expr(cast_type)?,
                    Some(FieldValue::Scalar(s)) => {
                        self.out.push_str(s.as_str().unwrap_or_default())
                    }
                    _ => {}
                }
                self.out.push_str(") ");
                self.expr(require(node, field::VALUE)?)?;
            }
            kinds::ARRAY_CREATION_EXPRESSION => {
                self.out.push('[');
                self.expr_list(&node.nodes_under(field::ELEMENTS))?;
                self.out.push(']');
            }
            kinds::ARRAY_ELEMENT_INITIALIZER => {
                let parts = node.nodes_under(field::CHILDREN);
                match parts.as_slice() {
                    [value] => self.expr(value)?,
                    [key, value] => {
                        self.expr(key)?;
                        self.out.push_str(" => ");
                        self.expr(value)?;
                    }
                    _ => self.fallback(node)?,
                }
            }
            kinds::FUNCTION_CALL_EXPRESSION => {
                self.expr(require(node, "function")?)?;
                match node.node_field("arguments") {
                    Some(args) => {
                        self.out.push('(');
                        self.expr_list(&args.nodes_under(field::CHILDREN))?;
                        self.out.push(')');
                    }
                    None => self.out.push_str("()"),
                }
            }
            kinds::ARGUMENT => {
                self.expr_list(&node.nodes_under(field::CHILDREN))?;
            }
            kinds::PRINT_INTRINSIC => {
                self.out.push_str("print ");
                self.expr_list(&node.nodes_under(field::CHILDREN))?;
            }
            _ => self.fallback(node)?,
        }
        Ok(())
    }

    fn fallback(&mut self, node: &SyntaxNode) -> Result<()> {
        match node.span {
            Some(span) => {
                self.out.push_str(span.slice(self.source));
                Ok(())
            }
            None => Err(Error::Unprintable { kind: node.kind }),
        }
    }
}

fn require<'a>(node: &'a SyntaxNode, name: &str) -> Result<&'a SyntaxNode> {
    node.node_field(name).ok_or(Error::Unprintable { kind: node.kind })
}
