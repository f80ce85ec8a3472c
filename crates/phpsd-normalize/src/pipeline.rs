//! Bottom-up rule application

use phpsd_syntax::{FieldValue, ParsedSource, SyntaxNode, parse_source, print_canonical};

use crate::rules;

/// Normalize a tree: children are rewritten before each rule inspects the
/// parent, so every rule sees already-canonical subtrees.
///
/// Rules are pure functions consuming the node and returning its
/// replacement; unchanged substructure moves through untouched. The
/// pipeline is idempotent: a second pass is a structural no-op.
pub fn normalize(node: SyntaxNode) -> SyntaxNode {
    let node = map_child_nodes(node, normalize);
    rules::apply(node)
}

fn map_child_nodes(mut node: SyntaxNode, f: fn(SyntaxNode) -> SyntaxNode) -> SyntaxNode {
    for (_, value) in node.fields.iter_mut() {
        map_value(value, f);
    }
    node
}

fn map_value(value: &mut FieldValue, f: fn(SyntaxNode) -> SyntaxNode) {
    match value {
        FieldValue::Node(boxed) => {
            let node = std::mem::replace(boxed.as_mut(), SyntaxNode::synthetic(""));
            *boxed.as_mut() = f(node);
        }
        FieldValue::List(items) => {
            for item in items.iter_mut() {
                map_value(item, f);
            }
        }
        FieldValue::Scalar(_) => {}
    }
}

/// Parse, normalize, and print one source file; the shebang line is
/// stripped for parsing and reattached verbatim.
pub fn canonical_source(source: &str) -> phpsd_syntax::Result<String> {
    let ParsedSource {
        shebang,
        text,
        root,
    } = parse_source(source)?;
    let canonical = normalize(root);
    tracing::debug!(bytes = text.len(), "rendering canonical source");
    let printed = print_canonical(&canonical, &text)?;
    Ok(match shebang {
        Some(line) => format!("{line}{printed}"),
        None => printed,
    })
}
