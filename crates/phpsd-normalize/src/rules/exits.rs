//! Default status for bare exit statements

use phpsd_syntax::SyntaxNode;
use phpsd_syntax::kinds::{self, field};

/// `exit;` and `exit(0);` terminate identically; give the bare form its
/// implicit zero so the two spellings compare equal. The grammar has moved
/// exit between statement and expression productions over time, so the
/// match is on the kind prefix.
pub(crate) fn default_exit_status(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind.starts_with("exit_") && node.nodes_under(field::CHILDREN).is_empty() {
        node.set_node_field(
            field::CHILDREN,
            vec![SyntaxNode::synthetic_token(kinds::INTEGER, "0")],
        );
    }
    node
}
