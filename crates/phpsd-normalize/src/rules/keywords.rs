//! Case-folding of the nullary literal keywords

use phpsd_syntax::kinds::{self, field};
use phpsd_syntax::{FieldValue, Scalar, SyntaxNode};

/// `TRUE`, `False`, `NULL` and friends all mean their lowercase form.
pub(crate) fn fold_literal_keywords(mut node: SyntaxNode) -> SyntaxNode {
    if node.kind != kinds::BOOLEAN && node.kind != kinds::NULL {
        return node;
    }
    if let Some(FieldValue::Scalar(Scalar::Str(text))) = node.field_mut(field::TEXT) {
        *text = text.to_ascii_lowercase();
    }
    node
}
