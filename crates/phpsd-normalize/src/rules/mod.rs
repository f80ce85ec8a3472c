//! The canonicalization rule catalogue
//!
//! Each rule is a total function `SyntaxNode -> SyntaxNode`, identity when
//! inapplicable, individually idempotent. The application order is fixed:
//! interpolation expansion must precede chain re-association (so expanded
//! concatenations participate), and raw-text conversion must precede
//! output statement splitting.

mod arrays;
mod branches;
mod exits;
mod keywords;
mod operators;
mod output;
mod strings;
mod types;
mod visibility;

use phpsd_syntax::SyntaxNode;

pub(crate) fn apply(node: SyntaxNode) -> SyntaxNode {
    let node = keywords::fold_literal_keywords(node);
    let node = types::strip_type_annotations(node);
    let node = visibility::default_member_visibility(node);
    let node = strings::canonical_string_literals(node);
    let node = arrays::canonical_array_literals(node);
    let node = strings::expand_interpolation(node);
    let node = output::raw_text_to_echo(node);
    let node = operators::symbolic_logical_operators(node);
    let node = operators::reassociate_chains(node);
    let node = exits::default_exit_status(node);
    let node = output::normalize_output_statements(node);
    let node = branches::brace_branch_bodies(node);
    branches::collapse_else_chains(node)
}
