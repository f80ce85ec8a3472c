//! End-to-end normalization tests over parsed source
//!
//! Two sources that differ only cosmetically must normalize to
//! structurally equal trees; sources that differ in meaning must not.

use phpsd_normalize::{canonical_source, normalize};
use phpsd_syntax::parse_source;
use rstest::rstest;

fn canonical_tree(source: &str) -> phpsd_syntax::SyntaxNode {
    normalize(parse_source(source).expect("test source must parse").root)
}

fn assert_equivalent(a: &str, b: &str) {
    let ta = canonical_tree(a);
    let tb = canonical_tree(b);
    assert!(
        ta.structural_eq(&tb),
        "expected equivalent canonical trees\nleft:  {a}\nright: {b}\n{ta:#?}\nvs\n{tb:#?}"
    );
}

fn assert_distinct(a: &str, b: &str) {
    let ta = canonical_tree(a);
    let tb = canonical_tree(b);
    assert!(
        !ta.structural_eq(&tb),
        "expected distinct canonical trees\nleft:  {a}\nright: {b}"
    );
}

#[rstest]
#[case("<?php echo 'hi';\n")]
#[case("<?php echo \"Hello, $name!\";\n")]
#[case("<?php if ($a) { x(); } else { if ($b) { y(); } else { z(); } }\n")]
#[case("<?php echo $a, $b, $c;\n")]
#[case("<?php $x = array(1, 2, 'three');\n")]
#[case("<?php function f($x) { return $x . 'y' . 'z'; }\n")]
#[case("<?php if ($a and $b) echo 'both';\n")]
#[case("<?php exit;\n")]
#[case("<?php class C { function m() { return TRUE; } }\n")]
fn test_normalization_is_idempotent(#[case] source: &str) {
    let once = canonical_tree(source);
    let twice = normalize(once.clone());
    assert!(
        once.structural_eq(&twice),
        "second pass changed the tree for {source}"
    );
}

#[test]
fn test_interpolation_equals_concatenation() {
    assert_equivalent(
        "<?php echo \"Hello, $name!\";\n",
        "<?php echo 'Hello, ' . $name . '!';\n",
    );
}

#[test]
fn test_else_if_cascade_collapses() {
    assert_equivalent(
        "<?php if ($a) { x(); } else { if ($b) { y(); } else { z(); } }\n",
        "<?php if ($a) { x(); } elseif ($b) { y(); } else { z(); }\n",
    );
}

#[test]
fn test_quoting_style_is_cosmetic() {
    assert_equivalent("<?php echo 'hello';\n", "<?php echo \"hello\";\n");
}

#[test]
fn test_escape_decoding_matches_across_quoting() {
    assert_equivalent("<?php echo 'it\\'s';\n", "<?php echo \"it's\";\n");
}

#[test]
fn test_array_syntax_is_cosmetic() {
    assert_equivalent(
        "<?php $x = array(1, 2, 'k' => 3);\n",
        "<?php $x = [1, 2, 'k' => 3];\n",
    );
}

#[test]
fn test_worded_logical_operators_are_cosmetic() {
    assert_equivalent(
        "<?php if ($a and $b) { x(); }\n",
        "<?php if ($a && $b) { x(); }\n",
    );
    assert_equivalent(
        "<?php if ($a or $b) { x(); }\n",
        "<?php if ($a || $b) { x(); }\n",
    );
}

#[test]
fn test_concat_grouping_is_cosmetic() {
    assert_equivalent(
        "<?php echo 'a' . ('b' . 'c');\n",
        "<?php echo 'a' . 'b' . 'c';\n",
    );
}

#[test]
fn test_literal_keyword_case_is_cosmetic() {
    assert_equivalent(
        "<?php $x = TRUE; $y = False; $z = NULL;\n",
        "<?php $x = true; $y = false; $z = null;\n",
    );
}

#[test]
fn test_multi_echo_splits_to_match_separate_statements() {
    assert_equivalent(
        "<?php echo $a, $b;\n",
        "<?php echo $a; echo $b;\n",
    );
}

#[test]
fn test_print_statement_equals_echo() {
    assert_equivalent("<?php print $x;\n", "<?php echo $x;\n");
}

#[test]
fn test_braces_around_single_statement_are_cosmetic() {
    assert_equivalent(
        "<?php if ($a) x();\n",
        "<?php if ($a) { x(); }\n",
    );
}

#[test]
fn test_bare_exit_equals_exit_zero() {
    assert_equivalent("<?php exit;\n", "<?php exit(0);\n");
}

#[test]
fn test_type_annotations_are_erased() {
    assert_equivalent(
        "<?php function f(int $x): int { return $x; }\n",
        "<?php function f($x) { return $x; }\n",
    );
}

#[test]
fn test_member_visibility_defaults_to_public() {
    assert_equivalent(
        "<?php class C { function m() { return 1; } }\n",
        "<?php class C { public function m() { return 1; } }\n",
    );
}

#[test]
fn test_comments_are_cosmetic() {
    assert_equivalent(
        "<?php // greet\necho 'hi';\n",
        "<?php echo 'hi';\n",
    );
}

#[test]
fn test_different_literals_stay_distinct() {
    assert_distinct("<?php echo 'a';\n", "<?php echo 'b';\n");
}

#[test]
fn test_arithmetic_grouping_stays_distinct() {
    assert_distinct(
        "<?php $x = $a + ($b + $c);\n",
        "<?php $x = $a + $b + $c;\n",
    );
}

#[test]
fn test_statement_count_stays_distinct() {
    assert_distinct("<?php x();\n", "<?php x(); y();\n");
}

#[test]
fn test_canonical_source_renders_normal_form() {
    let out = canonical_source("<?php echo \"hello\";\n").unwrap();
    assert_eq!(out, "<?php\necho 'hello';\n");
}

#[test]
fn test_canonical_source_keeps_shebang() {
    let out = canonical_source("#!/usr/bin/env php\n<?php echo 1;\n").unwrap();
    assert!(out.starts_with("#!/usr/bin/env php\n<?php\n"));
}

#[test]
fn test_canonical_source_rejects_invalid_input() {
    assert!(canonical_source("<?php if (").is_err());
}
