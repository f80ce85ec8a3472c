//! Node kind and field name constants for the tree-sitter-php grammar
//!
//! The parser adapter stores kinds and field names as `&'static str`
//! borrowed from the grammar tables; rules and the printer match against
//! these constants so the grammar vocabulary lives in one place. A few
//! entries (noted below) name shapes the normalizer synthesizes rather than
//! shapes the parser emits.

pub const PROGRAM: &str = "program";
pub const PHP_TAG: &str = "php_tag";
pub const TEXT: &str = "text";
pub const TEXT_INTERPOLATION: &str = "text_interpolation";
pub const COMMENT: &str = "comment";

pub const EXPRESSION_STATEMENT: &str = "expression_statement";
pub const COMPOUND_STATEMENT: &str = "compound_statement";
pub const COLON_BLOCK: &str = "colon_block";
pub const ECHO_STATEMENT: &str = "echo_statement";
pub const PRINT_INTRINSIC: &str = "print_intrinsic";
pub const EXIT_STATEMENT: &str = "exit_statement";
pub const RETURN_STATEMENT: &str = "return_statement";

pub const IF_STATEMENT: &str = "if_statement";
pub const ELSE_IF_CLAUSE: &str = "else_if_clause";
pub const ELSE_CLAUSE: &str = "else_clause";
pub const WHILE_STATEMENT: &str = "while_statement";
pub const FOR_STATEMENT: &str = "for_statement";
pub const FOREACH_STATEMENT: &str = "foreach_statement";

pub const BINARY_EXPRESSION: &str = "binary_expression";
pub const SEQUENCE_EXPRESSION: &str = "sequence_expression";
pub const UNARY_OP_EXPRESSION: &str = "unary_op_expression";
pub const ASSIGNMENT_EXPRESSION: &str = "assignment_expression";
pub const PARENTHESIZED_EXPRESSION: &str = "parenthesized_expression";
pub const CAST_EXPRESSION: &str = "cast_expression";
pub const CAST_TYPE: &str = "cast_type";
pub const FUNCTION_CALL_EXPRESSION: &str = "function_call_expression";
pub const MEMBER_ACCESS_EXPRESSION: &str = "member_access_expression";
pub const ARGUMENTS: &str = "arguments";
pub const ARGUMENT: &str = "argument";

/// Single-quoted string literal; also the canonical literal shape the
/// normalizer rewrites every plain string into (`value` scalar field).
pub const STRING: &str = "string";
pub const ENCAPSED_STRING: &str = "encapsed_string";
pub const STRING_CONTENT: &str = "string_content";
pub const ESCAPE_SEQUENCE: &str = "escape_sequence";

pub const BOOLEAN: &str = "boolean";
pub const NULL: &str = "null";
pub const INTEGER: &str = "integer";
pub const FLOAT: &str = "float";
pub const NAME: &str = "name";
pub const VARIABLE_NAME: &str = "variable_name";

pub const ARRAY_CREATION_EXPRESSION: &str = "array_creation_expression";
pub const ARRAY_ELEMENT_INITIALIZER: &str = "array_element_initializer";

pub const FUNCTION_DEFINITION: &str = "function_definition";
pub const METHOD_DECLARATION: &str = "method_declaration";
pub const PROPERTY_DECLARATION: &str = "property_declaration";
pub const ANONYMOUS_FUNCTION: &str = "anonymous_function_creation_expression";
pub const ARROW_FUNCTION: &str = "arrow_function";
pub const CLASS_DECLARATION: &str = "class_declaration";
pub const DECLARATION_LIST: &str = "declaration_list";
pub const FORMAL_PARAMETERS: &str = "formal_parameters";
pub const SIMPLE_PARAMETER: &str = "simple_parameter";
pub const VARIADIC_PARAMETER: &str = "variadic_parameter";
pub const PROPERTY_PROMOTION_PARAMETER: &str = "property_promotion_parameter";

pub const VISIBILITY_MODIFIER: &str = "visibility_modifier";
pub const STATIC_MODIFIER: &str = "static_modifier";
pub const ABSTRACT_MODIFIER: &str = "abstract_modifier";
pub const FINAL_MODIFIER: &str = "final_modifier";
pub const READONLY_MODIFIER: &str = "readonly_modifier";
pub const VAR_MODIFIER: &str = "var_modifier";

/// Grammar field names, plus the two synthesized ones (`children` for
/// unnamed children, `value` for canonical string literals).
pub mod field {
    pub const CHILDREN: &str = "children";
    pub const VALUE: &str = "value";
    pub const ELEMENTS: &str = "elements";
    pub const TEXT: &str = "text";

    pub const LEFT: &str = "left";
    pub const RIGHT: &str = "right";
    pub const OPERATOR: &str = "operator";
    pub const CONDITION: &str = "condition";
    pub const BODY: &str = "body";
    pub const ALTERNATIVE: &str = "alternative";
    pub const TYPE: &str = "type";
    pub const RETURN_TYPE: &str = "return_type";
    pub const NAME: &str = "name";
    pub const PARAMETERS: &str = "parameters";
}

/// Canonical ordering rank for member modifiers; the normalizer sorts
/// modifier lists so that source order never reads as a semantic change.
pub fn modifier_rank(kind: &str) -> u8 {
    match kind {
        VISIBILITY_MODIFIER => 0,
        STATIC_MODIFIER => 1,
        ABSTRACT_MODIFIER => 2,
        FINAL_MODIFIER => 3,
        READONLY_MODIFIER => 4,
        VAR_MODIFIER => 5,
        _ => 6,
    }
}

pub fn is_modifier(kind: &str) -> bool {
    kind.ends_with("_modifier")
}
