//! Debug tree renderers for the AST.
//!
//! These are the visitor-contract consumers used by the driver to dump the
//! parsed tree: each node renders as an indented `ExprBinary { ... }`-style
//! record. Read-only; the views never mutate or validate the tree.

pub mod expr_view;
pub mod stmt_view;

pub(crate) fn indent(deep: usize) -> String {
    "  ".repeat(deep)
}
