//! AST (Abstract Syntax Tree) module.
//!
//! Defines the two closed node families the parser produces and the visitor
//! traits external traversals are written against:
//!
//! - exprs: expression nodes and `ExprVisitor`
//! - stmts: statement nodes and `StmtVisitor`
//!
//! Nodes are plain owned trees (every child has exactly one parent) and are
//! immutable after construction.

pub mod exprs;
pub mod stmts;
