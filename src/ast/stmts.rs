use crate::lexer::tokens::Token;

use super::exprs::Expr;

/// Statement kinds, one per `Stmt` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StmtType {
    Block,
    Expr,
    Return,
    If,
    While,
    Local,
    Global,
    Use,
}

/// A statement node. Like `Expr`, a closed variant set.
#[derive(Debug, Clone)]
pub enum Stmt {
    Block(BlockStmt),
    Expr(ExprStmt),
    Return(ReturnStmt),
    If(IfStmt),
    While(WhileStmt),
    Local(LocalStmt),
    Global(GlobalStmt),
    Use(UseStmt),
}

impl Stmt {
    pub fn kind(&self) -> StmtType {
        match self {
            Stmt::Block(_) => StmtType::Block,
            Stmt::Expr(_) => StmtType::Expr,
            Stmt::Return(_) => StmtType::Return,
            Stmt::If(_) => StmtType::If,
            Stmt::While(_) => StmtType::While,
            Stmt::Local(_) => StmtType::Local,
            Stmt::Global(_) => StmtType::Global,
            Stmt::Use(_) => StmtType::Use,
        }
    }

    pub fn is(&self, kind: StmtType) -> bool {
        self.kind() == kind
    }
}

/// Brace-delimited statement sequence. Insertion order is execution order;
/// the sequence may be empty.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub content: Vec<Stmt>,
}

/// An expression in statement position, terminated by `;`.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Expr,
}

/// `if` statement. Both bodies are blocks by construction.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub main_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

/// One declared variable inside a `def` or `global` statement.
///
/// A declaration without `mut` is a constant and always carries a value;
/// the parser rejects it otherwise.
#[derive(Debug, Clone)]
pub struct Variable {
    pub id: Token,
    pub mutable: bool,
    pub data_type: Expr,
    pub value: Option<Expr>,
}

/// `def` declaration list (one or more comma-separated variables).
#[derive(Debug, Clone)]
pub struct LocalStmt {
    pub content: Vec<Variable>,
}

/// `global` declaration list, same shape as `LocalStmt`.
#[derive(Debug, Clone)]
pub struct GlobalStmt {
    pub content: Vec<Variable>,
}

/// `use` module import marker.
#[derive(Debug, Clone)]
pub struct UseStmt {
    pub target: Token,
}

/// Traversal over statement nodes, mirroring `ExprVisitor`.
pub trait StmtVisitor<Input, Output> {
    fn visit_stmt_block(&mut self, node: &BlockStmt, value: Input) -> Output;
    fn visit_stmt_expr(&mut self, node: &ExprStmt, value: Input) -> Output;
    fn visit_stmt_return(&mut self, node: &ReturnStmt, value: Input) -> Output;
    fn visit_stmt_if(&mut self, node: &IfStmt, value: Input) -> Output;
    fn visit_stmt_while(&mut self, node: &WhileStmt, value: Input) -> Output;
    fn visit_stmt_local(&mut self, node: &LocalStmt, value: Input) -> Output;
    fn visit_stmt_global(&mut self, node: &GlobalStmt, value: Input) -> Output;
    fn visit_stmt_use(&mut self, node: &UseStmt, value: Input) -> Output;

    fn visit_stmt(&mut self, node: &Stmt, value: Input) -> Output {
        match node {
            Stmt::Block(stmt) => self.visit_stmt_block(stmt, value),
            Stmt::Expr(stmt) => self.visit_stmt_expr(stmt, value),
            Stmt::Return(stmt) => self.visit_stmt_return(stmt, value),
            Stmt::If(stmt) => self.visit_stmt_if(stmt, value),
            Stmt::While(stmt) => self.visit_stmt_while(stmt, value),
            Stmt::Local(stmt) => self.visit_stmt_local(stmt, value),
            Stmt::Global(stmt) => self.visit_stmt_global(stmt, value),
            Stmt::Use(stmt) => self.visit_stmt_use(stmt, value),
        }
    }
}
