use crate::lexer::tokens::Token;

/// Expression kinds, one per `Expr` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprType {
    Assign,
    Binary,
    Unary,
    Paren,
    BaseLit,
    Id,
    DataType,
}

/// An expression node. The variant set is closed so every traversal can be
/// checked for exhaustiveness at compile time.
#[derive(Debug, Clone)]
pub enum Expr {
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Paren(ParenExpr),
    BaseLit(BaseLitExpr),
    Id(IdExpr),
    DataType(DataTypeExpr),
}

impl Expr {
    pub fn kind(&self) -> ExprType {
        match self {
            Expr::Assign(_) => ExprType::Assign,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Paren(_) => ExprType::Paren,
            Expr::BaseLit(_) => ExprType::BaseLit,
            Expr::Id(_) => ExprType::Id,
            Expr::DataType(_) => ExprType::DataType,
        }
    }

    pub fn is(&self, kind: ExprType) -> bool {
        self.kind() == kind
    }
}

/// Assignment expression (e.g. `a = b`, `a += b`).
///
/// The target is lvalue-shaped by convention only; the grammar does not
/// enforce it structurally.
#[derive(Debug, Clone)]
pub struct AssignExpr {
    pub operation: Token,
    pub target: Box<Expr>,
    pub value: Box<Expr>,
}

/// Binary operation between two expressions (e.g. `a + b`).
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub operation: Token,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

/// Prefix operation on a primary expression (e.g. `-x`, `!x`).
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operation: Token,
    pub value: Box<Expr>,
}

/// Parenthesized expression. Kept for display fidelity, not semantics.
#[derive(Debug, Clone)]
pub struct ParenExpr {
    pub value: Box<Expr>,
}

/// Integer literal, optionally carrying an explicit literal type
/// (e.g. `255 $ i8`).
#[derive(Debug, Clone)]
pub struct BaseLitExpr {
    pub target: Token,
    pub data_type: Option<Box<Expr>>,
}

/// Identifier expression.
#[derive(Debug, Clone)]
pub struct IdExpr {
    pub target: Token,
}

/// Type keyword used in expression position (`void`, `i8`, ..., `i64`).
#[derive(Debug, Clone)]
pub struct DataTypeExpr {
    pub target: Token,
}

/// Traversal over expression nodes: one handler per variant, plus the
/// provided `visit_expr` dispatcher that matches on the node kind.
pub trait ExprVisitor<Input, Output> {
    fn visit_expr_assign(&mut self, node: &AssignExpr, value: Input) -> Output;
    fn visit_expr_binary(&mut self, node: &BinaryExpr, value: Input) -> Output;
    fn visit_expr_unary(&mut self, node: &UnaryExpr, value: Input) -> Output;
    fn visit_expr_paren(&mut self, node: &ParenExpr, value: Input) -> Output;
    fn visit_expr_base_lit(&mut self, node: &BaseLitExpr, value: Input) -> Output;
    fn visit_expr_id(&mut self, node: &IdExpr, value: Input) -> Output;
    fn visit_expr_data_type(&mut self, node: &DataTypeExpr, value: Input) -> Output;

    fn visit_expr(&mut self, node: &Expr, value: Input) -> Output {
        match node {
            Expr::Assign(expr) => self.visit_expr_assign(expr, value),
            Expr::Binary(expr) => self.visit_expr_binary(expr, value),
            Expr::Unary(expr) => self.visit_expr_unary(expr, value),
            Expr::Paren(expr) => self.visit_expr_paren(expr, value),
            Expr::BaseLit(expr) => self.visit_expr_base_lit(expr, value),
            Expr::Id(expr) => self.visit_expr_id(expr, value),
            Expr::DataType(expr) => self.visit_expr_data_type(expr, value),
        }
    }
}
