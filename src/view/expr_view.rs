use crate::ast::exprs::{
    AssignExpr, BaseLitExpr, BinaryExpr, DataTypeExpr, ExprVisitor, IdExpr, ParenExpr, UnaryExpr,
};

use super::indent;

/// Renders an expression subtree; the visitor input is the nesting depth.
pub struct ExprView;

impl ExprVisitor<usize, String> for ExprView {
    fn visit_expr_assign(&mut self, node: &AssignExpr, deep: usize) -> String {
        let space = indent(deep);
        let target = self.visit_expr(&node.target, deep + 1);
        let value = self.visit_expr(&node.value, deep + 1);
        format!(
            "{space}ExprAssign {{\n{space}  {},\n{target},\n{value}\n{space}}}",
            node.operation
        )
    }

    fn visit_expr_binary(&mut self, node: &BinaryExpr, deep: usize) -> String {
        let space = indent(deep);
        let lhs = self.visit_expr(&node.lhs, deep + 1);
        let rhs = self.visit_expr(&node.rhs, deep + 1);
        format!(
            "{space}ExprBinary {{\n{space}  {},\n{lhs},\n{rhs}\n{space}}}",
            node.operation
        )
    }

    fn visit_expr_unary(&mut self, node: &UnaryExpr, deep: usize) -> String {
        let space = indent(deep);
        let value = self.visit_expr(&node.value, deep + 1);
        format!(
            "{space}ExprUnary {{\n{space}  {},\n{value}\n{space}}}",
            node.operation
        )
    }

    fn visit_expr_paren(&mut self, node: &ParenExpr, deep: usize) -> String {
        let space = indent(deep);
        let value = self.visit_expr(&node.value, deep + 1);
        format!("{space}ExprParen {{\n{value}\n{space}}}")
    }

    fn visit_expr_base_lit(&mut self, node: &BaseLitExpr, deep: usize) -> String {
        let space = indent(deep);
        match &node.data_type {
            Some(data_type) => format!(
                "{space}ExprBaseLit {{\n{space}  {},\n{}\n{space}}}",
                node.target,
                self.visit_expr(data_type, deep + 1)
            ),
            None => format!("{space}ExprBaseLit {{ {} }}", node.target),
        }
    }

    fn visit_expr_id(&mut self, node: &IdExpr, deep: usize) -> String {
        format!("{}ExprId {{ {} }}", indent(deep), node.target)
    }

    fn visit_expr_data_type(&mut self, node: &DataTypeExpr, deep: usize) -> String {
        format!("{}ExprDataType {{ {} }}", indent(deep), node.target)
    }
}
