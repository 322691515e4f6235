use crate::ast::exprs::ExprVisitor;
use crate::ast::stmts::{
    BlockStmt, ExprStmt, GlobalStmt, IfStmt, LocalStmt, ReturnStmt, StmtVisitor, UseStmt, Variable,
    WhileStmt,
};

use super::{expr_view::ExprView, indent};

/// Renders a statement subtree; the visitor input is the nesting depth.
pub struct StmtView;

impl StmtView {
    fn visit_variable(&mut self, variable: &Variable, deep: usize) -> String {
        let space = indent(deep);
        let head = if variable.mutable { "mut " } else { "" };
        let data_type = ExprView.visit_expr(&variable.data_type, deep + 1);
        match &variable.value {
            Some(value) => format!(
                "{space}Variable {{\n{space}  {head}{},\n{data_type},\n{}\n{space}}}",
                variable.id,
                ExprView.visit_expr(value, deep + 1)
            ),
            None => format!(
                "{space}Variable {{\n{space}  {head}{},\n{data_type}\n{space}}}",
                variable.id
            ),
        }
    }

    fn visit_variables(&mut self, name: &str, content: &[Variable], deep: usize) -> String {
        let space = indent(deep);
        let variables = content
            .iter()
            .map(|variable| self.visit_variable(variable, deep + 1))
            .collect::<Vec<String>>()
            .join(",\n");
        format!("{space}{name} {{\n{variables}\n{space}}}")
    }
}

impl StmtVisitor<usize, String> for StmtView {
    fn visit_stmt_block(&mut self, node: &BlockStmt, deep: usize) -> String {
        let space = indent(deep);
        if node.content.is_empty() {
            return format!("{space}StmtBlock {{ }}");
        }
        let content = node
            .content
            .iter()
            .map(|stmt| self.visit_stmt(stmt, deep + 1))
            .collect::<Vec<String>>()
            .join("\n");
        format!("{space}StmtBlock {{\n{content}\n{space}}}")
    }

    fn visit_stmt_expr(&mut self, node: &ExprStmt, deep: usize) -> String {
        let space = indent(deep);
        let value = ExprView.visit_expr(&node.value, deep + 1);
        format!("{space}StmtExpr {{\n{value}\n{space}}}")
    }

    fn visit_stmt_return(&mut self, node: &ReturnStmt, deep: usize) -> String {
        let space = indent(deep);
        let value = ExprView.visit_expr(&node.value, deep + 1);
        format!("{space}StmtReturn {{\n{value}\n{space}}}")
    }

    fn visit_stmt_if(&mut self, node: &IfStmt, deep: usize) -> String {
        let space = indent(deep);
        let condition = ExprView.visit_expr(&node.condition, deep + 1);
        let main_body = self.visit_stmt(&node.main_body, deep + 1);
        match &node.else_body {
            Some(else_body) => format!(
                "{space}StmtIf {{\n{condition}\n{main_body}\n{}\n{space}}}",
                self.visit_stmt(else_body, deep + 1)
            ),
            None => format!("{space}StmtIf {{\n{condition}\n{main_body}\n{space}}}"),
        }
    }

    fn visit_stmt_while(&mut self, node: &WhileStmt, deep: usize) -> String {
        let space = indent(deep);
        let condition = ExprView.visit_expr(&node.condition, deep + 1);
        let body = self.visit_stmt(&node.body, deep + 1);
        format!("{space}StmtWhile {{\n{condition}\n{body}\n{space}}}")
    }

    fn visit_stmt_local(&mut self, node: &LocalStmt, deep: usize) -> String {
        self.visit_variables("StmtLocal", &node.content, deep)
    }

    fn visit_stmt_global(&mut self, node: &GlobalStmt, deep: usize) -> String {
        self.visit_variables("StmtGlobal", &node.content, deep)
    }

    fn visit_stmt_use(&mut self, node: &UseStmt, deep: usize) -> String {
        format!("{}StmtUse {{ {} }}", indent(deep), node.target)
    }
}
