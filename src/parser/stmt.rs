//! Statement grammar and the panic-mode recovery boundary.
//!
//! `parse_statement` is where expression and statement errors land: the
//! diagnostic is forwarded to the queue, the cursor skips to a
//! synchronizing token, and parsing resumes with the next statement.

use crate::{
    ast::stmts::{
        BlockStmt, ExprStmt, GlobalStmt, IfStmt, LocalStmt, ReturnStmt, Stmt, UseStmt, Variable,
        WhileStmt,
    },
    errors::errors::{Error, ParseError, ParseErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr_data_type, parse_expression},
    parser::Parser,
};

const SYNC_TOKENS: &[TokenKind] = &[
    TokenKind::Semi,
    TokenKind::RParen,
    TokenKind::LBrace,
    TokenKind::RBrace,
];

/// Parses one statement, or recovers from its failure.
///
/// On error the diagnostic is reported, the cursor synchronizes, and `None`
/// is returned; the broken statement costs exactly one diagnostic.
pub fn parse_statement(parser: &mut Parser) -> Option<Stmt> {
    let start = parser.position();
    let result = match parser.current_kind() {
        TokenKind::Return => parse_stmt_return(parser),
        TokenKind::LBrace => parse_stmt_block(parser),
        TokenKind::If => parse_stmt_if(parser),
        TokenKind::While => parse_stmt_while(parser),
        TokenKind::Def => parse_stmt_local(parser),
        TokenKind::Global => parse_stmt_global(parser),
        TokenKind::Use => parse_stmt_use(parser),
        _ => parse_stmt_expr(parser),
    };

    match result {
        Ok(stmt) => Some(stmt),
        Err(error) => {
            parser.report(error);
            parser.skip_until(SYNC_TOKENS);
            // The terminator of the broken statement belongs to it; eating
            // stray semicolons here keeps one error from becoming two.
            while parser.matches(TokenKind::Semi) {
                parser.advance();
            }
            // A statement that consumed nothing (stray `)` or `}`) must not
            // wedge the parse loop.
            if parser.position() == start && !parser.eof() {
                parser.advance();
            }
            None
        }
    }
}

fn parse_stmt_return(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();
    let value = parse_expression(parser)?;
    parser.consume(&[TokenKind::Semi], ParseErrorKind::ExpectedSemi)?;
    Ok(Stmt::Return(ReturnStmt { value }))
}

fn parse_stmt_block(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.consume(&[TokenKind::LBrace], ParseErrorKind::ExpectedLBrace)?;

    let mut content = Vec::new();
    while !parser.eof() && !parser.matches(TokenKind::RBrace) {
        if let Some(stmt) = parse_statement(parser) {
            content.push(stmt);
        }
    }

    parser.consume(&[TokenKind::RBrace], ParseErrorKind::ExpectedRBrace)?;
    Ok(Stmt::Block(BlockStmt { content }))
}

fn parse_stmt_if(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();
    let condition = parse_expression(parser)?;
    let main_body = parse_stmt_block(parser)?;

    if !parser.matches(TokenKind::Else) {
        return Ok(Stmt::If(IfStmt {
            condition,
            main_body: Box::new(main_body),
            else_body: None,
        }));
    }

    parser.advance();
    let else_body = parse_stmt_block(parser)?;
    Ok(Stmt::If(IfStmt {
        condition,
        main_body: Box::new(main_body),
        else_body: Some(Box::new(else_body)),
    }))
}

fn parse_stmt_while(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();
    let condition = parse_expression(parser)?;
    let body = parse_stmt_block(parser)?;
    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
    }))
}

fn parse_stmt_local(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let content = parse_variables(parser)?;
    Ok(Stmt::Local(LocalStmt { content }))
}

fn parse_stmt_global(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let content = parse_variables(parser)?;
    Ok(Stmt::Global(GlobalStmt { content }))
}

// Shared by `def` and `global`: one or more comma-separated declarations,
// terminated by `;`. A declaration without `mut` is a constant and must
// carry an initializer.
fn parse_variables(parser: &mut Parser) -> Result<Vec<Variable>, ParseError> {
    let mut content = Vec::new();
    loop {
        parser.advance(); // the introducing keyword, or the separating comma

        let mutable = parser.matches(TokenKind::Mut);
        if mutable {
            parser.advance();
        }

        let id = parser.consume(&[TokenKind::Id], ParseErrorKind::ExpectedId)?;
        parser.consume(&[TokenKind::Colon], ParseErrorKind::ExpectedColon)?;
        let data_type = parse_expr_data_type(parser)?;

        if !mutable && !parser.matches(TokenKind::Assign) {
            return Err(Error::new(
                ParseErrorKind::ExpectedConstValue,
                parser.current().clone(),
            ));
        }

        let value = if parser.matches(TokenKind::Assign) {
            parser.advance();
            Some(parse_expression(parser)?)
        } else {
            None
        };

        content.push(Variable {
            id,
            mutable,
            data_type,
            value,
        });

        if !parser.matches(TokenKind::Comma) {
            break;
        }
    }

    parser.consume(&[TokenKind::Semi], ParseErrorKind::ExpectedSemi)?;
    Ok(content)
}

fn parse_stmt_use(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.advance();
    let target = parser.consume(&[TokenKind::Id], ParseErrorKind::ExpectedId)?;
    parser.consume(&[TokenKind::Semi], ParseErrorKind::ExpectedSemi)?;
    Ok(Stmt::Use(UseStmt { target }))
}

fn parse_stmt_expr(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let value = parse_expression(parser)?;
    parser.consume(&[TokenKind::Semi], ParseErrorKind::ExpectedSemi)?;
    Ok(Stmt::Expr(ExprStmt { value }))
}
