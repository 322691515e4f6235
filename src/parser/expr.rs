//! Expression grammar: precedence climbing from assignment down to primary.
//!
//! Every function returns `Result`; errors unwind to the statement boundary
//! in `stmt::parse_statement`, which is the only recovery point.

use crate::{
    ast::exprs::{
        AssignExpr, BaseLitExpr, BinaryExpr, DataTypeExpr, Expr, IdExpr, ParenExpr, UnaryExpr,
    },
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

const ASSIGN_TOKENS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::AndAssign,
    TokenKind::OrAssign,
    TokenKind::RshAssign,
    TokenKind::LshAssign,
    TokenKind::DivAssign,
    TokenKind::ModAssign,
    TokenKind::MulAssign,
    TokenKind::PlusAssign,
    TokenKind::MinusAssign,
    TokenKind::XorAssign,
];

const UNARY_TOKENS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::LogNot,
    TokenKind::BitNot,
];

const PRIMARY_TOKENS: &[TokenKind] = &[TokenKind::LParen, TokenKind::Id, TokenKind::Int];

const DATA_TYPE_TOKENS: &[TokenKind] = &[
    TokenKind::Void,
    TokenKind::I8,
    TokenKind::I16,
    TokenKind::I32,
    TokenKind::I64,
];

pub fn parse_expression(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_assign(parser)
}

// Right-associative: the value side re-enters the full expression grammar,
// so `a = b = c` nests as `a = (b = c)`.
fn parse_expr_assign(parser: &mut Parser) -> Result<Expr, ParseError> {
    let target = parse_expr_log_or(parser)?;
    if !parser.matches_any(ASSIGN_TOKENS) {
        return Ok(target);
    }

    let operation = parser.advance();
    let value = parse_expression(parser)?;
    Ok(Expr::Assign(AssignExpr {
        operation,
        target: Box::new(target),
        value: Box::new(value),
    }))
}

fn parse_expr_log_or(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(parser, &[TokenKind::LogOr], parse_expr_log_and)
}

fn parse_expr_log_and(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(parser, &[TokenKind::LogAnd], parse_expr_bit_or)
}

fn parse_expr_bit_or(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(parser, &[TokenKind::BitOr], parse_expr_xor)
}

fn parse_expr_xor(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(parser, &[TokenKind::Xor], parse_expr_bit_and)
}

fn parse_expr_bit_and(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(parser, &[TokenKind::BitAnd], parse_expr_equ)
}

fn parse_expr_equ(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(
        parser,
        &[TokenKind::Equal, TokenKind::NotEqual],
        parse_expr_rel,
    )
}

fn parse_expr_rel(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(
        parser,
        &[
            TokenKind::Grt,
            TokenKind::GrtEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ],
        parse_expr_shift,
    )
}

fn parse_expr_shift(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(
        parser,
        &[TokenKind::RShift, TokenKind::LShift],
        parse_expr_add,
    )
}

fn parse_expr_add(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(parser, &[TokenKind::Plus, TokenKind::Minus], parse_expr_mul)
}

fn parse_expr_mul(parser: &mut Parser) -> Result<Expr, ParseError> {
    parse_expr_binary(
        parser,
        &[TokenKind::Mul, TokenKind::Div, TokenKind::Mod],
        parse_expr_unary,
    )
}

// The operand is a primary, not another unary: `- -x` does not parse.
fn parse_expr_unary(parser: &mut Parser) -> Result<Expr, ParseError> {
    if !parser.matches_any(UNARY_TOKENS) {
        return parse_expr_primary(parser);
    }

    let operation = parser.advance();
    let value = parse_expr_primary(parser)?;
    Ok(Expr::Unary(UnaryExpr {
        operation,
        value: Box::new(value),
    }))
}

fn parse_expr_primary(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.consume(PRIMARY_TOKENS, ParseErrorKind::ExpectedPrimary)?;
    if token.is(TokenKind::LParen) {
        return parse_expr_paren(parser);
    }
    if token.is(TokenKind::Id) {
        return Ok(Expr::Id(IdExpr { target: token }));
    }
    parse_expr_base_lit(parser, token)
}

// `INT` or `INT $ TYPE` for a literal with an explicit type.
fn parse_expr_base_lit(parser: &mut Parser, target: Token) -> Result<Expr, ParseError> {
    if !parser.matches(TokenKind::Cast) {
        return Ok(Expr::BaseLit(BaseLitExpr {
            target,
            data_type: None,
        }));
    }

    parser.advance();
    let data_type = parser.consume(DATA_TYPE_TOKENS, ParseErrorKind::ExpectedLitType)?;
    Ok(Expr::BaseLit(BaseLitExpr {
        target,
        data_type: Some(Box::new(Expr::DataType(DataTypeExpr { target: data_type }))),
    }))
}

fn parse_expr_paren(parser: &mut Parser) -> Result<Expr, ParseError> {
    let value = parse_expression(parser)?;
    parser.consume(&[TokenKind::RParen], ParseErrorKind::ExpectedRParen)?;
    Ok(Expr::Paren(ParenExpr {
        value: Box::new(value),
    }))
}

pub fn parse_expr_data_type(parser: &mut Parser) -> Result<Expr, ParseError> {
    let target = parser.consume(DATA_TYPE_TOKENS, ParseErrorKind::ExpectedDataType)?;
    Ok(Expr::DataType(DataTypeExpr { target }))
}

fn parse_expr_binary(
    parser: &mut Parser,
    types: &[TokenKind],
    next_value: fn(&mut Parser) -> Result<Expr, ParseError>,
) -> Result<Expr, ParseError> {
    let mut result = next_value(parser)?;
    while parser.matches_any(types) {
        let operation = parser.advance();
        let rhs = next_value(parser)?;
        result = Expr::Binary(BinaryExpr {
            operation,
            lhs: Box::new(result),
            rhs: Box::new(rhs),
        });
    }
    Ok(result)
}
