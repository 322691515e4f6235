//! Integration tests for the lex-then-parse pipeline.
//!
//! These tests run complete programs through both stages and check the
//! resulting token streams, syntax trees, and reported diagnostics.

use tarn::{
    ast::{
        exprs::Expr,
        stmts::{Stmt, StmtType, StmtVisitor},
    },
    errors::errors::{BufferQueue, LexErrorKind, ParseErrorKind},
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::Parser,
    view::stmt_view::StmtView,
};

struct Analysis {
    tokens: Vec<tarn::lexer::tokens::Token>,
    statements: Vec<Stmt>,
    lex_errors: BufferQueue<LexErrorKind>,
    parse_errors: BufferQueue<ParseErrorKind>,
}

fn analyze(source: &str) -> Analysis {
    let mut lex_errors = BufferQueue::new();
    let tokens = {
        let mut lexer = Lexer::new(&mut lex_errors, source);
        lexer.scan_all()
    };

    let mut parse_errors = BufferQueue::new();
    let statements = {
        let mut parser = Parser::new(&mut parse_errors, &tokens);
        parser.parse()
    };

    Analysis {
        tokens,
        statements,
        lex_errors,
        parse_errors,
    }
}

#[test]
fn test_declaration_and_loop_scenario() {
    let analysis = analyze("def mut x: i32 = 1; while (x) { x = x - 1; }");
    assert!(analysis.lex_errors.errors().is_empty());
    assert!(analysis.parse_errors.errors().is_empty());

    // def mut x : i32 = 1 ; while ( x ) { x = x - 1 ; } Eof
    assert_eq!(analysis.tokens.len(), 21);
    assert!(analysis.tokens.last().unwrap().eof());

    assert_eq!(analysis.statements.len(), 2);

    let Stmt::Local(local) = &analysis.statements[0] else {
        panic!("expected a local declaration first");
    };
    assert_eq!(local.content.len(), 1);
    let variable = &local.content[0];
    assert_eq!(variable.id.value, "x");
    assert!(variable.mutable);
    let Expr::DataType(data_type) = &variable.data_type else {
        panic!("expected a data type");
    };
    assert_eq!(data_type.target.kind, TokenKind::I32);
    let Some(Expr::BaseLit(value)) = &variable.value else {
        panic!("expected a literal initializer");
    };
    assert_eq!(value.target.value, "1");

    let Stmt::While(stmt) = &analysis.statements[1] else {
        panic!("expected a while loop second");
    };
    let Expr::Paren(condition) = &stmt.condition else {
        panic!("expected a parenthesized condition");
    };
    assert!(matches!(*condition.value, Expr::Id(_)));

    let Stmt::Block(body) = stmt.body.as_ref() else {
        panic!("expected a block body");
    };
    assert_eq!(body.content.len(), 1);
    let Stmt::Expr(update) = &body.content[0] else {
        panic!("expected an expression statement in the body");
    };
    let Expr::Assign(assign) = &update.value else {
        panic!("expected an assignment");
    };
    assert!(matches!(*assign.value, Expr::Binary(_)));
}

#[test]
fn test_program_with_every_statement_form() {
    let source = "\
use math;
global mut total: i64 = 0;
def a: i32 = 1 $ i32, mut b: i32;
if a { total = total + 1; } else { }
while !a { b = b << 1; }
return b % 2;
";
    let analysis = analyze(source);
    assert!(analysis.lex_errors.errors().is_empty());
    assert!(analysis.parse_errors.errors().is_empty());

    let kinds: Vec<StmtType> = analysis
        .statements
        .iter()
        .map(|stmt| stmt.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            StmtType::Use,
            StmtType::Global,
            StmtType::Local,
            StmtType::If,
            StmtType::While,
            StmtType::Return,
        ]
    );
}

#[test]
fn test_unknown_character_then_parse_error() {
    // The `@` is dropped from the stream, so the parser then misses the
    // initializer expression.
    let analysis = analyze("def x: i32 = @;");

    assert_eq!(analysis.lex_errors.errors().len(), 1);
    assert_eq!(
        analysis.lex_errors.errors()[0].kind(),
        LexErrorKind::UnknownCharacter
    );

    assert_eq!(analysis.parse_errors.errors().len(), 1);
    assert_eq!(
        analysis.parse_errors.errors()[0].kind(),
        ParseErrorKind::ExpectedPrimary
    );
    assert!(analysis.statements.is_empty());
}

#[test]
fn test_one_diagnostic_per_broken_statement() {
    let analysis = analyze("return ;; def ok: i8 = 1;");
    assert_eq!(analysis.parse_errors.errors().len(), 1);
    assert_eq!(analysis.statements.len(), 1);
    assert!(analysis.statements[0].is(StmtType::Local));
}

#[test]
fn test_token_round_trip() {
    let source = "global mut v: i64 = (1 + 2) * 3;\nuse net;";
    let analysis = analyze(source);
    assert!(analysis.lex_errors.errors().is_empty());

    let rebuilt: String = analysis
        .tokens
        .iter()
        .map(|token| token.value.as_str())
        .collect();
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(rebuilt, stripped);
}

#[test]
fn test_tree_rendering() {
    let analysis = analyze("if x { return 1; }");
    assert!(analysis.parse_errors.errors().is_empty());

    let rendered = StmtView.visit_stmt(&analysis.statements[0], 0);
    assert_eq!(
        rendered,
        "StmtIf {\n  ExprId { Id `x` [1:4] }\n  StmtBlock {\n    StmtReturn {\n      ExprBaseLit { Int `1` [1:15] }\n    }\n  }\n}"
    );
}
