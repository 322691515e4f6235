//! Unit tests for error records and diagnostics queues.

use crate::lexer::tokens::{Token, TokenKind};

use super::errors::{BufferQueue, ConsoleQueue, Error, ErrorQueue, LexErrorKind, ParseErrorKind};

fn sample_token() -> Token {
    Token::new(TokenKind::Id, "x".to_string(), 3, 7)
}

#[test]
fn test_error_carries_kind_and_target() {
    let error = Error::new(ParseErrorKind::ExpectedSemi, sample_token());
    assert_eq!(error.kind(), ParseErrorKind::ExpectedSemi);
    assert_eq!(error.target().value, "x");
    assert_eq!((error.target().line, error.target().col), (3, 7));
}

#[test]
fn test_error_display() {
    let error = Error::new(LexErrorKind::UnknownCharacter, sample_token());
    assert_eq!(
        error.to_string(),
        "Unknown character 'x'\n    ---> on line 3, column 7."
    );
}

#[test]
fn test_parse_error_kind_messages() {
    assert_eq!(
        ParseErrorKind::UnexpectedEof.to_string(),
        "Unexpected end of input"
    );
    assert_eq!(ParseErrorKind::ExpectedLParen.to_string(), "Expected '('");
    assert_eq!(ParseErrorKind::ExpectedLBrace.to_string(), "Expected '{'");
    assert_eq!(ParseErrorKind::ExpectedRBrace.to_string(), "Expected '}'");
    assert_eq!(
        ParseErrorKind::ExpectedConstValue.to_string(),
        "Expected a value in constant declaration"
    );
}

#[test]
fn test_buffer_queue_keeps_report_order() {
    let mut equeue = BufferQueue::new();
    equeue.report(Error::new(ParseErrorKind::ExpectedId, sample_token()));
    equeue.report(Error::new(ParseErrorKind::ExpectedSemi, sample_token()));

    assert_eq!(equeue.count(), 2);
    assert!(!equeue.is_full());
    assert_eq!(equeue.errors()[0].kind(), ParseErrorKind::ExpectedId);
    assert_eq!(equeue.errors()[1].kind(), ParseErrorKind::ExpectedSemi);
}

#[test]
fn test_console_queue_counts_errors() {
    let mut equeue = ConsoleQueue::new(0);
    assert!(equeue.is_empty());

    ErrorQueue::report(
        &mut equeue,
        Error::new(LexErrorKind::UnknownCharacter, sample_token()),
    );
    assert_eq!(equeue.count(), 1);
    assert!(!equeue.is_full());
}

#[test]
fn test_console_queue_fills_up_at_max_count() {
    let mut equeue = ConsoleQueue::new(2);
    for _ in 0..5 {
        ErrorQueue::report(
            &mut equeue,
            Error::new(ParseErrorKind::ExpectedPrimary, sample_token()),
        );
    }

    // Reports past the cap are dropped, not counted.
    assert_eq!(equeue.count(), 2);
    assert!(equeue.is_full());
}

#[test]
fn test_console_queue_unlimited_when_max_count_is_zero() {
    let mut equeue = ConsoleQueue::new(0);
    for _ in 0..100 {
        ErrorQueue::report(
            &mut equeue,
            Error::new(ParseErrorKind::ExpectedPrimary, sample_token()),
        );
    }
    assert_eq!(equeue.count(), 100);
    assert!(!equeue.is_full());
}
