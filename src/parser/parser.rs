//! The parser state and its token-cursor discipline.
//!
//! `Parser` owns nothing but a position into the borrowed token slice and
//! the injected diagnostics queue. The grammar itself lives in the `stmt`
//! and `expr` modules as free functions over `&mut Parser`; everything here
//! is the cursor plumbing those functions share.

use crate::{
    ast::stmts::Stmt,
    errors::errors::{Error, ErrorQueue, ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_statement;

/// Recursive-descent parser over a complete token sequence.
///
/// The sequence is expected to end with the `Eof` sentinel, as produced by
/// `Lexer::scan_all`.
pub struct Parser<'a> {
    errors: &'a mut dyn ErrorQueue<ParseErrorKind>,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(errors: &'a mut dyn ErrorQueue<ParseErrorKind>, tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            errors,
            tokens,
            pos: 0,
        }
    }

    /// Parses the whole token sequence into top-level statements.
    ///
    /// Statements that failed to parse are reported to the queue and do not
    /// appear in the result. Parsing stops early once the queue reports
    /// itself full.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut result = Vec::new();
        while !self.eof() && !self.errors.is_full() {
            if let Some(stmt) = parse_statement(self) {
                result.push(stmt);
            }
        }
        result
    }

    /// True at the `Eof` sentinel (or past the end of the slice).
    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len() || self.tokens[self.pos].eof()
    }

    pub(super) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(super) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(super) fn position(&self) -> usize {
        self.pos
    }

    /// Returns the current token and moves one position forward. At the
    /// sentinel it reports `UnexpectedEof` and stays put instead.
    pub(super) fn advance(&mut self) -> Token {
        let prev = self.current().clone();
        if self.eof() {
            self.errors
                .report(Error::new(ParseErrorKind::UnexpectedEof, prev.clone()));
        } else {
            self.pos += 1;
        }
        prev
    }

    pub(super) fn matches(&self, kind: TokenKind) -> bool {
        self.current().is(kind)
    }

    pub(super) fn matches_any(&self, kinds: &[TokenKind]) -> bool {
        self.current().is_one_of(kinds)
    }

    /// Consumes the current token if its kind is allowed; fails with the
    /// given error kind (without consuming) otherwise.
    pub(super) fn consume(
        &mut self,
        kinds: &[TokenKind],
        kind: ParseErrorKind,
    ) -> Result<Token, ParseError> {
        if !self.matches_any(kinds) {
            return Err(Error::new(kind, self.current().clone()));
        }
        Ok(self.advance())
    }

    pub(super) fn report(&mut self, error: ParseError) {
        self.errors.report(error);
    }

    /// Skips tokens until one of the given kinds (or the end) is reached.
    /// The synchronizing token itself is not consumed.
    pub(super) fn skip_until(&mut self, kinds: &[TokenKind]) {
        while !self.eof() && !self.matches_any(kinds) {
            self.pos += 1;
        }
    }
}
