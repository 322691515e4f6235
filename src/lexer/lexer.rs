use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::collections::HashMap;

use crate::errors::errors::{Error, ErrorQueue, LexErrorKind};

use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP};

// Symbols are at most three characters wide (`<<=`, `>>=`).
const MAX_SYMBOL_SIZE: usize = 3;

lazy_static! {
    static ref INT_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref ID_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();

    static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("$", TokenKind::Cast);
        map.insert("-", TokenKind::Minus);
        map.insert("+", TokenKind::Plus);
        map.insert("*", TokenKind::Mul);
        map.insert("/", TokenKind::Div);
        map.insert("%", TokenKind::Mod);
        map.insert("<", TokenKind::Less);
        map.insert("<=", TokenKind::LessEqual);
        map.insert(">", TokenKind::Grt);
        map.insert(">=", TokenKind::GrtEqual);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert(">>", TokenKind::RShift);
        map.insert("<<", TokenKind::LShift);
        map.insert("!", TokenKind::LogNot);
        map.insert("||", TokenKind::LogOr);
        map.insert("&&", TokenKind::LogAnd);
        map.insert("~", TokenKind::BitNot);
        map.insert("&", TokenKind::BitAnd);
        map.insert("|", TokenKind::BitOr);
        map.insert("^", TokenKind::Xor);
        map.insert("=", TokenKind::Assign);
        map.insert("-=", TokenKind::MinusAssign);
        map.insert("+=", TokenKind::PlusAssign);
        map.insert("*=", TokenKind::MulAssign);
        map.insert("/=", TokenKind::DivAssign);
        map.insert("%=", TokenKind::ModAssign);
        map.insert("&=", TokenKind::AndAssign);
        map.insert("|=", TokenKind::OrAssign);
        map.insert("^=", TokenKind::XorAssign);
        map.insert(">>=", TokenKind::RshAssign);
        map.insert("<<=", TokenKind::LshAssign);
        map.insert("(", TokenKind::LParen);
        map.insert(")", TokenKind::RParen);
        map.insert("{", TokenKind::LBrace);
        map.insert("}", TokenKind::RBrace);
        map.insert("[", TokenKind::LBracket);
        map.insert("]", TokenKind::RBracket);
        map.insert(",", TokenKind::Comma);
        map.insert(";", TokenKind::Semi);
        map.insert(":", TokenKind::Colon);
        map
    };
}

/// Byte-oriented scanner over a borrowed source buffer.
///
/// Unknown characters are reported to the injected diagnostics queue and do
/// not stop the scan. Multi-byte input gets no special handling.
pub struct Lexer<'a> {
    errors: &'a mut dyn ErrorQueue<LexErrorKind>,
    target: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(errors: &'a mut dyn ErrorQueue<LexErrorKind>, target: &'a str) -> Lexer<'a> {
        Lexer {
            errors,
            target,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Scans the remaining input to the end, returning every token except
    /// `Unknown` ones (those are only reported) and including the terminal
    /// `Eof`. Stops early if the queue reports itself full.
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_next();
            if token.eof() {
                tokens.push(token);
                break;
            }
            if !token.unknown() {
                tokens.push(token);
            }
            if self.errors.is_full() {
                break;
            }
        }
        tokens
    }

    /// Consumes exactly one token and advances the position.
    pub fn scan_next(&mut self) -> Token {
        self.skip_whitespace();
        if self.at_end() {
            return Token::new(TokenKind::Eof, String::new(), self.line, self.col);
        }

        let next = self.remainder()[0];
        if next.is_ascii_digit() {
            return self.scan_number();
        }
        if next == b'_' || next.is_ascii_alphabetic() {
            return self.scan_kw_or_id();
        }
        self.scan_symbol(MAX_SYMBOL_SIZE)
    }

    fn scan_number(&mut self) -> Token {
        let size = INT_PATTERN.find(self.remainder()).unwrap().end();
        let col = self.col;
        let value = self.advance(size);
        self.col += size;
        Token::new(TokenKind::Int, value, self.line, col)
    }

    fn scan_kw_or_id(&mut self) -> Token {
        let size = ID_PATTERN.find(self.remainder()).unwrap().end();
        let col = self.col;
        let value = self.advance(size);
        let kind = KEYWORD_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Id);
        self.col += size;
        Token::new(kind, value, self.line, col)
    }

    fn scan_symbol(&mut self, max_size: usize) -> Token {
        if max_size > self.remainder().len() {
            return self.scan_symbol(max_size - 1);
        }

        let kind = std::str::from_utf8(&self.remainder()[..max_size])
            .ok()
            .and_then(|symbol| SYMBOL_LOOKUP.get(symbol))
            .copied()
            .unwrap_or(TokenKind::Unknown);

        if max_size > 1 && kind == TokenKind::Unknown {
            return self.scan_symbol(max_size - 1);
        }

        let col = self.col;
        self.col += max_size;
        let target = Token::new(kind, self.advance(max_size), self.line, col);

        if kind == TokenKind::Unknown {
            self.errors
                .report(Error::new(LexErrorKind::UnknownCharacter, target.clone()));
        }
        target
    }

    fn skip_whitespace(&mut self) {
        while !self.at_end() {
            match self.target.as_bytes()[self.pos] {
                b'\n' => {
                    self.line += 1;
                    self.col = 1;
                }
                next if next.is_ascii_whitespace() => self.col += 1,
                _ => break,
            }
            self.pos += 1;
        }
    }

    fn advance(&mut self, npos: usize) -> String {
        let value = &self.target.as_bytes()[self.pos..self.pos + npos];
        self.pos += npos;
        String::from_utf8_lossy(value).into_owned()
    }

    fn remainder(&self) -> &[u8] {
        &self.target.as_bytes()[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.target.len()
    }
}
