use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("void", TokenKind::Void);
        map.insert("i8", TokenKind::I8);
        map.insert("i16", TokenKind::I16);
        map.insert("i32", TokenKind::I32);
        map.insert("i64", TokenKind::I64);
        map.insert("use", TokenKind::Use);
        map.insert("global", TokenKind::Global);
        map.insert("local", TokenKind::Local);
        map.insert("return", TokenKind::Return);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("mut", TokenKind::Mut);
        map.insert("def", TokenKind::Def);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Unknown,
    Eof,

    Int,
    Id,

    // Keywords
    Void,
    I8,
    I16,
    I32,
    I64,
    Use,
    Global,
    Local,
    Return,
    While,
    If,
    Else,
    Mut,
    Def,

    // Operators
    Cast,
    Minus,
    Plus,
    Mul,
    Div,
    Mod,
    Less,
    LessEqual,
    Grt,
    GrtEqual,
    Equal,
    NotEqual,
    RShift,
    LShift,
    LogNot,
    LogOr,
    LogAnd,
    BitNot,
    BitAnd,
    BitOr,
    Xor,
    Assign,
    MinusAssign,
    PlusAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    RshAssign,
    LshAssign,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semi,
    Colon,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical unit: its kind, its exact source spelling, and the
/// line/column of its first character.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, line: usize, col: usize) -> Token {
        Token {
            kind,
            value,
            line,
            col,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn eof(&self) -> bool {
        self.is(TokenKind::Eof)
    }

    pub fn unknown(&self) -> bool {
        self.is(TokenKind::Unknown)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} `{}` [{}:{}]",
            self.kind, self.value, self.line, self.col
        )
    }
}
