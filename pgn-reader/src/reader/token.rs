use std::fmt;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Eof,
    Ident,
    String,
    Number,
    Dot,
    Ellipsis,
    LBracket,
    RBracket,
    Plus,
    Hash,
    Promotion,
    Capture,
    ShortCastle,
    LongCastle,
    Result,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                TokenKind::Eof => "end of input",
                TokenKind::Ident => "identifier",
                TokenKind::String => "string",
                TokenKind::Number => "number",
                TokenKind::Dot => "'.'",
                TokenKind::Ellipsis => "'...'",
                TokenKind::LBracket => "'['",
                TokenKind::RBracket => "']'",
                TokenKind::Plus => "'+'",
                TokenKind::Hash => "'#'",
                TokenKind::Promotion => "'='",
                TokenKind::Capture => "'x'",
                TokenKind::ShortCastle => "'O-O'",
                TokenKind::LongCastle => "'O-O-O'",
                TokenKind::Result => "result",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Literal<'a> {
    Number(u32),
    String(&'a str),
}

/// A lexeme borrowed from the source text.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub literal: Option<Literal<'a>>,
    pub line: u32,
}

impl<'a> Token<'a> {
    pub const fn eof(line: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: "",
            literal: None,
            line,
        }
    }

    pub fn number(&self) -> Option<u32> {
        match self.literal {
            Some(Literal::Number(value)) => Some(value),
            _ => None,
        }
    }

    pub fn string(&self) -> Option<&'a str> {
        match self.literal {
            Some(Literal::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
