use crate::reader::TokenKind;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DiagnosticKind {
    // Lexical
    #[error("Unknown symbol '{0}'")]
    UnknownCharacter(char),

    #[error("Non-terminated string")]
    UnterminatedString,

    #[error("Expected 'O-O' or 'O-O-O'")]
    MalformedCastle,

    #[error("Number {0} is out of range")]
    NumberOutOfRange(String),

    // Structural
    #[error("{context}: expected {expected}, found {found}")]
    UnexpectedToken {
        context: &'static str,
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("Expected target file")]
    MissingTargetFile,

    #[error("Expected target rank")]
    MissingTargetRank,

    #[error("Expected promotion piece")]
    MissingPromotionPiece,

    #[error("Invalid promotion piece '{0}'")]
    InvalidPromotionPiece(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("{kind} (line {line})")]
pub struct Diagnostic {
    pub line: u32,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: u32, kind: DiagnosticKind) -> Self {
        Diagnostic { line, kind }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::UnknownCharacter(_)
                | DiagnosticKind::UnterminatedString
                | DiagnosticKind::MalformedCastle
                | DiagnosticKind::NumberOutOfRange(_)
        )
    }
}

/// Every diagnostic of a degraded parse, as a single error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics(pub Vec<Diagnostic>);

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect::<Vec<String>>();
        write!(f, "{}", messages.join("\n"))
    }
}

impl std::error::Error for Diagnostics {}

/// Output of the tokenizer or the parser: the value is always there, the
/// diagnostics say how much of it is defaults standing in for missing input.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_result(self) -> Result<T, Diagnostics> {
        if self.diagnostics.is_empty() {
            Ok(self.value)
        } else {
            Err(Diagnostics(self.diagnostics))
        }
    }
}
