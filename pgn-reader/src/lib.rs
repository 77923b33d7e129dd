//! Reader for PGN-like chess game records.
//!
//! Text is split into tokens, and the tokens are parsed into a
//! `Program` of games (headers, moves and result). Parsing never fails:
//! malformed input is reported as `Diagnostic`s next to the tree.

pub mod ast;
pub mod diagnostic;
pub mod feedback;
pub mod reader;

pub use ast::{
    CastleSide, CheckType, Game, GameResult, Header, Move, MoveKind, NormalMove, Outcome,
    PieceType, Program, Square,
};
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Parsed};
pub use feedback::{ParseFeedback, SilentParseFeedback};
pub use reader::{
    parse, parse_tokens, parse_with, tokenize, tokenize_with, Literal, ParseOptions, Token,
    TokenKind,
};
