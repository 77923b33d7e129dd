mod lexer;
mod parser;
mod token;


pub use self::token::{Literal, Token, TokenKind};

use crate::ast::Program;
use crate::diagnostic::Parsed;
use crate::feedback::{ParseFeedback, SilentParseFeedback};
use lexer::Lexer;
use parser::Parser;

#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Emit a `Result` token right after every `#`, as older readers did.
    pub hash_emits_result: bool,
}

pub fn tokenize(source: &str) -> Parsed<Vec<Token<'_>>> {
    tokenize_with(source, &ParseOptions::default())
}

pub fn tokenize_with<'a>(source: &'a str, options: &ParseOptions) -> Parsed<Vec<Token<'a>>> {
    Lexer::new(source, options).scan_tokens()
}

pub fn parse(source: &str) -> Parsed<Program> {
    parse_with(
        source,
        &ParseOptions::default(),
        &mut SilentParseFeedback::default(),
    )
}

pub fn parse_with(
    source: &str,
    options: &ParseOptions,
    feedback: &mut impl ParseFeedback,
) -> Parsed<Program> {
    let lexed = tokenize_with(source, options);
    for diagnostic in &lexed.diagnostics {
        feedback.diagnostic(diagnostic);
    }

    let parsed = parse_tokens(&lexed.value, feedback);

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(parsed.diagnostics);

    Parsed {
        value: parsed.value,
        diagnostics,
    }
}

pub fn parse_tokens(tokens: &[Token], feedback: &mut impl ParseFeedback) -> Parsed<Program> {
    Parser::new(tokens, feedback).parse()
}
