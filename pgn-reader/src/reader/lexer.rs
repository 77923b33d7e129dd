use crate::diagnostic::{Diagnostic, DiagnosticKind, Parsed};
use crate::reader::token::{Literal, Token, TokenKind};
use crate::reader::ParseOptions;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_while1};
use nom::character::complete::digit1;
use nom::IResult;

fn dots(input: &str) -> IResult<&str, &str> {
    alt((tag("..."), tag(".."), tag(".")))(input)
}

fn castle(input: &str) -> IResult<&str, &str> {
    alt((tag("O-O-O"), tag("O-O")))(input)
}

fn result(input: &str) -> IResult<&str, &str> {
    alt((tag("1-0"), tag("0-1"), tag("1/2-1/2")))(input)
}

fn digits(input: &str) -> IResult<&str, &str> {
    digit1(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_identifier_char)(input)
}

fn string_contents(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '"')(input)
}

// 'x' is always a capture, even in the middle of a word
fn is_identifier_char(c: char) -> bool {
    (c.is_ascii_alphabetic() && c != 'x') || c == '_' || c == '-'
}

pub struct Lexer<'a> {
    source: &'a str,
    hash_emits_result: bool,
    start: usize,
    current: usize,
    start_line: u32,
    line: u32,
    tokens: Vec<Token<'a>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, options: &ParseOptions) -> Self {
        Lexer {
            source,
            hash_emits_result: options.hash_emits_result,
            start: 0,
            current: 0,
            start_line: 1,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> Parsed<Vec<Token<'a>>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));

        Parsed {
            value: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Runs `parser` from the start of the current lexeme and, on a match,
    /// moves the cursor to the end of it.
    fn scan_with(&mut self, parser: fn(&str) -> IResult<&str, &str>) -> Option<&'a str> {
        let source: &'a str = self.source;
        let (_, matched) = parser(&source[self.start..]).ok()?;
        self.current = self.start + matched.len();
        Some(matched)
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '[' => self.add_token(TokenKind::LBracket),
            ']' => self.add_token(TokenKind::RBracket),
            '.' => match self.scan_with(dots) {
                Some("...") => self.add_token(TokenKind::Ellipsis),
                _ => self.add_token(TokenKind::Dot),
            },
            'x' => self.add_token(TokenKind::Capture),
            '+' => self.add_token(TokenKind::Plus),
            '#' => {
                self.add_token(TokenKind::Hash);
                if self.hash_emits_result {
                    self.add_token(TokenKind::Result);
                }
            }
            '*' => self.add_token(TokenKind::Result),
            '=' => self.add_token(TokenKind::Promotion),
            '"' => self.string(),
            'O' => self.castle(),
            '0'..='9' => self.number(),
            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,
            c if is_identifier_char(c) => self.identifier(),
            c => self.report(DiagnosticKind::UnknownCharacter(c)),
        }
    }

    fn string(&mut self) {
        let source: &'a str = self.source;
        let contents = match string_contents(&source[self.current..]) {
            Ok((_, contents)) => contents,
            Err(_) => "",
        };

        self.line += contents.matches('\n').count() as u32;
        self.current += contents.len();

        if self.is_at_end() {
            self.report(DiagnosticKind::UnterminatedString);
            return;
        }

        // Closing quote
        self.advance();
        self.add_literal_token(TokenKind::String, Some(Literal::String(contents)));
    }

    fn castle(&mut self) {
        if let Some(notation) = self.scan_with(castle) {
            if notation.len() == "O-O-O".len() {
                self.add_token(TokenKind::LongCastle);
            } else {
                self.add_token(TokenKind::ShortCastle);
            }
            return;
        }

        match self.peek() {
            Some('-') => {
                self.advance();
                self.report(DiagnosticKind::MalformedCastle);
            }
            Some(c) if is_identifier_char(c) => self.identifier(),
            _ => self.report(DiagnosticKind::MalformedCastle),
        }
    }

    fn number(&mut self) {
        if self.scan_with(result).is_some() {
            self.add_token(TokenKind::Result);
            return;
        }

        let run = self.scan_with(digits).unwrap_or_default();
        match run.parse::<u32>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Some(Literal::Number(value))),
            Err(_) => {
                self.report(DiagnosticKind::NumberOutOfRange(run.to_string()));
                self.add_token(TokenKind::Number);
            }
        }
    }

    fn identifier(&mut self) {
        self.scan_with(identifier);
        self.add_token(TokenKind::Ident);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Option<Literal<'a>>) {
        let source: &'a str = self.source;
        self.tokens.push(Token {
            kind,
            lexeme: &source[self.start..self.current],
            literal,
            line: self.start_line,
        });
    }

    fn report(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(self.start_line, kind));
    }
}
