use crate::ast::{
    CastleSide, CheckType, Game, GameResult, Header, Move, MoveKind, NormalMove, PieceType,
    Program,
};
use crate::diagnostic::{Diagnostic, DiagnosticKind, Parsed};
use crate::feedback::ParseFeedback;
use crate::reader::token::{Token, TokenKind};
use std::io::Write;

macro_rules! log {
    ($logger:expr, $str:expr) => {
        {
            let _ = writeln!($logger, $str);
        }
    };
    ($logger:expr, $fmt:expr, $($param:expr),*) => {
        {
            let _ = writeln!($logger, $fmt, $($param),+);
        }
    };
}

const EOF: Token<'static> = Token::eof(0);

/// File and/or rank read before we know whether they are the origin or the
/// target of the move.
struct SquarePart<'a> {
    file: Option<&'a str>,
    rank: Option<u32>,
}

/// `bd` in `Nbd7`: origin file `b`, target file `d`.
fn split_files(files: &str) -> Option<(char, &str)> {
    let mut chars = files.chars();
    let origin = chars.next()?;
    let target = chars.as_str();
    let is_file = |c: char| ('a'..='h').contains(&c);
    if target.len() == 1 && is_file(origin) && target.chars().all(is_file) {
        Some((origin, target))
    } else {
        None
    }
}

pub struct Parser<'p, 'a, F: ParseFeedback> {
    tokens: &'p [Token<'a>],
    current: usize,
    feedback: &'p mut F,
    diagnostics: Vec<Diagnostic>,
}

impl<'p, 'a, F: ParseFeedback> Parser<'p, 'a, F> {
    pub fn new(tokens: &'p [Token<'a>], feedback: &'p mut F) -> Self {
        Parser {
            tokens,
            current: 0,
            feedback,
            diagnostics: Vec::new(),
        }
    }

    pub fn parse(mut self) -> Parsed<Program> {
        let mut program = Program::default();
        while !self.is_at_end() {
            program.games.push(self.game());
        }

        Parsed {
            value: program,
            diagnostics: self.diagnostics,
        }
    }

    fn peek(&self) -> Token<'a> {
        // A token slice that lacks the final EOF still ends cleanly
        self.tokens.get(self.current).copied().unwrap_or(EOF)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    fn advance(&mut self) -> Token<'a> {
        let token = self.peek();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Takes the next token whatever it is, reporting it if it is not `kind`.
    fn consume(&mut self, kind: TokenKind, context: &'static str) -> Token<'a> {
        let token = self.advance();
        if !token.is(kind) {
            self.report_at(
                token.line,
                DiagnosticKind::UnexpectedToken {
                    context,
                    expected: kind,
                    found: token.kind,
                },
            );
        }
        token
    }

    fn report(&mut self, kind: DiagnosticKind) {
        let line = self.peek().line;
        self.report_at(line, kind);
    }

    fn report_at(&mut self, line: u32, kind: DiagnosticKind) {
        let diagnostic = Diagnostic::new(line, kind);
        self.feedback.diagnostic(&diagnostic);
        self.diagnostics.push(diagnostic);
    }

    fn game(&mut self) -> Game {
        log!(self.feedback, "begin_game");

        let mut game = Game::default();

        while self.check(TokenKind::LBracket) {
            let header = self.header();
            log!(self.feedback, "tag: {} = {}", header.key, header.value);
            game.headers.push(header);
        }

        // A '[' here is the next game's header section
        while !self.is_at_end() && !self.check(TokenKind::Result) && !self.check(TokenKind::LBracket)
        {
            let mv = self.san_move();
            log!(self.feedback, "san_move: {}", mv);
            game.moves.push(mv);
        }

        game.result = self.result();
        if !game.result.is_missing() {
            log!(self.feedback, "result: {}", game.result.value);
        }

        game
    }

    fn header(&mut self) -> Header {
        self.consume(TokenKind::LBracket, "Expected '[' at header start");
        let key = self.consume(TokenKind::Ident, "Expected header key");
        let value = self.consume(TokenKind::String, "Expected header value");
        self.consume(TokenKind::RBracket, "Expected ']' at header end");

        Header {
            key: key.lexeme.to_string(),
            value: value.string().unwrap_or(value.lexeme).to_string(),
        }
    }

    fn san_move(&mut self) -> Move {
        let number = if self.check(TokenKind::Number) {
            self.advance().number()
        } else {
            None
        };

        if self.check(TokenKind::Dot) || self.check(TokenKind::Ellipsis) {
            self.advance();
        }

        let kind = match self.peek().kind {
            TokenKind::ShortCastle => {
                self.advance();
                MoveKind::Castle(CastleSide::KingSide)
            }
            TokenKind::LongCastle => {
                self.advance();
                MoveKind::Castle(CastleSide::QueenSide)
            }
            _ => MoveKind::Normal(self.normal_move()),
        };

        let check = if self.check(TokenKind::Plus) {
            self.advance();
            Some(CheckType::Check)
        } else if self.check(TokenKind::Hash) {
            self.advance();
            Some(CheckType::Checkmate)
        } else {
            None
        };

        Move {
            number,
            kind,
            check,
        }
    }

    fn normal_move(&mut self) -> NormalMove {
        let mut mv = NormalMove::default();

        // Piece letter, possibly glued to the file letters that follow it
        let mut pending_files = None;
        let token = self.peek();
        if token.is(TokenKind::Ident) {
            if let Some(piece) = token.lexeme.chars().next().and_then(PieceType::try_from_char) {
                mv.piece = Some(piece);
                self.advance();
                let rest = &token.lexeme[1..];
                if !rest.is_empty() {
                    pending_files = Some(rest);
                }
            }
        }

        let first = self.square_part(pending_files);

        let is_origin = if self.check(TokenKind::Capture) {
            self.advance();
            mv.capture = true;
            true
        } else {
            // N1c3
            mv.piece.is_some()
                && first.file.is_none()
                && first.rank.is_some()
                && self.check(TokenKind::Ident)
        };

        let target = if is_origin {
            mv.from_file = first.file.and_then(|file| file.chars().next());
            mv.from_rank = first.rank;
            self.square_part(None)
        } else {
            first
        };

        mv.to.file = match target.file {
            Some(files) => match split_files(files) {
                Some((origin_file, file)) if mv.from_file.is_none() => {
                    mv.from_file = Some(origin_file);
                    file.to_string()
                }
                _ => files.to_string(),
            },
            None => {
                self.report(DiagnosticKind::MissingTargetFile);
                String::new()
            }
        };

        mv.to.rank = match target.rank {
            Some(rank) => rank,
            None => {
                self.report(DiagnosticKind::MissingTargetRank);
                self.advance();
                0
            }
        };

        if self.check(TokenKind::Promotion) {
            self.advance();
            mv.promotion = self.promotion_piece();
        }

        mv
    }

    fn square_part(&mut self, pending_files: Option<&'a str>) -> SquarePart<'a> {
        let mut part = SquarePart {
            file: pending_files,
            rank: None,
        };

        if part.file.is_none() && self.check(TokenKind::Ident) {
            part.file = Some(self.advance().lexeme);
        }

        if self.check(TokenKind::Number) {
            // An out of range number still counts as the rank
            part.rank = Some(self.advance().number().unwrap_or_default());
        }

        part
    }

    fn promotion_piece(&mut self) -> Option<PieceType> {
        if !self.check(TokenKind::Ident) {
            self.report(DiagnosticKind::MissingPromotionPiece);
            self.advance();
            return None;
        }

        let token = self.advance();
        let mut chars = token.lexeme.chars();
        let piece = chars.next().and_then(PieceType::try_from_char);
        if piece.is_none() || chars.next().is_some() {
            self.report_at(
                token.line,
                DiagnosticKind::InvalidPromotionPiece(token.lexeme.to_string()),
            );
            return None;
        }

        piece
    }

    fn result(&mut self) -> GameResult {
        let mut result = GameResult::default();
        if self.check(TokenKind::Result) {
            result.value = self.advance().lexeme.to_string();
        }
        result
    }
}
