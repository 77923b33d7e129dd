use pgn_reader::{
    CastleSide, CheckType, Diagnostic, Game, GameResult, Header, Literal, Move, MoveKind, Parsed,
    Program, Token,
};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::Serialize;

struct SerializedHeader<'a>(&'a Header);

impl<'a> Serialize for SerializedHeader<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.key, &self.0.value)?;
        map.end()
    }
}

fn move_type(mv: &Move) -> Option<String> {
    match &mv.kind {
        MoveKind::Castle(CastleSide::KingSide) => Some("kingside castling".to_string()),
        MoveKind::Castle(CastleSide::QueenSide) => Some("queenside castling".to_string()),
        MoveKind::Normal(normal) => match (normal.promotion, normal.capture) {
            (Some(piece), true) => Some(format!("promotion to {} with capture", piece)),
            (Some(piece), false) => Some(format!("promotion to {}", piece)),
            (None, true) => Some("capture".to_string()),
            (None, false) => None,
        },
    }
}

struct SerializedMove<'a>(&'a Move);

impl<'a> Serialize for SerializedMove<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mv = self.0;
        let normal = mv.normal();
        let piece = normal.and_then(|normal| normal.piece);
        let move_type = move_type(mv);

        let mut entries = 1;
        for present in [
            mv.number.is_some(),
            piece.is_some(),
            normal.is_some(),
            move_type.is_some(),
            mv.check.is_some(),
        ] {
            if present {
                entries += 1;
            }
        }

        let mut map = serializer.serialize_map(Some(entries))?;

        if let Some(number) = mv.number {
            map.serialize_entry("number", &number)?;
        }
        map.serialize_entry("san", &mv.to_string())?;
        if let Some(piece) = piece {
            map.serialize_entry("piece", &piece.to_string())?;
        }
        if let Some(normal) = normal {
            map.serialize_entry("to", &normal.to.to_string())?;
        }
        if let Some(move_type) = &move_type {
            map.serialize_entry("type", move_type)?;
        }
        if let Some(check_type) = mv.check {
            map.serialize_entry(
                "check",
                match check_type {
                    CheckType::Check => "check",
                    CheckType::Checkmate => "checkmate",
                },
            )?;
        }

        map.end()
    }
}

struct SerializedGameEnding<'a>(&'a GameResult);

impl<'a> Serialize for SerializedGameEnding<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let outcome = self.0.outcome();
        let entries = if outcome.is_some() { 2 } else { 1 };

        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("result", &self.0.value)?;
        if let Some(outcome) = outcome {
            map.serialize_entry("outcome", &outcome.to_string())?;
        }
        map.end()
    }
}

struct SerializedGame<'a>(&'a Game);

impl<'a> Serialize for SerializedGame<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let game = self.0;
        let has_ending = !game.result.is_missing();

        let mut map = serializer.serialize_map(Some(if has_ending { 3 } else { 2 }))?;

        map.serialize_entry("tags", &SerializedList(&game.headers, SerializedHeader))?;
        map.serialize_entry("moves", &SerializedList(&game.moves, SerializedMove))?;
        if has_ending {
            map.serialize_entry("ending", &SerializedGameEnding(&game.result))?;
        }

        map.end()
    }
}

struct SerializedDiagnostic<'a>(&'a Diagnostic);

impl<'a> Serialize for SerializedDiagnostic<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("line", &self.0.line)?;
        map.serialize_entry("message", &self.0.kind.to_string())?;
        map.end()
    }
}

struct SerializedToken<'a, 'b>(&'a Token<'b>);

impl<'a, 'b> Serialize for SerializedToken<'a, 'b> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let token = self.0;
        let entries = if token.literal.is_some() { 4 } else { 3 };

        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("kind", &format!("{:?}", token.kind))?;
        map.serialize_entry("lexeme", token.lexeme)?;
        map.serialize_entry("line", &token.line)?;
        match token.literal {
            Some(Literal::Number(value)) => map.serialize_entry("literal", &value)?,
            Some(Literal::String(value)) => map.serialize_entry("literal", value)?,
            None => (),
        }
        map.end()
    }
}

/// Sequence of items, each one serialized through the wrapper `W`.
struct SerializedList<'a, T, W>(&'a [T], fn(&'a T) -> W);

impl<'a, T, W: Serialize> Serialize for SerializedList<'a, T, W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for item in self.0 {
            seq.serialize_element(&(self.1)(item))?;
        }
        seq.end()
    }
}

fn serialize_parsed<S, T: ?Sized + Serialize>(
    serializer: S,
    key: &str,
    value: &T,
    diagnostics: &[Diagnostic],
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let entries = if diagnostics.is_empty() { 1 } else { 2 };

    let mut map = serializer.serialize_map(Some(entries))?;
    map.serialize_entry(key, value)?;
    if !diagnostics.is_empty() {
        map.serialize_entry(
            "diagnostics",
            &SerializedList(diagnostics, SerializedDiagnostic),
        )?;
    }
    map.end()
}

pub struct SerializedProgram<'a>(pub &'a Parsed<Program>);

impl<'a> Serialize for SerializedProgram<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_parsed(
            serializer,
            "games",
            &SerializedList(&self.0.value.games, SerializedGame),
            &self.0.diagnostics,
        )
    }
}

pub struct SerializedTokens<'a, 'b>(pub &'a Parsed<Vec<Token<'b>>>);

impl<'a, 'b> Serialize for SerializedTokens<'a, 'b> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_parsed(
            serializer,
            "tokens",
            &SerializedList(&self.0.value, SerializedToken),
            &self.0.diagnostics,
        )
    }
}
