use std::fmt;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub games: Vec<Game>,
}

/// Headers come before moves, moves before the result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Game {
    pub headers: Vec<Header>,
    pub moves: Vec<Move>,
    pub result: GameResult,
}

impl Game {
    /// First header with the given key, if any.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.key == key)
            .map(|header| header.value.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum PieceType {
    Knight, // N
    Bishop, // B
    Rook,   // R
    Queen,  // Q
    King,   // K
}

impl PieceType {
    pub fn try_from_char(value: char) -> Option<Self> {
        match value {
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    pub fn san_char(&self) -> char {
        match self {
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                PieceType::Knight => "knight",
                PieceType::Bishop => "bishop",
                PieceType::Rook => "rook",
                PieceType::Queen => "queen",
                PieceType::King => "king",
            }
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Square {
    pub file: String,
    pub rank: u32,
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CheckType {
    Check,
    Checkmate,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// A piece or pawn move. `piece == None` is a pawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalMove {
    pub piece: Option<PieceType>,
    pub from_file: Option<char>,
    pub from_rank: Option<u32>,
    pub capture: bool,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MoveKind {
    Normal(NormalMove),
    Castle(CastleSide),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    /// Only present when written in the source.
    pub number: Option<u32>,
    pub kind: MoveKind,
    pub check: Option<CheckType>,
}

impl Move {
    pub fn normal(&self) -> Option<&NormalMove> {
        match &self.kind {
            MoveKind::Normal(normal) => Some(normal),
            MoveKind::Castle(_) => None,
        }
    }

    pub fn castle(&self) -> Option<CastleSide> {
        match &self.kind {
            MoveKind::Normal(_) => None,
            MoveKind::Castle(side) => Some(*side),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.normal().is_some_and(|normal| normal.capture)
    }

    pub fn is_check(&self) -> bool {
        self.check == Some(CheckType::Check)
    }

    pub fn is_checkmate(&self) -> bool {
        self.check == Some(CheckType::Checkmate)
    }
}

// SAN text, without the move number
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            MoveKind::Castle(CastleSide::KingSide) => write!(f, "O-O")?,
            MoveKind::Castle(CastleSide::QueenSide) => write!(f, "O-O-O")?,
            MoveKind::Normal(normal) => {
                if let Some(piece) = normal.piece {
                    write!(f, "{}", piece.san_char())?;
                }
                if let Some(file) = normal.from_file {
                    write!(f, "{}", file)?;
                }
                if let Some(rank) = normal.from_rank {
                    write!(f, "{}", rank)?;
                }
                if normal.capture {
                    write!(f, "x")?;
                }
                write!(f, "{}", normal.to)?;
                if let Some(promotion) = normal.promotion {
                    write!(f, "={}", promotion.san_char())?;
                }
            }
        }

        match self.check {
            Some(CheckType::Check) => write!(f, "+"),
            Some(CheckType::Checkmate) => write!(f, "#"),
            None => Ok(()),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
    Unfinished,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Outcome::WhiteWins => "white wins",
                Outcome::BlackWins => "black wins",
                Outcome::Draw => "draw",
                Outcome::Unfinished => "unfinished",
            }
        )
    }
}

/// The result marker text. Empty when the game had no result marker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameResult {
    pub value: String,
}

impl GameResult {
    pub fn is_missing(&self) -> bool {
        self.value.is_empty()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.value.as_str() {
            "1-0" => Some(Outcome::WhiteWins),
            "0-1" => Some(Outcome::BlackWins),
            "1/2-1/2" => Some(Outcome::Draw),
            "*" => Some(Outcome::Unfinished),
            _ => None,
        }
    }
}
