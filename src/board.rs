use std::fmt;

const SIDE: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction this side's pawns advance in.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn pawn_rank(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub fn promotion_rank(&self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { kind, color }
    }

    fn letter(&self) -> char {
        let symbol = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }
}

/// A coordinate that is valid by construction: `new` refuses anything
/// outside the 8x8 grid, so a `Square` can always index the board directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    file: i8,
    rank: i8,
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Option<Self> {
        if (0..SIDE).contains(&file) && (0..SIDE).contains(&rank) {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub fn file(&self) -> i8 {
        self.file
    }

    pub fn rank(&self) -> i8 {
        self.rank
    }

    /// The square `df` files and `dr` ranks away, if still on the board.
    pub fn offset(&self, df: i8, dr: i8) -> Option<Square> {
        Square::new(self.file + df, self.rank + dr)
    }
}

/// What a completed move did to the board: the piece now standing on `to`
/// (after any promotion), whatever it displaced, and whether a promotion
/// fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8], // squares[rank][file]
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting arrangement: White on ranks 0 and 1, Black on
    /// ranks 6 and 7.
    pub fn new() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(Color::White, kind));
            board.squares[7][file] = Some(Piece::new(Color::Black, kind));
        }
        for file in 0..8 {
            board.squares[1][file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[6][file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank as usize][square.file as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank as usize][square.file as usize] = piece;
    }

    /// Every piece of `color`, scanned rank by rank so callers see a
    /// deterministic order.
    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        let mut found = Vec::new();
        for rank in 0..SIDE {
            for file in 0..SIDE {
                let square = Square { file, rank };
                if let Some(piece) = self.piece_at(square) {
                    if piece.color == color {
                        found.push((square, piece));
                    }
                }
            }
        }
        found
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        for rank in 0..SIDE {
            for file in 0..SIDE {
                let square = Square { file, rank };
                if self.piece_at(square) == Some(Piece::new(color, PieceKind::King)) {
                    return Some(square);
                }
            }
        }
        None
    }

    /// Relocates the piece at `from` to `to`, overwriting (capturing)
    /// whatever stood there. A pawn arriving on its promotion rank is
    /// replaced by a queen of the same color. Returns `None` without
    /// touching the board when `from` is empty.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let piece = self.piece_at(from)?;
        let captured = self.piece_at(to);

        let placed = if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
            Piece::new(piece.color, PieceKind::Queen)
        } else {
            piece
        };
        self.set(from, None);
        self.set(to, Some(placed));

        Some(MoveRecord {
            from,
            to,
            piece: placed,
            captured,
            promoted: placed.kind != piece.kind,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut result = String::new();
        for rank in (0..SIDE).rev() {
            for file in 0..SIDE {
                match self.squares[rank as usize][file as usize] {
                    Some(piece) => result.push(piece.letter()),
                    None => result.push('.'),
                }
                if file < SIDE - 1 {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        write!(f, "{}", result)
    }
}
