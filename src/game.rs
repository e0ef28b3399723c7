use thiserror::Error;

use crate::board::{Board, Color, MoveRecord, Piece, Square};
use crate::movegen::{self, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("square ({file}, {rank}) is outside the board")]
    OffBoard { file: i8, rank: i8 },
    #[error("the game is over, {winner} already won")]
    GameOver { winner: Color },
}

/// What a square selection did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    /// Nothing happened: the square held no piece of the side to move.
    Idle,
    /// The square's piece is now armed and may move to `moves`.
    Armed { square: Square, moves: Vec<Square> },
    /// An armed piece was pointed at a square it cannot move to, and the
    /// selection was dropped.
    Disarmed,
    /// The armed piece moved.
    Played {
        record: MoveRecord,
        status: GameStatus,
    },
}

/// A game in progress: the board, whose turn it is, and at most one
/// armed square waiting for a destination.
///
/// Selecting a square either arms a piece or, if a piece is already
/// armed, tries to move it there. Selections that cannot act (empty
/// square, opponent's piece, unreachable destination) are reported as
/// outcomes, not errors; only an off-board coordinate or input after
/// checkmate is refused.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    armed: Option<Square>,
    status: GameStatus,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            armed: None,
            status: GameStatus::InProgress,
        }
    }

    /// Starts from an arbitrary position instead of the standard one.
    pub fn with_board(board: Board, turn: Color) -> Self {
        let status = movegen::game_status(&board, turn);
        Self {
            board,
            turn,
            armed: None,
            status,
        }
    }

    /// Throws away the current game and starts a fresh one.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn armed_square(&self) -> Option<Square> {
        self.armed
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        self.board.pieces_of(color)
    }

    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        movegen::legal_moves_from(&self.board, from)
    }

    pub fn reachable_squares(&self, color: Color) -> Vec<Square> {
        movegen::reachable_squares(&self.board, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        movegen::is_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        movegen::is_checkmate(&self.board, color)
    }

    /// Feeds one square selection into the game.
    ///
    /// With nothing armed, a square holding a piece of the side to move
    /// arms it; anything else is `Idle`. With a piece armed, its own
    /// side's pieces re-arm, a legal destination plays the move, and any
    /// other square disarms.
    pub fn select_square(&mut self, file: i8, rank: i8) -> Result<SelectAction, GameError> {
        if let GameStatus::Checkmate(winner) = self.status {
            return Err(GameError::GameOver { winner });
        }
        let square = Square::new(file, rank).ok_or(GameError::OffBoard { file, rank })?;

        match self.armed.take() {
            None => Ok(self.try_arm(square)),
            Some(origin) => {
                if self.piece_at(square).map(|p| p.color) == Some(self.turn) {
                    return Ok(self.try_arm(square));
                }
                if movegen::legal_moves_from(&self.board, origin).contains(&square) {
                    Ok(self.play(origin, square))
                } else {
                    Ok(SelectAction::Disarmed)
                }
            }
        }
    }

    fn try_arm(&mut self, square: Square) -> SelectAction {
        match self.piece_at(square) {
            Some(piece) if piece.color == self.turn => {
                self.armed = Some(square);
                SelectAction::Armed {
                    square,
                    moves: movegen::legal_moves_from(&self.board, square),
                }
            }
            _ => SelectAction::Idle,
        }
    }

    fn play(&mut self, from: Square, to: Square) -> SelectAction {
        let record = match self.board.apply_move(from, to) {
            Some(record) => record,
            None => return SelectAction::Disarmed, // armed square went empty (shouldn't happen)
        };
        self.turn = self.turn.opposite();
        self.status = movegen::game_status(&self.board, self.turn);
        SelectAction::Played {
            record,
            status: self.status,
        }
    }
}
