use crate::board::{Board, Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate(Color), // Color is the winner
}

/// Squares the piece on `from` could move to by its movement rule alone,
/// ignoring whether the move would leave its own king in check.
pub fn raw_moves(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color),
        PieceKind::Knight => knight_moves(board, from, piece.color),
        PieceKind::Bishop => bishop_moves(board, from, piece.color),
        PieceKind::Rook => rook_moves(board, from, piece.color),
        PieceKind::Queen => queen_moves(board, from, piece.color),
        PieceKind::King => king_moves(board, from, piece.color),
    }
}

fn pawn_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let forward = color.forward();

    // Single push, and the double push behind it. Nesting the double push
    // under the empty single-push square means both squares ahead must be
    // clear for it.
    if let Some(ahead) = from.offset(0, forward) {
        if board.piece_at(ahead).is_none() {
            moves.push(ahead);
            if from.rank() == color.pawn_rank() {
                if let Some(two_ahead) = from.offset(0, 2 * forward) {
                    if board.piece_at(two_ahead).is_none() {
                        moves.push(two_ahead);
                    }
                }
            }
        }
    }

    // Diagonal captures
    for &df in &[-1, 1] {
        if let Some(target) = from.offset(df, forward) {
            if let Some(occupant) = board.piece_at(target) {
                if occupant.color != color {
                    moves.push(target);
                }
            }
        }
    }

    moves
}

fn knight_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let offsets = [
        (2, 1), (2, -1), (-2, 1), (-2, -1),
        (1, 2), (1, -2), (-1, 2), (-1, -2),
    ];
    step_moves(board, from, color, &offsets)
}

fn king_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let offsets = [
        (1, 0), (1, 1), (0, 1), (-1, 1),
        (-1, 0), (-1, -1), (0, -1), (1, -1),
    ];
    step_moves(board, from, color, &offsets)
}

fn bishop_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    sliding_moves(board, from, color, &[(1, 1), (1, -1), (-1, 1), (-1, -1)])
}

fn rook_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    sliding_moves(board, from, color, &[(1, 0), (-1, 0), (0, 1), (0, -1)])
}

fn queen_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut moves = rook_moves(board, from, color);
    moves.extend(bishop_moves(board, from, color));
    moves
}

/// Single-step movers: each offset yields a move unless the target holds
/// a friendly piece.
fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(df, dr) in offsets {
        if let Some(target) = from.offset(df, dr) {
            match board.piece_at(target) {
                Some(occupant) if occupant.color == color => {}
                _ => moves.push(target),
            }
        }
    }
    moves
}

/// Sliders walk each direction until blocked; an enemy blocker is itself
/// a capture square.
fn sliding_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(target) = current.offset(df, dr) {
            match board.piece_at(target) {
                None => {
                    moves.push(target);
                    current = target;
                }
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// Every square a player's pieces could move to by raw movement. Squares
/// reachable by several pieces appear once per piece.
pub fn reachable_squares(board: &Board, color: Color) -> Vec<Square> {
    let mut squares = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        squares.extend(raw_moves(board, from, piece));
    }
    squares
}

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .iter()
        .any(|&(from, piece)| raw_moves(board, from, piece).contains(&target))
}

pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false, // No king found (shouldn't happen in a valid position)
    }
}

/// Raw moves filtered down to those that leave the mover's own king out
/// of check, each tried on a scratch copy of the board.
pub fn legal_moves_from(board: &Board, from: Square) -> Vec<Square> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    raw_moves(board, from, piece)
        .into_iter()
        .filter(|&to| {
            let mut board_copy = board.clone();
            board_copy.apply_move(from, to);
            !is_in_check(&board_copy, piece.color)
        })
        .collect()
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    board
        .pieces_of(color)
        .iter()
        .all(|&(from, _)| legal_moves_from(board, from).is_empty())
}

pub fn game_status(board: &Board, to_move: Color) -> GameStatus {
    if is_checkmate(board, to_move) {
        GameStatus::Checkmate(to_move.opposite())
    } else {
        GameStatus::InProgress
    }
}
