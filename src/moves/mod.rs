// Ficheiro: src/moves/mod.rs
// Descrição: Geometria dos lances por peça, legalidade e deteção de ataques/mate.

pub mod attacks;
pub mod king;
pub mod knight;
pub mod legality;
pub mod pawn;
pub mod queen;
pub mod sliding;

pub use attacks::{attack_status, is_king_attacked, mate_status};
pub use legality::{follows_pattern, is_legal};

use crate::bitboard::BitboardOps;
use crate::core::{Bitboard, Board, Color, Move, PieceKind, Square};

/// Casas que a peça em `square` alcança só pelo padrão de movimento, sem
/// bloqueios nem legalidade. Serve apenas para semear candidatos da busca;
/// cada candidato tem de passar por `is_legal` antes de ser jogado.
pub fn candidate_targets(board: &Board, square: Square) -> Bitboard {
    let Some(piece) = board.piece_at(square) else {
        return 0;
    };

    match piece.kind {
        PieceKind::King => king::king_targets(square),
        PieceKind::Knight => knight::knight_targets(square),
        PieceKind::Rook => sliding::rook_rays(square),
        PieceKind::Bishop => sliding::bishop_rays(square),
        PieceKind::Queen => queen::queen_rays(square),
        PieceKind::Pawn => pawn::pawn_pushes(square, piece.color),
    }
}

/// Todos os lances legais de uma cor, na ordem em que a busca os visita:
/// peças por índice de casa crescente e, para cada peça, destinos idem.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in board.occupancy(color).iter_squares() {
        for to in candidate_targets(board, from).iter_squares() {
            let mv = Move::new(from, to);
            if is_legal(board, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}
