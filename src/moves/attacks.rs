// Ficheiro: src/moves/attacks.rs
// Descrição: Detetor de ataques ao rei e detetor de mate (só fugas do rei).

use super::king::KING_OFFSETS;
use super::legality::{follows_pattern, is_legal};
use crate::bitboard::BitboardOps;
use crate::core::{Board, ChessError, Color, Move, Score, NO_MATE};

/// O rei de `color` está ao alcance de alguma peça adversária?
///
/// Usa só o padrão das peças (sem a recursão de auto-xeque). Sem rei não há
/// nada para atacar; as consultas públicas validam os reis antes.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };

    board
        .occupancy(!color)
        .iter_squares()
        .any(|from| follows_pattern(board, Move::new(from, king)))
}

/// -1 se o rei branco está atacado, +1 se o preto, 0 caso contrário.
/// As brancas são verificadas primeiro.
pub fn attack_status(board: &Board) -> Score {
    for color in [Color::White, Color::Black] {
        if is_king_attacked(board, color) {
            return color.defeat_score();
        }
    }
    NO_MATE
}

/// Mesma convenção de sinais que `attack_status`, mas 0 se o rei atacado tem
/// alguma casa vizinha para onde fugir e ficar sem nenhum ataque no tabuleiro.
///
/// Só considera fugas do rei: bloquear a linha ou capturar o atacante com outra
/// peça não é avaliado, por isso pode reportar mate quando existe defesa.
pub fn mate_status(board: &Board) -> Score {
    let status = attack_status(board);
    let color = match status {
        NO_MATE => return NO_MATE,
        s if s == Color::White.defeat_score() => Color::White,
        _ => Color::Black,
    };
    let Some(king) = board.king_square(color) else {
        return status;
    };

    for (df, dr) in KING_OFFSETS {
        let Some(to) = king.offset(df, dr) else {
            continue;
        };
        if matches!(board.piece_at(to), Some(p) if p.color == color) {
            continue;
        }
        let escape = Move::new(king, to);
        let escapes = is_legal(board, escape)
            && board
                .after(escape)
                .is_some_and(|next| attack_status(&next) == NO_MATE);
        if escapes {
            return NO_MATE;
        }
    }

    status
}

impl Board {
    pub fn is_king_attacked(&self, color: Color) -> Result<bool, ChessError> {
        self.validate_kings()?;
        Ok(is_king_attacked(self, color))
    }

    pub fn attack_status(&self) -> Result<Score, ChessError> {
        self.validate_kings()?;
        Ok(attack_status(self))
    }

    pub fn mate_status(&self) -> Result<Score, ChessError> {
        self.validate_kings()?;
        Ok(mate_status(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, PieceKind, BLACK_MATED, WHITE_MATED};

    fn board_with(pieces: &[(&str, Piece)]) -> Board {
        let mut board = Board::empty();
        for (name, piece) in pieces {
            board.set_piece(name.parse().unwrap(), Some(*piece));
        }
        board
    }

    #[test]
    fn start_position_is_quiet() {
        let board = Board::new();
        assert!(!is_king_attacked(&board, Color::White));
        assert!(!is_king_attacked(&board, Color::Black));
        assert_eq!(attack_status(&board), NO_MATE);
        assert_eq!(mate_status(&board), NO_MATE);
    }

    #[test]
    fn white_is_reported_first_when_both_kings_are_attacked() {
        let board = board_with(&[
            ("a1", Piece::white(PieceKind::King)),
            ("a8", Piece::black(PieceKind::Rook)),
            ("h8", Piece::black(PieceKind::King)),
            ("h1", Piece::white(PieceKind::Rook)),
        ]);
        assert!(is_king_attacked(&board, Color::White));
        assert!(is_king_attacked(&board, Color::Black));
        assert_eq!(attack_status(&board), WHITE_MATED);
    }

    #[test]
    fn blocked_line_is_not_an_attack() {
        let board = board_with(&[
            ("e1", Piece::white(PieceKind::King)),
            ("e4", Piece::white(PieceKind::Pawn)),
            ("e8", Piece::black(PieceKind::Rook)),
            ("a8", Piece::black(PieceKind::King)),
        ]);
        assert_eq!(attack_status(&board), NO_MATE);
    }

    #[test]
    fn back_rank_mate() {
        let board = board_with(&[
            ("a8", Piece::white(PieceKind::Rook)),
            ("h6", Piece::white(PieceKind::King)),
            ("h8", Piece::black(PieceKind::King)),
        ]);
        assert_eq!(attack_status(&board), BLACK_MATED);
        assert_eq!(mate_status(&board), BLACK_MATED);
    }

    #[test]
    fn king_escape_cancels_mate() {
        let board = board_with(&[
            ("a8", Piece::white(PieceKind::Rook)),
            ("f6", Piece::white(PieceKind::King)),
            ("h8", Piece::black(PieceKind::King)),
        ]);
        assert_eq!(attack_status(&board), BLACK_MATED);
        assert_eq!(mate_status(&board), NO_MATE);
    }

    #[test]
    fn king_may_capture_its_checker() {
        // o rei toma g8; a torre de b2 também o podia fazer
        let board = board_with(&[
            ("a1", Piece::white(PieceKind::King)),
            ("g8", Piece::white(PieceKind::Rook)),
            ("h8", Piece::black(PieceKind::King)),
            ("b2", Piece::black(PieceKind::Rook)),
        ]);
        assert_eq!(attack_status(&board), BLACK_MATED);
        assert_eq!(mate_status(&board), NO_MATE);
    }

    #[test]
    fn missing_king_is_rejected_by_public_queries() {
        let board = board_with(&[("e1", Piece::white(PieceKind::King))]);
        assert!(board.attack_status().is_err());
        assert!(board.mate_status().is_err());
        assert!(board.is_king_attacked(Color::White).is_err());
        assert!(!is_king_attacked(&board, Color::Black));
    }
}
