// Ficheiro: src/moves/legality.rs
// Descrição: Validação de lances. Primeiro o padrão da peça (geometria, oclusão,
// captura), depois o teste de auto-xeque numa cópia do tabuleiro.

use super::attacks::is_king_attacked;
use super::king::king_targets;
use crate::core::{Board, ChessError, Color, Move, Piece, PieceKind, Square};

/// O lance respeita o padrão da peça na origem?
///
/// Não verifica se o rei de quem joga fica atacado; é esta a relação usada
/// pelo detetor de ataques.
pub fn follows_pattern(board: &Board, mv: Move) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        return false;
    };
    if mv.from == mv.to {
        return false;
    }
    let target = board.piece_at(mv.to);
    if matches!(target, Some(t) if !t.is_enemy_of(piece.color)) {
        return false;
    }

    let df = mv.to.file() as i8 - mv.from.file() as i8;
    let dr = mv.to.rank() as i8 - mv.from.rank() as i8;

    match piece.kind {
        PieceKind::Pawn => pawn_pattern(board, piece.color, mv, df, dr, target),
        PieceKind::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => df.abs() == dr.abs() && path_is_clear(board, mv),
        PieceKind::Rook => (df == 0 || dr == 0) && path_is_clear(board, mv),
        PieceKind::Queen => {
            (df == 0 || dr == 0 || df.abs() == dr.abs()) && path_is_clear(board, mv)
        }
        PieceKind::King => {
            mv.from.distance(mv.to) <= 1 && !touches_enemy_king(board, mv.to, piece.color)
        }
    }
}

fn pawn_pattern(
    board: &Board,
    color: Color,
    mv: Move,
    df: i8,
    dr: i8,
    target: Option<Piece>,
) -> bool {
    let forward = color.forward();

    if df == 0 && target.is_none() {
        if dr == forward {
            return true;
        }
        // Avanço duplo: só da casa inicial e com a casa intermédia livre
        return mv.from.rank() == color.pawn_home_rank()
            && dr == 2 * forward
            && mv
                .from
                .offset(0, forward)
                .is_some_and(|mid| board.piece_at(mid).is_none());
    }

    // Captura diagonal; `target` já é adversário se existir
    df.abs() == 1 && dr == forward && target.is_some()
}

/// Todas as casas estritamente entre origem e destino estão vazias.
/// Assume que origem e destino estão na mesma linha, coluna ou diagonal.
fn path_is_clear(board: &Board, mv: Move) -> bool {
    let df = mv.to.file() as i8 - mv.from.file() as i8;
    let dr = mv.to.rank() as i8 - mv.from.rank() as i8;
    let (step_f, step_r) = (df.signum(), dr.signum());
    let occupied = board.all_pieces();

    (1..mv.from.distance(mv.to) as i8).all(|i| {
        mv.from
            .offset(i * step_f, i * step_r)
            .is_some_and(|sq| occupied & sq.bit() == 0)
    })
}

/// Os reis nunca podem terminar um lance a uma casa um do outro.
fn touches_enemy_king(board: &Board, to: Square, color: Color) -> bool {
    let enemy_king = board.bitboard(Piece::new(PieceKind::King, !color));
    enemy_king & (king_targets(to) | to.bit()) != 0
}

/// Legalidade completa: padrão da peça, reis não são capturáveis, e o rei
/// de quem joga não pode ficar atacado depois do lance.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    if !follows_pattern(board, mv) {
        return false;
    }
    if matches!(board.piece_at(mv.to), Some(t) if t.kind == PieceKind::King) {
        return false;
    }
    let Some(mover) = board.piece_at(mv.from) else {
        return false;
    };
    board
        .after(mv)
        .is_some_and(|next| !is_king_attacked(&next, mover.color))
}

impl Board {
    /// Não valida os reis: sem rei próprio no tabuleiro não há auto-xeque a
    /// testar e só conta o padrão da peça. Use `move_piece` para a validação completa.
    pub fn is_legal(&self, mv: Move) -> bool {
        is_legal(self, mv)
    }

    /// Aplica o lance se for legal; um lance rejeitado não altera nada.
    /// Mesma regra de `is_legal` para posições sem rei.
    pub fn try_move(&mut self, mv: Move) -> bool {
        if !is_legal(self, mv) {
            return false;
        }
        self.make_move(mv).is_some()
    }

    /// `move(from, to)` com coordenadas externas.
    /// Coordenadas fora do tabuleiro e posições sem exatamente um rei de cada
    /// lado são erro; um lance ilegal devolve `Ok(false)`.
    pub fn move_piece(&mut self, from: (char, u8), to: (char, u8)) -> Result<bool, ChessError> {
        let mv = Move::new(Square::at(from.0, from.1)?, Square::at(to.0, to.1)?);
        self.validate_kings()?;
        Ok(self.try_move(mv))
    }
}
