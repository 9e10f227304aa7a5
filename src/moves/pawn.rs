// Ficheiro: src/moves/pawn.rs
// Descrição: Avanços dos peões usados para semear candidatos da busca.
// Capturas diagonais não entram aqui; só a legalidade as conhece.

use crate::core::{Bitboard, Color, Square};

/// Um passo em frente sempre (se houver casa), dois a partir da casa inicial.
pub fn pawn_pushes(square: Square, color: Color) -> Bitboard {
    let forward = color.forward();
    let mut bb = 0;

    if let Some(one) = square.offset(0, forward) {
        bb |= one.bit();
    }
    if square.rank() == color.pawn_home_rank() {
        if let Some(two) = square.offset(0, 2 * forward) {
            bb |= two.bit();
        }
    }
    bb
}
