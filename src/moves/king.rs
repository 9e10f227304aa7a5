// Ficheiro: src/moves/king.rs
// Descrição: Casas alcançáveis pelo Rei (tabela pré-calculada).

use crate::core::{Bitboard, Square};

/// Os 8 deslocamentos (coluna, rank) de um passo de rei.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, 1), (0, 1), (1, 1),
    (-1, 0),         (1, 0),
    (-1, -1), (0, -1), (1, -1),
];

/// Gera a tabela de destinos de rei para todas as 64 casas.
const fn generate_king_targets_table() -> [Bitboard; 64] {
    let mut targets = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let rank = (square / 8) as i8;
        let file = 7 - (square % 8) as i8;
        let mut bb = 0u64;
        let mut i = 0;

        while i < KING_OFFSETS.len() {
            let f = file + KING_OFFSETS[i].0;
            let r = rank + KING_OFFSETS[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bb |= 1u64 << (r * 8 + (7 - f));
            }
            i += 1;
        }

        targets[square] = bb;
        square += 1;
    }

    targets
}

/// Tabela pré-calculada de destinos de rei para cada casa do tabuleiro.
static KING_TARGETS: [Bitboard; 64] = generate_king_targets_table();

#[inline]
pub fn king_targets(square: Square) -> Bitboard {
    KING_TARGETS[square.index() as usize]
}
