// Ficheiro: src/moves/knight.rs
// Descrição: Casas alcançáveis pelos cavalos (tabela pré-calculada).

use crate::core::{Bitboard, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (-1, 2), (-2, 1),
    (1, -2), (2, -1), (-1, -2), (-2, -1),
];

/// Gera a tabela de destinos de cavalo para todas as 64 casas.
const fn generate_knight_targets_table() -> [Bitboard; 64] {
    let mut targets = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let rank = (square / 8) as i8;
        let file = 7 - (square % 8) as i8;
        let mut bb = 0u64;
        let mut i = 0;

        while i < KNIGHT_OFFSETS.len() {
            let f = file + KNIGHT_OFFSETS[i].0;
            let r = rank + KNIGHT_OFFSETS[i].1;
            // Descarta saltos que sairiam do tabuleiro
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

static KNIGHT_TARGETS: [Bitboard; 64] = generate_knight_targets_table();

#[inline]
pub fn knight_targets(square: Square) -> Bitboard {
    KNIGHT_TARGETS[square.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::BitboardOps;

    #[test]
    fn knight_from_corner() {
        let targets = knight_targets("a1".parse().unwrap());
        let mut names: Vec<String> = targets.iter_squares().map(|sq| sq.to_string()).collect();
        names.sort();
        assert_eq!(names, vec!["b3", "c2"]);
    }

    #[test]
    fn knight_from_center() {
        assert_eq!(knight_targets("d4".parse().unwrap()).count_ones(), 8);
        assert_eq!(knight_targets("g1".parse().unwrap()).count_ones(), 3);
    }
}
