// Ficheiro: src/moves/sliding.rs
// Descrição: Raios de peças deslizantes (Torres e Bispos) até à borda, sem bloqueio.
// A oclusão é verificada só na legalidade (ver legality.rs).

use crate::core::{Bitboard, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

const fn generate_ray_table(directions: [(i8, i8); 4]) -> [Bitboard; 64] {
    let mut rays = [0u64; 64];
    let mut square = 0;

    while square < 64 {
        let rank = (square / 8) as i8;
        let file = 7 - (square % 8) as i8;
        let mut bb = 0u64;
        let mut d = 0;

        while d < 4 {
            let mut f = file + directions[d].0;
            let mut r = rank + directions[d].1;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                bb |= 1u64 << (r * 8 + (7 - f));
                f += directions[d].0;
                r += directions[d].1;
            }
            d += 1;
        }

        rays[square] = bb;
        square += 1;
    }

    rays
}

static ROOK_RAYS: [Bitboard; 64] = generate_ray_table(ROOK_DIRECTIONS);
static BISHOP_RAYS: [Bitboard; 64] = generate_ray_table(BISHOP_DIRECTIONS);

/// Rank e coluna inteiros a partir da casa.
#[inline]
pub fn rook_rays(square: Square) -> Bitboard {
    ROOK_RAYS[square.index() as usize]
}

/// As duas diagonais a partir da casa.
#[inline]
pub fn bishop_rays(square: Square) -> Bitboard {
    BISHOP_RAYS[square.index() as usize]
}
