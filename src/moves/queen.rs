// Ficheiro: src/moves/queen.rs
// Descrição: Casas alcançáveis pela Dama: união dos raios de torre e de bispo.

use super::sliding::{bishop_rays, rook_rays};
use crate::core::{Bitboard, Square};

#[inline]
pub fn queen_rays(square: Square) -> Bitboard {
    rook_rays(square) | bishop_rays(square)
}
