// Operações básicas de bitboard usadas pela geração de lances e pela busca

use crate::core::{Bitboard, Square};

/// Remove e retorna o LSB (pop LSB).
#[inline(always)]
pub fn pop_lsb(bb: &mut Bitboard) -> u8 {
    let lsb_index = bb.trailing_zeros() as u8;
    *bb &= *bb - 1;
    lsb_index
}

/// Verifica se o bitboard tem apenas um bit setado (é potência de 2)
#[inline(always)]
pub fn is_single_bit(bb: Bitboard) -> bool {
    bb != 0 && (bb & (bb - 1)) == 0
}

/// Itera sobre as casas de um bitboard, do bit menos significativo para o mais significativo.
pub struct BitboardIterator {
    bb: Bitboard,
}

impl BitboardIterator {
    #[inline(always)]
    pub fn new(bb: Bitboard) -> Self {
        Self { bb }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bb == 0 {
            None
        } else {
            Square::from_index(pop_lsb(&mut self.bb))
        }
    }
}

/// Trait para operações de bitboard
pub trait BitboardOps {
    fn iter_squares(self) -> BitboardIterator;
    fn lowest_square(self) -> Option<Square>;
    fn contains(self, sq: Square) -> bool;
}

impl BitboardOps for Bitboard {
    #[inline(always)]
    fn iter_squares(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }

    #[inline(always)]
    fn lowest_square(self) -> Option<Square> {
        if self == 0 {
            None
        } else {
            Square::from_index(self.trailing_zeros() as u8)
        }
    }

    #[inline(always)]
    fn contains(self, sq: Square) -> bool {
        self & sq.bit() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitboard_iterator() {
        let bb: Bitboard = 0x0000000000000105; // bits nas posições 0, 2, 8
        let squares: Vec<u8> = bb.iter_squares().map(Square::index).collect();
        assert_eq!(squares, vec![0, 2, 8]);
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb: Bitboard = 0x0000000000000101;
        assert_eq!(pop_lsb(&mut bb), 0);
        assert_eq!(bb, 0x0000000000000100);
        assert_eq!(pop_lsb(&mut bb), 8);
        assert_eq!(bb, 0);
    }

    #[test]
    fn test_single_bit_and_lowest_square() {
        assert!(is_single_bit(0x0000000000000100));
        assert!(!is_single_bit(0x0000000000000101));
        assert!(!is_single_bit(0));
        assert_eq!(0u64.lowest_square(), None);
        assert_eq!(0x0000000000000100u64.lowest_square().map(Square::index), Some(8));
    }
}
