// Xeque - modelo de posição de xadrez em bitboards com busca de mate forçado

pub mod bitboard;
pub mod core;
pub mod game;
pub mod moves;
pub mod search;

pub use crate::core::*;
