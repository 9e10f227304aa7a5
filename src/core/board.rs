// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board (armazenamento da posição) e os seus métodos principais.

use std::fmt;

use super::error::ChessError;
use super::types::*;
use crate::bitboard::{is_single_bit, BitboardOps};

// A struct principal do tabuleiro: um bitboard por tipo de peça e por cor.
// Invariante: cada casa pertence a no máximo um dos 12 conjuntos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pieces: [[Bitboard; 6]; 2],

    // Lado para o qual as consultas de mate forçado procuram.
    pub to_move: Color,
}

impl Board {
    /// Cria um novo tabuleiro na posição inicial padrão.
    pub fn new() -> Self {
        // Coluna espelhada: h1 = bit 0, a1 = bit 7.
        const WHITE_PAWNS: Bitboard = 0xff << 8;
        const WHITE_ROOKS: Bitboard = (1 << 7) | 0b1;
        const WHITE_BISHOPS: Bitboard = (1 << 5) | 0b100;
        const WHITE_KNIGHTS: Bitboard = (1 << 6) | 0b10;
        const WHITE_QUEEN: Bitboard = 1 << 4;
        const WHITE_KING: Bitboard = 1 << 3;

        let mut board = Board::empty();
        let white = [WHITE_PAWNS, WHITE_ROOKS, WHITE_BISHOPS, WHITE_KNIGHTS, WHITE_QUEEN, WHITE_KING];
        for kind in PieceKind::ALL {
            let bb = white[kind.index()];
            board.pieces[Color::White.index()][kind.index()] = bb;
            // As pretas espelham as brancas verticalmente (peões na 7ª, resto na 8ª).
            board.pieces[Color::Black.index()][kind.index()] = if kind == PieceKind::Pawn {
                bb << 40
            } else {
                bb << 56
            };
        }
        board
    }

    /// Tabuleiro sem nenhuma peça.
    pub fn empty() -> Self {
        Board {
            pieces: [[0; 6]; 2],
            to_move: Color::White,
        }
    }

    pub fn with_to_move(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    /// Bitboard de um tipo de peça.
    #[inline]
    pub fn bitboard(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.color.index()][piece.kind.index()]
    }

    /// Todas as casas ocupadas por uma cor.
    #[inline]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces[color.index()].iter().fold(0, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn all_pieces(&self) -> Bitboard {
        self.occupancy(Color::White) | self.occupancy(Color::Black)
    }

    /// Peça numa casa (índice interno).
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let mask = sq.bit();
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(kind, color));
                }
            }
        }
        None
    }

    /// Coloca (ou remove, com `None`) uma peça numa casa.
    /// O ocupante anterior sai do seu conjunto antes de a nova peça entrar.
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        let mask = sq.bit();
        if let Some(old) = self.piece_at(sq) {
            self.pieces[old.color.index()][old.kind.index()] &= !mask;
        }
        if let Some(new) = piece {
            self.pieces[new.color.index()][new.kind.index()] |= mask;
        }
    }

    /// `get(file, rank)` com coordenadas externas.
    pub fn get(&self, file: char, rank: u8) -> Result<Option<Piece>, ChessError> {
        Ok(self.piece_at(Square::at(file, rank)?))
    }

    /// `set(file, rank, piece)` com coordenadas externas; rejeita casas fora do tabuleiro.
    pub fn set(&mut self, file: char, rank: u8, piece: Option<Piece>) -> Result<(), ChessError> {
        self.set_piece(Square::at(file, rank)?, piece);
        Ok(())
    }

    /// Casa do rei de uma cor (bit menos significativo do conjunto).
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces[color.index()][PieceKind::King.index()].lowest_square()
    }

    /// Ataque e mate só fazem sentido com exatamente um rei de cada lado.
    pub fn validate_kings(&self) -> Result<(), ChessError> {
        for color in [Color::White, Color::Black] {
            let kings = self.pieces[color.index()][PieceKind::King.index()];
            if !is_single_bit(kings) {
                return Err(ChessError::KingCount {
                    color,
                    count: kings.count_ones(),
                });
            }
        }
        Ok(())
    }

    /// Executa um lance sem validar, devolvendo o que é preciso para o desfazer.
    /// Com a origem vazia não há lance: devolve `None` e não mexe em nada.
    pub fn make_move(&mut self, mv: Move) -> Option<UndoInfo> {
        let moved = self.piece_at(mv.from)?;
        let captured = self.piece_at(mv.to);
        self.set_piece(mv.to, Some(moved));
        self.set_piece(mv.from, None);
        Some(UndoInfo { moved, captured })
    }

    /// Desfaz um lance feito com `make_move`: repõe a peça movida e o ocupante capturado.
    pub fn unmake_move(&mut self, mv: Move, undo: UndoInfo) {
        self.set_piece(mv.from, Some(undo.moved));
        self.set_piece(mv.to, undo.captured);
    }

    /// Cópia do tabuleiro com o lance aplicado (o original fica intacto).
    pub fn after(&self, mv: Move) -> Option<Board> {
        let mut next = *self;
        next.make_move(mv)?;
        Some(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for rank in (0..8i8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8i8 {
                let glyph = Square::from_file_rank(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |piece| piece.glyph());
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
