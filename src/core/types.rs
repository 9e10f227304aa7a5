// Ficheiro: src/core/types.rs
// Descrição: Módulo para as definições de tipos de dados fundamentais do jogo.

use std::fmt;
use std::str::FromStr;

use super::error::ChessError;

// Um Bitboard é um inteiro de 64 bits sem sinal. Cada bit representa uma casa.
// Bit = rank * 8 + (7 - file): a coluna fica espelhada (h1 = bit 0, a1 = bit 7).
pub type Bitboard = u64;

/// Resultado terminal da busca: só existe o sinal de mate.
pub type Score = i32;

/// O rei branco não tem fuga.
pub const WHITE_MATED: Score = -1;
pub const NO_MATE: Score = 0;
/// O rei preto não tem fuga.
pub const BLACK_MATED: Score = 1;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direção de avanço dos peões, em ranks.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank (0-based) de onde os peões podem avançar duas casas.
    #[inline]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Score que significa "esta cor levou mate" (e também "está em xeque").
    #[inline]
    pub const fn defeat_score(self) -> Score {
        match self {
            Color::White => WHITE_MATED,
            Color::Black => BLACK_MATED,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
// A cor é um campo; nunca depende da ordem de declaração dos enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Piece::new(kind, Color::White)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Piece::new(kind, Color::Black)
    }

    /// Peça adversária? (o alvo de uma captura)
    #[inline]
    pub fn is_enemy_of(&self, color: Color) -> bool {
        self.color != color
    }

    pub fn glyph(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::King) => '\u{265A}',
            (Color::Black, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::Rook) => '\u{265C}',
            (Color::Black, PieceKind::Bishop) => '\u{265D}',
            (Color::Black, PieceKind::Knight) => '\u{265E}',
            (Color::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}

/// Uma das 64 casas, já no índice interno (coluna espelhada).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Índice interno de uma coluna/rank 0-based (sem verificação).
    #[inline]
    pub(crate) const fn index_of(file: u8, rank: u8) -> u8 {
        rank * 8 + (7 - file)
    }

    /// Constrói a partir do índice interno (0..64).
    pub fn from_index(index: u8) -> Option<Square> {
        (index < 64).then_some(Square(index))
    }

    /// Coordenadas 0-based; `None` fora do tabuleiro.
    pub fn from_file_rank(file: i8, rank: i8) -> Option<Square> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square(Self::index_of(file as u8, rank as u8)))
        } else {
            None
        }
    }

    /// Coordenada externa: coluna 'a'..='h', rank 1..=8.
    pub fn at(file: char, rank: u8) -> Result<Square, ChessError> {
        if !('a'..='h').contains(&file) || !(1..=8).contains(&rank) {
            return Err(ChessError::InvalidCoordinate { file, rank });
        }
        Ok(Square(Self::index_of(file as u8 - b'a', rank - 1)))
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn bit(self) -> Bitboard {
        1u64 << self.0
    }

    /// Coluna 0-based, a = 0.
    #[inline]
    pub const fn file(self) -> u8 {
        7 - (self.0 & 7)
    }

    /// Rank 0-based, rank 1 = 0.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    /// Casa deslocada de (df, dr), se ainda estiver no tabuleiro.
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::from_file_rank(self.file() as i8 + df, self.rank() as i8 + dr)
    }

    /// Distância de Chebyshev (passos de rei).
    pub fn distance(self, other: Square) -> u8 {
        let df = (self.file() as i8 - other.file() as i8).unsigned_abs();
        let dr = (self.rank() as i8 - other.rank() as i8).unsigned_abs();
        df.max(dr)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                let rank = rank
                    .to_digit(10)
                    .ok_or_else(|| ChessError::InvalidNotation(s.to_string()))?;
                Square::at(file.to_ascii_lowercase(), rank as u8)
            }
            _ => Err(ChessError::InvalidNotation(s.to_string())),
        }
    }
}

// Struct para representar um lance no jogo.
// Guarda só a casa de origem e a de destino; a peça é a que estiver na origem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessError::InvalidNotation(s.to_string()));
        }
        Ok(Move::new(s[..2].parse()?, s[2..].parse()?))
    }
}

/// Estado necessário para desfazer um lance (make/unmake).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoInfo {
    pub moved: Piece,
    pub captured: Option<Piece>,
}
