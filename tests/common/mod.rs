// Utilitários partilhados pelos testes de integração
#![allow(dead_code)]

use xeque::*;

/// Monta uma posição a partir de tokens "Kg1 Rg5 kh4": a letra da peça em
/// maiúscula para as brancas e minúscula para as pretas.
pub fn position(pieces: &str) -> Board {
    let mut board = Board::empty();
    for token in pieces.split_whitespace() {
        let mut chars = token.chars();
        let letter = chars.next().expect("empty token");
        let color = if letter.is_ascii_uppercase() { Color::White } else { Color::Black };
        let kind = match letter.to_ascii_uppercase() {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'R' => PieceKind::Rook,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            'P' => PieceKind::Pawn,
            other => panic!("unknown piece letter {}", other),
        };
        let square: Square = chars.as_str().parse().expect("bad square");
        board.set_piece(square, Some(Piece::new(kind, color)));
    }
    board
}

pub fn mv(text: &str) -> Move {
    text.parse().expect("bad move")
}

/// Joga uma sequência de lances, todos obrigatoriamente legais.
pub fn play(board: &mut Board, moves: &[&str]) {
    for text in moves {
        assert!(board.try_move(mv(text)), "{} should be legal", text);
    }
}
