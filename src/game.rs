// Ficheiro: src/game.rs
// Descrição: O "jogo" à volta do núcleo: posições de teste nomeadas e o ciclo
// init/update/draw que monta o tabuleiro e corre as buscas de mate.

use std::fmt;
use std::str::FromStr;

use crate::core::*;
use crate::search::{MateSearcher, SearchConfig, SearchResult};

/// Posições de teste conhecidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    Start,
    TwoRooks,
    RookCorner,
    RookLadder,
    HFile,
    MinorPieces,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::Start,
        Scenario::TwoRooks,
        Scenario::RookCorner,
        Scenario::RookLadder,
        Scenario::HFile,
        Scenario::MinorPieces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Start => "start",
            Scenario::TwoRooks => "two-rooks",
            Scenario::RookCorner => "rook-corner",
            Scenario::RookLadder => "rook-ladder",
            Scenario::HFile => "h-file",
            Scenario::MinorPieces => "minor-pieces",
        }
    }

    // (coluna, rank, peça); a posição inicial vem de Board::new
    fn placements(self) -> &'static [(char, u8, Piece)] {
        use PieceKind::*;
        const W: Color = Color::White;
        const B: Color = Color::Black;

        const TWO_ROOKS: &[(char, u8, Piece)] = &[
            ('g', 1, Piece::new(King, W)),
            ('g', 5, Piece::new(Rook, W)),
            ('f', 6, Piece::new(Rook, W)),
            ('h', 4, Piece::new(King, B)),
        ];
        const ROOK_CORNER: &[(char, u8, Piece)] = &[
            ('b', 3, Piece::new(Rook, W)),
            ('c', 3, Piece::new(King, W)),
            ('a', 2, Piece::new(King, B)),
        ];
        const ROOK_LADDER: &[(char, u8, Piece)] = &[
            ('b', 2, Piece::new(Rook, W)),
            ('c', 2, Piece::new(King, W)),
            ('a', 1, Piece::new(King, B)),
        ];
        const H_FILE: &[(char, u8, Piece)] = &[
            ('h', 7, Piece::new(King, B)),
            ('g', 6, Piece::new(Rook, W)),
            ('f', 6, Piece::new(King, W)),
        ];
        const MINOR_PIECES: &[(char, u8, Piece)] = &[
            ('e', 6, Piece::new(King, W)),
            ('e', 7, Piece::new(Pawn, W)),
            ('g', 4, Piece::new(Knight, W)),
            ('h', 2, Piece::new(Pawn, B)),
            ('e', 8, Piece::new(King, B)),
            ('b', 7, Piece::new(Bishop, B)),
        ];

        match self {
            Scenario::Start => &[],
            Scenario::TwoRooks => TWO_ROOKS,
            Scenario::RookCorner => ROOK_CORNER,
            Scenario::RookLadder => ROOK_LADDER,
            Scenario::HFile => H_FILE,
            Scenario::MinorPieces => MINOR_PIECES,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| ChessError::UnknownScenario(s.to_string()))
    }
}

pub struct Game {
    pub board: Board,
    pub scenario: Scenario,
}

impl Game {
    pub fn new(scenario: Scenario) -> Result<Self, ChessError> {
        let mut game = Game {
            board: Board::new(),
            scenario,
        };
        game.init()?;
        Ok(game)
    }

    /// Limpa as 64 casas e coloca as peças do cenário.
    pub fn init(&mut self) -> Result<(), ChessError> {
        if self.scenario == Scenario::Start {
            self.board = Board::new();
        } else {
            for file in 'a'..='h' {
                for rank in 1..=8 {
                    self.board.set(file, rank, None)?;
                }
            }
            for &(file, rank, piece) in self.scenario.placements() {
                self.board.set(file, rank, Some(piece))?;
            }
        }
        self.board.to_move = Color::White;
        log::info!("scenario {} ready", self.scenario);
        Ok(())
    }

    /// Nada evolui entre frames: a posição é fixa.
    pub fn update(&mut self) {}

    /// Corre mate-em-um e a busca com a profundidade configurada.
    pub fn draw(&self, config: SearchConfig) -> Result<GameReport, ChessError> {
        let mate_in_one = MateSearcher::new(config.with_depth(1)).search(&self.board)?;
        let mate_in_n = MateSearcher::new(config).search(&self.board)?;
        log::info!(
            "{}: mate in one {}, depth {} {}",
            self.scenario,
            mate_in_one.forced_mate,
            mate_in_n.depth,
            mate_in_n.forced_mate
        );
        Ok(GameReport {
            scenario: self.scenario,
            board: self.board,
            mate_in_one,
            mate_in_n,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GameReport {
    pub scenario: Scenario,
    pub board: Board,
    pub mate_in_one: SearchResult,
    pub mate_in_n: SearchResult,
}

fn verdict_line(f: &mut fmt::Formatter<'_>, label: &str, result: &SearchResult) -> fmt::Result {
    let best = result
        .best_move
        .map_or_else(|| "-".to_string(), |mv| mv.to_string());
    writeln!(
        f,
        "{:<14} {:<5} best {:<5} nodes {:>8} time {:.3}ms",
        label,
        result.forced_mate,
        best,
        result.nodes_searched,
        result.time_elapsed.as_secs_f64() * 1000.0
    )
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario: {} ({} to move)", self.scenario, self.board.to_move)?;
        write!(f, "{}", self.board)?;
        verdict_line(f, "mate in 1:", &self.mate_in_one)?;
        let label = format!("depth {}:", self.mate_in_n.depth);
        verdict_line(f, &label, &self.mate_in_n)
    }
}
