// Ficheiro: src/search/mate_search.rs
// Descrição: Busca minimax com poda alpha-beta que só distingue "mate" de "não mate".
// As brancas maximizam, as pretas minimizam; as folhas valem `mate_status`.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use super::config::{SearchConfig, SearchMode};
use crate::bitboard::BitboardOps;
use crate::core::*;
use crate::moves::{candidate_targets, is_legal, mate_status};

/// Resultado de uma busca de mate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Valor minimax da raiz: -1, 0 ou 1.
    pub score: Score,
    /// Primeiro lance da raiz que atingiu `score` (None sem lances ou com depth 0).
    pub best_move: Option<Move>,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
    /// O lado a jogar força o mate dentro do horizonte.
    pub forced_mate: bool,
}

pub struct MateSearcher {
    pub config: SearchConfig,
    pub(crate) nodes_searched: AtomicU64,
    pub(crate) should_stop: AtomicBool,
}

impl MateSearcher {
    pub fn new(config: SearchConfig) -> Self {
        MateSearcher {
            config,
            nodes_searched: AtomicU64::new(0),
            should_stop: AtomicBool::new(false),
        }
    }

    /// Procura um mate forçado para `board.to_move`. O tabuleiro recebido nunca
    /// é alterado: a busca trabalha numa cópia (ou numa por worker).
    pub fn search(&self, board: &Board) -> Result<SearchResult, ChessError> {
        board.validate_kings()?;
        self.nodes_searched.store(0, Ordering::Relaxed);
        self.should_stop.store(false, Ordering::Relaxed);

        let start_time = Instant::now();
        let side = board.to_move;
        log::debug!(
            "mate search for {}: depth {} mode {:?} threads {}",
            side,
            self.config.depth,
            self.config.mode,
            self.config.threads
        );

        let (score, best_move) = if self.config.threads > 1 && self.config.depth >= 2 {
            self.search_root_parallel(board, side)?
        } else {
            let mut scratch = *board;
            self.minimax(&mut scratch, self.config.depth, side, Score::MIN, Score::MAX)
        };

        let result = SearchResult {
            score,
            best_move,
            depth: self.config.depth,
            nodes_searched: self.nodes_searched.load(Ordering::Relaxed),
            time_elapsed: start_time.elapsed(),
            forced_mate: score == (!side).defeat_score(),
        };
        log::debug!(
            "mate search done: score {} best {:?} nodes {} in {:?}",
            result.score,
            result.best_move.map(|mv| mv.to_string()),
            result.nodes_searched,
            result.time_elapsed
        );
        Ok(result)
    }

    /// Nó minimax. Devolve o valor do nó e o primeiro lance que o atingiu.
    /// O tabuleiro volta sempre ao estado de entrada (make/unmake).
    pub(crate) fn minimax(
        &self,
        board: &mut Board,
        depth: u8,
        side: Color,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Score, Option<Move>) {
        self.nodes_searched.fetch_add(1, Ordering::Relaxed);

        if depth == 0 {
            return (mate_status(board), None);
        }
        // Outro worker já provou o mate na raiz; este ramo não conta mais.
        if self.should_stop.load(Ordering::Relaxed) {
            return (NO_MATE, None);
        }

        let maximizing = side == Color::White;
        let winning = (!side).defeat_score();
        let stop_at_mate = self.config.mode == SearchMode::StopAtFirstMate;
        let mut best_score = if maximizing { Score::MIN } else { Score::MAX };
        let mut best_move = None;

        'pieces: for from in board.occupancy(side).iter_squares() {
            for to in candidate_targets(board, from).iter_squares() {
                let mv = Move::new(from, to);
                if !is_legal(board, mv) {
                    continue;
                }

                let Some(undo) = board.make_move(mv) else {
                    continue;
                };
                let (score, _) = self.minimax(board, depth - 1, !side, alpha, beta);
                board.unmake_move(mv, undo);

                let improves = if maximizing {
                    score > best_score
                } else {
                    score < best_score
                };
                if best_move.is_none() || improves {
                    best_score = score;
                    best_move = Some(mv);
                }

                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
                if alpha >= beta || (stop_at_mate && best_score == winning) {
                    break 'pieces;
                }
            }
        }

        match best_move {
            Some(_) => (best_score, best_move),
            // Sem lances legais: o nó vale o que a posição mostra.
            None => (mate_status(board), None),
        }
    }
}

impl Board {
    /// O lado a jogar dá mate num lance?
    pub fn has_forced_mate_in_one(&self) -> Result<bool, ChessError> {
        Ok(MateSearcher::new(SearchConfig::mate_in_one()).search(self)?.forced_mate)
    }

    /// O lado a jogar força o mate com dois lances próprios, contra qualquer resposta?
    pub fn has_forced_mate_in_two_own_moves(&self) -> Result<bool, ChessError> {
        Ok(MateSearcher::new(SearchConfig::mate_in_two()).search(self)?.forced_mate)
    }
}
