// Ficheiro: src/search/parallel_search.rs
// Descrição: Divisão da raiz por um pool rayon. Cada lance da raiz é buscado
// numa cópia própria do tabuleiro; os contadores são partilhados (atómicos).

use std::sync::atomic::Ordering;

use rayon::prelude::*;

use super::config::SearchMode;
use super::mate_search::MateSearcher;
use crate::core::*;
use crate::moves::{legal_moves, mate_status};

impl MateSearcher {
    pub(crate) fn search_root_parallel(
        &self,
        board: &Board,
        side: Color,
    ) -> Result<(Score, Option<Move>), ChessError> {
        self.nodes_searched.fetch_add(1, Ordering::Relaxed);

        let root_moves = legal_moves(board, side);
        if root_moves.is_empty() {
            return Ok((mate_status(board), None));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()?;
        let winning = (!side).defeat_score();
        let stop_at_mate = self.config.mode == SearchMode::StopAtFirstMate;
        let child_depth = self.config.depth - 1;

        // (lance, score, provou o mate primeiro)
        let results: Vec<(Move, Score, bool)> = pool.install(|| {
            root_moves
                .par_iter()
                .filter_map(|&mv| {
                    let mut local = board.after(mv)?;
                    let (score, _) = self.minimax(&mut local, child_depth, !side, Score::MIN, Score::MAX);

                    // Só o primeiro worker a provar o mate levanta a flag; os
                    // resultados dos ramos interrompidos depois disso não contam.
                    let proved = stop_at_mate
                        && score == winning
                        && self
                            .should_stop
                            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Relaxed)
                            .is_ok();
                    log::trace!("root move {} scored {}", mv, score);
                    Some((mv, score, proved))
                })
                .collect()
        });

        if let Some(&(mv, score, _)) = results.iter().find(|(_, _, proved)| *proved) {
            return Ok((score, Some(mv)));
        }

        // Nenhuma interrupção: todos os valores são exatos. Empates ficam com o
        // primeiro na ordem de geração, como na busca sequencial.
        let best = results
            .into_iter()
            .reduce(|best, current| {
                let better = if side == Color::White {
                    current.1 > best.1
                } else {
                    current.1 < best.1
                };
                if better {
                    current
                } else {
                    best
                }
            })
            .map(|(mv, score, _)| (score, Some(mv)));

        Ok(best.unwrap_or((mate_status(board), None)))
    }
}
