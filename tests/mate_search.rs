mod common;

use common::{play, position};
use xeque::game::{Game, Scenario};
use xeque::search::{MateSearcher, SearchConfig, SearchMode};
use xeque::*;

fn both_queries(board: &Board) -> (bool, bool) {
    (
        board.has_forced_mate_in_one().unwrap(),
        board.has_forced_mate_in_two_own_moves().unwrap(),
    )
}

#[test]
fn start_position_has_no_short_mate_for_either_side() {
    let board = Board::new();
    assert_eq!(both_queries(&board), (false, false));
    assert_eq!(both_queries(&board.with_to_move(Color::Black)), (false, false));
}

#[test]
fn scenario_verdicts() {
    let expected = [
        (Scenario::TwoRooks, false, true),
        (Scenario::RookCorner, false, true),
        (Scenario::RookLadder, false, true),
        (Scenario::HFile, false, true),
        (Scenario::MinorPieces, true, true),
    ];
    for (scenario, in_one, in_two) in expected {
        let board = Game::new(scenario).unwrap().board;
        assert_eq!(both_queries(&board), (in_one, in_two), "{}", scenario);
        // as pretas não têm material para mate em nenhuma destas
        let black = board.with_to_move(Color::Black);
        assert_eq!(both_queries(&black), (false, false), "{} black", scenario);
    }
}

#[test]
fn knight_delivers_the_minor_piece_mate() {
    let board = Game::new(Scenario::MinorPieces).unwrap().board;
    let result = MateSearcher::new(SearchConfig::mate_in_one()).search(&board).unwrap();
    assert!(result.forced_mate);
    assert_eq!(result.best_move, Some("g4f6".parse().unwrap()));
}

#[test]
fn back_rank_mate_in_one() {
    let board = position("Ra1 Kh6 kh8");
    assert!(board.has_forced_mate_in_one().unwrap());
}

#[test]
fn black_finds_fools_mate() {
    let mut board = Board::new();
    play(&mut board, &["f2f3", "e7e5", "g2g4"]);
    let board = board.with_to_move(Color::Black);
    let result = MateSearcher::new(SearchConfig::mate_in_one()).search(&board).unwrap();
    assert!(result.forced_mate);
    assert_eq!(result.score, WHITE_MATED);
    assert_eq!(result.best_move, Some("d8h4".parse().unwrap()));
}

#[test]
fn modes_and_thread_counts_agree() {
    let fixtures = [
        position("Kg1 Rg5 Rf6 kh4"),
        position("Rb3 Kc3 ka2"),
        Board::new(),
    ];
    for board in fixtures {
        let reference = MateSearcher::new(SearchConfig::mate_in_two().with_mode(SearchMode::Exhaustive))
            .search(&board)
            .unwrap();
        for mode in [SearchMode::Exhaustive, SearchMode::StopAtFirstMate] {
            for threads in [1, 3] {
                let config = SearchConfig::mate_in_two().with_mode(mode).with_threads(threads);
                let result = MateSearcher::new(config).search(&board).unwrap();
                assert_eq!(result.score, reference.score, "{:?} x{}", mode, threads);
                assert_eq!(result.forced_mate, reference.forced_mate);
            }
        }
    }
}

#[test]
fn mate_already_on_the_board_propagates() {
    // As brancas estão em mate: nenhum lance legal, e o nó vale o mate.
    let mut board = Board::new();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let result = MateSearcher::new(SearchConfig::mate_in_two()).search(&board).unwrap();
    assert_eq!(result.score, WHITE_MATED);
    assert_eq!(result.best_move, None);
    assert!(!result.forced_mate);
}

#[test]
fn search_requires_one_king_each() {
    let board = position("Kg1 Rg5 Rf6");
    assert!(matches!(
        board.has_forced_mate_in_two_own_moves(),
        Err(ChessError::KingCount { color: Color::Black, count: 0 })
    ));
    let parallel = MateSearcher::new(SearchConfig::mate_in_two().with_threads(2));
    assert!(parallel.search(&board).is_err());
}
