// Ficheiro: src/core/error.rs
// Descrição: Erros do núcleo. Lances ilegais não são erros (devolvem `false`).

use super::types::Color;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid coordinate {file}{rank}: files run a-h and ranks 1-8")]
    InvalidCoordinate { file: char, rank: u8 },

    #[error("invalid notation `{0}`")]
    InvalidNotation(String),

    #[error("{color} must have exactly one king on the board, found {count}")]
    KingCount { color: Color, count: u32 },

    #[error("unknown scenario `{0}`")]
    UnknownScenario(String),

    #[error("failed to build search thread pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for ChessError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        ChessError::ThreadPool(err.to_string())
    }
}
