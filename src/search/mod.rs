// Ficheiro: src/search/mod.rs
// Descrição: Busca de mate forçado (sequencial e paralela) e a sua configuração.

pub mod config;
pub mod mate_search;
pub mod parallel_search;

pub use config::{SearchConfig, SearchMode};
pub use mate_search::{MateSearcher, SearchResult};
