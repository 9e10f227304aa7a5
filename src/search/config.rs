// Configuração da busca de mate forçado

/// Como a busca corta a árvore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Alpha-beta puro.
    Exhaustive,
    /// Alpha-beta e, além disso, um nó para assim que o lado a jogar garantiu o
    /// próprio mate (não existe resultado melhor). Em paralelo, os outros workers
    /// da raiz param quando um lance da raiz prova o mate. O veredito é o mesmo.
    StopAtFirstMate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Profundidade em plies.
    pub depth: u8,
    pub mode: SearchMode,
    /// 1 = busca sequencial; mais do que 1 divide os lances da raiz num pool rayon.
    pub threads: usize,
}

impl SearchConfig {
    /// O lado a jogar tem mate imediato?
    pub fn mate_in_one() -> Self {
        Self::default().with_depth(1)
    }

    /// Lance, resposta, lance: mate em dois lances próprios.
    pub fn mate_in_two() -> Self {
        Self::default().with_depth(3)
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        if threads == 0 {
            log::warn!("search threads must be at least 1, using 1");
        }
        self.threads = threads.max(1);
        self
    }

    /// Um thread por CPU lógico.
    pub fn with_all_cpus(self) -> Self {
        self.with_threads(num_cpus::get())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            mode: SearchMode::StopAtFirstMate,
            threads: 1,
        }
    }
}
