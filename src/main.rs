// Xeque - corre o ciclo init/update/draw sobre um cenário e imprime os veredictos

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use xeque::game::{Game, Scenario};
use xeque::search::{SearchConfig, SearchMode};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Posição a analisar (start, two-rooks, rook-corner, rook-ladder, h-file, minor-pieces)
    #[arg(short, long, default_value = "two-rooks")]
    scenario: String,

    /// Profundidade da segunda busca, em plies (3 = mate em dois lances próprios)
    #[arg(long)]
    depth: Option<u8>,

    /// Threads da busca; 0 usa todos os CPUs
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Desliga o corte ao primeiro mate encontrado
    #[arg(long)]
    exhaustive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn run(args: &Args) -> Result<()> {
    let scenario: Scenario = args.scenario.parse()?;

    let mut config = SearchConfig::mate_in_two();
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    if args.exhaustive {
        config = config.with_mode(SearchMode::Exhaustive);
    }
    config = if args.threads == 0 {
        config.with_all_cpus()
    } else {
        config.with_threads(args.threads)
    };

    let mut game = Game::new(scenario)?;
    game.update();
    let report = game
        .draw(config)
        .with_context(|| format!("mate search failed for scenario {}", scenario))?;

    println!("{}", report);
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
