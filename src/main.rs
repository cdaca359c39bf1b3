use anyhow::Context;
use nimi_solver::cli::{CliInterface, display_summary, parse_cli};
use nimi_solver::logging::init_logging;
use nimi_solver::{Solver, SimulatedInterface, play_game};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = parse_cli();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let setup = cli.resolve(&mut rng)?;
    log::info!(
        "{} solution words, {} guess words, strategy {}{}",
        setup.solution_words.len(),
        setup.guess_words.len(),
        setup.strategy,
        if setup.hard_mode { ", hard mode" } else { "" }
    );

    let mut solver = Solver::with_rng(
        setup.solution_words,
        setup.guess_words,
        setup.strategy,
        setup.hard_mode,
        StdRng::seed_from_u64(rng.r#gen()),
    );

    let rounds = match setup.target {
        Some(target) => {
            let mut interface = SimulatedInterface::new(target);
            play_game(&mut solver, &setup.config, &mut interface)
        }
        None => {
            let mut interface = CliInterface::new(io::stdin().lock());
            let rounds = play_game(&mut solver, &setup.config, &mut interface);
            println!();
            rounds
        }
    }
    .context("game aborted")?;

    display_summary(&rounds);
    Ok(())
}
