//! Offline siege match simulator.
//!
//! Runs one seeded [`StrategySession`] against the in-memory reference board
//! and a scripted opponent, then prints a per-turn summary.
//!
//! ```bash
//! SIEGE_SEED=7 SIEGE_OFFENSE=adaptive RUST_LOG=debug cargo run -p siege-client
//! ```
mod config;
mod scenario;

use anyhow::Result;
use siege_core::{PlayerId, SpawnOracle};
use siege_runtime::{GridBoard, StrategySession, TurnPlanner};

use crate::config::SimConfig;
use crate::scenario::ScriptedOpponent;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env()?;
    tracing::info!("Simulating {} turns", config.turns);

    let mut board = GridBoard::standard(config.starting);
    let opponent = ScriptedOpponent::new(PlayerId::Player2);
    opponent.fortify(&mut board);

    if !config.opening.is_empty() {
        let outcomes = TurnPlanner::replay_commands(&mut board, &config.opening);
        let applied = outcomes.iter().filter(|o| o.is_applied()).count();
        tracing::info!("Opening: {} of {} commands applied", applied, outcomes.len());
    }

    let mut session = StrategySession::new(config.runtime.clone());

    println!("seed {}", session.seed());
    for _ in 0..config.turns {
        let report = session.on_turn(&mut board);
        println!(
            "turn {:>3}: {} planned / {} applied, {} reactive turrets, offense {:?}",
            report.turn,
            report.plan.actions.len(),
            report.applied(),
            report.reactive_turrets,
            report.offense
        );

        for frame in opponent.frames(report.turn) {
            session.on_action_frame(&frame);
        }
        board.end_turn(config.income);
    }

    println!(
        "final: turn {}, {} own structures, {} breaches remembered",
        board.turn_number(),
        board.structure_locations(PlayerId::Player1).len(),
        session.memory().len()
    );
    Ok(())
}
