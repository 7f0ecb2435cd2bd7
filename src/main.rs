//! Table Strike entry point
//!
//! Headless driver: builds a table from the default configuration (or a JSON
//! override given as the first argument) and plays scripted rounds until the
//! game ends, logging the HUD as it goes.

use table_strike::TableConfig;
use table_strike::sim::{GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => TableConfig::default(),
    };

    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("invalid table configuration: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "table ready: {} targets, {} lives, win at {}",
        state.targets.len(),
        state.lives,
        state.config.win_score
    );

    let dt = 1.0 / 60.0;
    let mut frame: u64 = 0;
    while !state.game_ended() && frame < 200_000 {
        let input = TickInput {
            launch: !state.round_active(),
            ..Default::default()
        };
        tick(&mut state, &input, dt);
        frame += 1;
        if frame % 600 == 0 {
            let hud = state.hud();
            log::info!(
                "t={:.0}s score={} lives={} active={}",
                frame as f32 * dt,
                hud.score,
                hud.lives,
                hud.round_active
            );
        }
    }

    let hud = state.hud();
    println!(
        "final score {} with {} lives left after {} frames",
        hud.score, hud.lives, frame
    );
}

fn load_config(path: &str) -> Result<TableConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
