//! Ski Ball entry point
//!
//! There is no native window yet; the binary runs a seeded demo game through
//! the same pointer handlers a UI shell would use and prints the final board.

use ski_ball::Settings;
use ski_ball::sim::{AutoPlayer, Game, GamePhase};

/// Seed for the attract-mode demo
const DEMO_SEED: u64 = 0x5EED_BA11;

fn main() {
    env_logger::init();
    log::info!("Ski Ball (native) starting...");

    let mut game = match Game::new(Settings::default()) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Bad settings: {}", err);
            std::process::exit(1);
        }
    };

    let mut bot = AutoPlayer::new(DEMO_SEED);
    log::info!("Demo game with seed {:#x}", bot.seed());
    game.start_game();

    while game.phase() == GamePhase::Playing {
        let outcome = bot.play_throw(&mut game);
        if let Some(shot) = outcome.shot {
            println!(
                "{:>2} left | landed {:>12} | {}",
                game.session().shots_remaining,
                shot.landing.to_string(),
                shot.message()
            );
        }
    }

    let view = game.render_state();
    println!("\n{}", view.status);
    println!("Highest Score: {}", view.session.high_score);

    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("\n{}", json),
        Err(err) => log::warn!("Could not encode final board: {}", err),
    }
}
