//! Headless driver: plays a scripted session without a window and prints
//! the final score as `left:right`.
//!
//! Usage: `pong-headless [session.toml]`. Log level via `RUST_LOG`.

mod runner;
mod session;

use session::{Session, SessionError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = try_main() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), SessionError> {
    let session = match std::env::args().nth(1) {
        Some(path) => Session::load(path)?,
        None => Session::default(),
    };

    let outcome = runner::run(&session)?;
    log::info!(
        "played {} frames{}",
        outcome.frames,
        if outcome.quit { " (quit)" } else { "" }
    );
    println!("{}:{}", outcome.scores.0, outcome.scores.1);
    Ok(())
}
