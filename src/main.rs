//! Headless ColorStack runner (default binary).
//!
//! Reads one command per line from stdin and prints a JSON snapshot of the
//! game to stdout after every change. The game clock runs in real time while
//! playing. Logs go to stderr; set `RUST_LOG` to adjust verbosity.

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use colorstack::core::GameAction;
use colorstack::engine::{Session, SessionConfig, TickDriver};
use colorstack::input::{parse_command, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::from_env();
    tracing::info!(
        seed = config.seed,
        tick_ms = config.tick_ms,
        difficulty = config.difficulty.as_str(),
        "colorstack ready"
    );
    run(config).await
}

async fn run(config: SessionConfig) -> Result<()> {
    let (mut driver, mut ticks) = TickDriver::new(Duration::from_millis(config.tick_ms));
    let mut session = Session::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();

    print_snapshot(&mut out, &session).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let Some(command) = parse_command(&line) else {
                    if !line.trim().is_empty() {
                        tracing::warn!(line = line.trim(), "unrecognised command");
                    }
                    continue;
                };
                if command == Command::Quit {
                    break;
                }

                let before = session.state().clone();
                apply(&mut session, command);
                if command == Command::Show || session.state() != &before {
                    print_snapshot(&mut out, &session).await?;
                }
            }
            Some(tick) = ticks.recv() => {
                if driver.accepts(tick) {
                    session.dispatch(GameAction::TickTimer);
                    print_snapshot(&mut out, &session).await?;
                }
            }
        }
        driver.sync(session.ticking());
    }

    tracing::info!(score = session.state().score(), "bye");
    Ok(())
}

fn apply(session: &mut Session, command: Command) {
    match command {
        Command::Select(color) => {
            session.select_color(color);
        }
        Command::Pop => {
            session.pop_main();
        }
        Command::Start(difficulty) => session.start(difficulty),
        Command::Pause => {
            session.dispatch(GameAction::PauseGame);
        }
        Command::Resume => {
            session.dispatch(GameAction::ResumeGame);
        }
        Command::TogglePause => session.toggle_pause(),
        Command::Reset => {
            session.dispatch(GameAction::ResetGame);
        }
        Command::NextLevel => session.next_level(),
        Command::Shuffle => {
            session.dispatch(GameAction::ShufflePatterns);
        }
        Command::Show | Command::Quit => {}
    }
}

async fn print_snapshot(out: &mut Stdout, session: &Session) -> Result<()> {
    let mut line = serde_json::to_string(&session.snapshot())?;
    line.push('\n');
    out.write_all(line.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
