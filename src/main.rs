//! Terminal entry point.
//!
//! A thin loop around the library: read a line, turn it into an [`Event`], let
//! the handler mutate state, execute the resulting actions, redraw.
//!
//! ```text
//! ┌──────────────┐   line    ┌───────────────┐  actions  ┌──────────────┐
//! │ stdin reader │ ────────► │ handle_event  │ ────────► │ execute_all  │
//! └──────────────┘           └───────────────┘           └──────────────┘
//!                                    ▲                           │
//!                    SearchUpdated   │                           ▼
//! ┌──────────────┐                   │                    ┌──────────────┐
//! │ watch channel│ ──────────────────┘                    │ render frame │
//! └──────────────┘                                        └──────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: Read config from the environment, initialize tracing, build `AppState`
//! 2. **Initial sync**: Fetch the persisted selection
//! 3. **Loop**: Select over input lines and search state changes
//! 4. **Exit**: `:q`, end of input, or Ctrl+C
//!
//! See [`country_picker::app::input`] for the command syntax.

#![allow(clippy::multiple_crate_versions)]

use country_picker::observability::init_tracing;
use country_picker::ui::render;
use country_picker::{execute, execute_all, handle_event, initialize, parse_command, Action, AppState, Config, Event, Flow};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);

    let mut state = match initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("country-picker: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut state, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal loop failed");
            eprintln!("country-picker: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Drives the application until the user quits or input ends.
async fn run(state: &mut AppState, config: &Config) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut updates = state.search.subscribe();

    draw(&mut stdout, state, config).await?;
    execute(state, Action::LoadSelection).await;
    draw(&mut stdout, state, config).await?;

    loop {
        let event = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match parse_command(&line) {
                    Some(event) => event,
                    None => {
                        tracing::debug!(line = %line, "unrecognized command");
                        continue;
                    }
                },
                None => Event::Quit,
            },
            changed = updates.changed() => {
                if changed.is_err() {
                    tracing::debug!("search pipeline closed");
                    continue;
                }
                Event::SearchUpdated
            }
            _ = tokio::signal::ctrl_c() => Event::Quit,
        };

        let (needs_render, actions) = match handle_event(state, &event) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "event handling failed");
                continue;
            }
        };
        let has_actions = !actions.is_empty();

        if needs_render {
            draw(&mut stdout, state, config).await?;
        }
        if execute_all(state, actions).await == Flow::Exit {
            break;
        }
        if has_actions {
            draw(&mut stdout, state, config).await?;
        }
    }

    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

async fn draw(stdout: &mut tokio::io::Stdout, state: &AppState, config: &Config) -> std::io::Result<()> {
    let frame = render(state, config.rows, config.cols);
    stdout.write_all(frame.as_bytes()).await?;
    stdout.flush().await
}
