//! m,n,k game CLI
//!
//! Plays a game on stdin/stdout. Moves are `<x> <y>` with `x` the column
//! and `y` the row, both zero-based.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use log::info;

use mnk::config::{ConfigArgs, GameConfig};
use mnk::{GameError, Session, SessionState, Status};

#[derive(Parser, Debug)]
#[command(name = "mnk-cli", about = "Play the m,n,k game in the terminal")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

const HELP: &str = "\
commands:
  <x> <y>     place a mark at column x, row y
  ai [depth]  let the AI move for the side to play
  undo        take back the last move
  restart     start over with the same settings
  state       print the game state as JSON
  help        show this message
  quit        exit";

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.config.resolve()?;
    info!("starting CLI with {:?}", config);

    let mut session = Session::new();
    session.start(
        config.height as i64,
        config.width as i64,
        config.run_length as i64,
        config.misere,
    )?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", HELP)?;
    auto_reply(&mut session, &config, &mut stdout)?;
    print_position(&session, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        let result = match parts[0] {
            "quit" | "exit" => break,
            "help" => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            "state" => {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&session.current_state())?)?;
                continue;
            }
            "undo" => undo_turn(&mut session, &config)
                .and_then(|_| auto_reply(&mut session, &config, &mut stdout)),
            "restart" => session.restart(),
            "ai" => {
                let depth = match parts.get(1).map(|d| d.parse::<i32>()) {
                    Some(Ok(depth)) => depth,
                    Some(Err(_)) => {
                        writeln!(stdout, "depth must be a number")?;
                        continue;
                    }
                    None => config.search_depth(),
                };
                session
                    .ai_move(depth)
                    .and_then(|_| auto_reply(&mut session, &config, &mut stdout))
            }
            _ => match parse_move(&parts) {
                Some((x, y)) => session
                    .make_move(x, y)
                    .and_then(|_| auto_reply(&mut session, &config, &mut stdout)),
                None => {
                    writeln!(stdout, "unknown command '{}', try 'help'", line.trim())?;
                    continue;
                }
            },
        };

        match result {
            Ok(_) => print_position(&session, &mut stdout)?,
            Err(e) => writeln!(stdout, "error: {}", e)?,
        }
        stdout.flush()?;
    }

    Ok(())
}

fn parse_move(parts: &[&str]) -> Option<(i64, i64)> {
    match parts {
        [x, y] => Some((x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}

/// Undo one move; against the AI, keep undoing until the human is to move.
/// Taking back the AI's opening leaves it to move again; callers follow up
/// with [`auto_reply`].
fn undo_turn(session: &mut Session, config: &GameConfig) -> Result<SessionState, GameError> {
    let mut state = session.undo()?;
    if config.ai_player == Some(state.player) && state.history > 0 {
        state = session.undo()?;
    }
    Ok(state)
}

/// Let the AI move while it is the configured side to play
fn auto_reply(
    session: &mut Session,
    config: &GameConfig,
    out: &mut impl Write,
) -> Result<SessionState, GameError> {
    while session.status().is_active() && config.ai_player == Some(session.player()) {
        session.ai_move(config.search_depth())?;
        if let (Some(pos), Some(search)) = (session.last_move(), session.last_search()) {
            let _ = writeln!(
                out,
                "AI plays {} (score {}, {} nodes)",
                pos, search.score, search.nodes
            );
        }
    }
    Ok(session.current_state())
}

fn print_position(session: &Session, out: &mut impl Write) -> io::Result<()> {
    write!(out, "\n{}", session.board())?;
    match session.status() {
        Status::InProgress => writeln!(out, "{} to move", session.player()),
        Status::Won(player) => writeln!(out, "{} wins", player),
        Status::Draw => writeln!(out, "draw"),
        Status::Uninitialized => writeln!(out, "no game"),
    }
}
