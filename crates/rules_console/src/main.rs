use chess_rules::{Color, GameState, GameStatus, Move, RulesConfig, attackers};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: rules_console [--config <rules.toml>]");
    eprintln!();
    eprintln!("Commands (one per line):");
    eprintln!("  <move>                      e.g. e2e4, e7e8q");
    eprintln!("  moves                       list legal moves for the side to move");
    eprintln!("  board                       print the board");
    eprintln!("  status                      side to move and check/checkmate state");
    eprintln!("  json                        dump the game state as JSON");
    eprintln!("  reset                       back to the start position");
    eprintln!("  position <placement> [w|b]  set up a position from a FEN placement");
    eprintln!("  quit");
}

fn load_config(args: &[String]) -> Result<RulesConfig, String> {
    match args {
        [] => Ok(RulesConfig::default()),
        [flag, path] if flag == "--config" => {
            RulesConfig::load(Path::new(path)).map_err(|e| format!("{path}: {e}"))
        }
        _ => Err(format!("unexpected arguments: {}", args.join(" "))),
    }
}

fn describe(game: &GameState) -> String {
    match game.status() {
        GameStatus::Ongoing => format!("{} to move", game.turn()),
        GameStatus::Check { side } => {
            let king = game.king(side).square;
            let checkers: Vec<String> = attackers(game.board(), king, side)
                .iter()
                .map(ToString::to_string)
                .collect();
            format!(
                "{} to move, {side} in check from {}",
                game.turn(),
                checkers.join(" ")
            )
        }
        GameStatus::Checkmate { winner } => format!("checkmate, {winner} wins"),
    }
}

fn board_text(game: &GameState) -> String {
    format!("{}\n", game.board())
}

fn set_position(parts: &[&str], config: RulesConfig) -> Result<GameState, String> {
    let placement = parts.first().ok_or("position needs a placement")?;
    let turn = match parts.get(1).copied() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(format!("unknown side to move: {other}")),
    };
    GameState::from_placement(placement, turn, config).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{msg}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "rules loaded");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = GameState::with_config(config);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "quit" => break,
            "board" => {
                write!(stdout, "{}", board_text(&game)).ok();
            }
            "status" => {
                writeln!(stdout, "{}", describe(&game)).ok();
            }
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(Move::to_string).collect();
                writeln!(stdout, "{}", moves.join(" ")).ok();
            }
            "json" => match serde_json::to_string(&game) {
                Ok(json) => {
                    writeln!(stdout, "{json}").ok();
                }
                Err(e) => {
                    writeln!(stdout, "error: {e}").ok();
                }
            },
            "reset" => {
                game = GameState::with_config(config);
                writeln!(stdout, "{}", describe(&game)).ok();
            }
            "position" => match set_position(&parts[1..], config) {
                Ok(state) => {
                    game = state;
                    writeln!(stdout, "{}", describe(&game)).ok();
                }
                Err(e) => {
                    writeln!(stdout, "error: {e}").ok();
                }
            },
            text => match text.parse::<Move>() {
                Ok(mv) => match game.apply(mv) {
                    Ok(record) => {
                        let mut out = format!("ok {}", record.mv);
                        if let Some(captured) = record.captured {
                            out.push_str(&format!(" captures {}", captured.kind));
                        }
                        writeln!(stdout, "{out}; {}", describe(&game)).ok();
                    }
                    Err(e) => {
                        writeln!(stdout, "illegal: {e}").ok();
                    }
                },
                Err(_) => {
                    writeln!(stdout, "unknown command: {text}").ok();
                }
            },
        }
        stdout.flush().ok();
    }
    ExitCode::SUCCESS
}
