use anyhow::Context;
use clap::Parser;
use deskchess::core::{load_settings, save_settings, GameSettings};
use deskchess::game::{ClickOutcome, GameSession};
use deskchess::ui::{self, parse_command, Command};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Two-player chess in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Minutes per side (1-180)
    #[arg(short, long)]
    minutes: Option<i64>,

    /// Half-move clock value that draws the game
    #[arg(long)]
    fifty_move_threshold: Option<u32>,

    /// Reject castling out of, through or into check
    #[arg(long)]
    forbid_castling_through_check: bool,

    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,

    /// Store the resulting settings as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl Args {
    fn apply(&self, settings: &mut GameSettings) {
        if let Some(minutes) = self.minutes {
            settings.default_minutes = minutes;
        }
        if let Some(threshold) = self.fifty_move_threshold {
            settings.fifty_move_threshold = threshold;
        }
        if self.forbid_castling_through_check {
            settings.forbid_castling_through_check = true;
        }
        if let Some(level) = &self.log_level {
            settings.log_filter = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = load_settings();
    args.apply(&mut settings);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    settings.validate().context("invalid game settings")?;
    let clock_seconds = settings.clock_seconds()?;
    if args.save_settings {
        save_settings(&settings).context("failed to save settings")?;
    }
    info!("[SETTINGS] Using {:?}", settings);

    let mut session = GameSession::new(clock_seconds, settings.rule_options());
    println!("{}", ui::command::HELP);
    print_position(&session);

    run(&mut session).await?;

    println!("{}", ui::render_status(&session));
    Ok(())
}

/// Drive the session from stdin and a one-second clock until the game ends
async fn run(session: &mut GameSession) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let second = Duration::from_secs(1);
    let mut clock = interval_at(Instant::now() + second, second);

    while !session.is_game_over() {
        tokio::select! {
            _ = clock.tick() => {
                session.tick();
            }
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read input")? else {
                    info!("[SESSION] Input closed");
                    break;
                };
                if !handle_command(session, parse_command(&line)) {
                    break;
                }
            }
        }
    }
    Ok(())
}

/// Returns `false` when the player wants to leave
fn handle_command(session: &mut GameSession, command: Command) -> bool {
    match command {
        Command::Click(square) => match session.click(square) {
            ClickOutcome::Ignored => {
                println!("Select one of your pieces");
            }
            ClickOutcome::Selected { moves, .. } if moves.is_empty() => {
                println!("That piece has no legal moves");
                print_position(session);
            }
            ClickOutcome::Selected { .. } | ClickOutcome::Cleared | ClickOutcome::Moved { .. } => {
                print_position(session);
            }
        },
        Command::Move { from, to } => match session.submit_move(from, to) {
            Ok(_) => print_position(session),
            Err(e) => {
                warn!("[SESSION] {}", e);
                println!("{e}");
            }
        },
        Command::Resign => {
            let color = session.state().current_player;
            session.resign(color);
        }
        Command::Board => print_position(session),
        Command::Moves => print!("{}", ui::render_move_list(session.state())),
        Command::Help => println!("{}", ui::command::HELP),
        Command::Quit => return false,
        Command::Unknown(text) => println!("Unknown command {text:?}, type `help`"),
    }
    true
}

fn print_position(session: &GameSession) {
    print!("{}", ui::render_board(session.state(), session.selection()));
    println!("{}", ui::render_status(session));
}
