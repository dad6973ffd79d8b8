use clap::Parser;
use std::io::{self, BufRead, Write};

use slide_2048::logging::setup_logging;
use slide_2048::{BoardEngine, Direction, GameState, Result};

#[derive(Parser, Debug)]
#[command(name = "slide_2048", version, about)]
struct Config {
    /// Seed for reproducible tile placement
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<String>,

    /// Print the game state as JSON instead of a grid
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Moves to play before exiting (e.g. `left up up right`); reads commands
    /// from stdin when none are given
    moves: Vec<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Direction),
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "new" | "n" => Ok(Some(Command::NewGame)),
        "quit" | "q" | "exit" => Ok(Some(Command::Quit)),
        _ => line.parse().map(|direction| Some(Command::Move(direction))),
    }
}

fn render<W: Write>(out: &mut W, state: &GameState, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(state)?)?;
    } else {
        writeln!(out, "Score: {}", state.score)?;
        write!(out, "{}", state.board)?;
    }
    out.flush()?;
    Ok(())
}

fn play<W: Write>(
    engine: &mut BoardEngine,
    out: &mut W,
    state: GameState,
    direction: Direction,
    json: bool,
) -> Result<GameState> {
    match engine.apply_move(&state, direction)? {
        Some(next) => {
            render(out, &next, json)?;
            Ok(next)
        }
        None => {
            writeln!(out, "cannot slide {}", direction)?;
            Ok(state)
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let mut engine = match config.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            BoardEngine::with_seed(seed)
        }
        None => BoardEngine::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut state = engine.new_game();
    render(&mut out, &state, config.json)?;

    if !config.moves.is_empty() {
        for direction in config.moves {
            state = play(&mut engine, &mut out, state, direction, config.json)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        match parse_command(&line?) {
            Ok(Some(Command::Move(direction))) => {
                state = play(&mut engine, &mut out, state, direction, config.json)?;
            }
            Ok(Some(Command::NewGame)) => {
                state = engine.new_game();
                render(&mut out, &state, config.json)?;
            }
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => {
                log::warn!("ignored input: {}", e);
                writeln!(out, "{} (use left/right/up/down, new or quit)", e)?;
            }
        }
    }
    Ok(())
}
