use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use flappy_lcd::device::{KeyboardInput, TerminalDisplay, ThreadSleep};
use flappy_lcd::{build_info, logging, Error, GameLoop, Peripherals, Result};
use log::LevelFilter;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::PathBuf;

/// Where `-v` sends its log when `--log-file` is not given.
const DEFAULT_LOG_FILE: &str = "flappy-lcd.log";

#[derive(Debug, Default)]
struct Args {
    seed: Option<u64>,
    verbose: bool,
    log_file: Option<PathBuf>,
}

impl Args {
    /// Log destination. Verbose output always goes to a file, since stderr
    /// shares the screen with the game.
    fn log_path(&self) -> Option<PathBuf> {
        match &self.log_file {
            Some(path) => Some(path.clone()),
            None if self.verbose => Some(PathBuf::from(DEFAULT_LOG_FILE)),
            None => None,
        }
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run 'flappy-lcd --help' for usage.");
            std::process::exit(2);
        }
    };

    match args.log_path() {
        Some(path) => {
            if let Err(e) = logging::init_to_file(LevelFilter::Warn, args.verbose, &path) {
                eprintln!("flappy-lcd: cannot open log file {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => logging::init(LevelFilter::Warn, false),
    }

    match run(&args) {
        Ok((seed, Some(score))) => println!("Score {score} (seed {seed})"),
        Ok((seed, None)) => println!("Quit (seed {seed})"),
        Err(e) => {
            eprintln!("flappy-lcd: {e}");
            std::process::exit(1);
        }
    }
}

/// Returns `None` when the arguments asked for help or version output.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-s" | "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::InvalidArgument("--seed needs a value".to_string()))?;
                let seed = value
                    .parse()
                    .map_err(|_| Error::InvalidArgument(format!("bad seed '{value}'")))?;
                parsed.seed = Some(seed);
            }
            "-v" | "--verbose" => parsed.verbose = true,
            "--log-file" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::InvalidArgument("--log-file needs a value".to_string()))?;
                parsed.log_file = Some(PathBuf::from(value));
            }
            "--version" => {
                println!("{}", build_info::version_line());
                return Ok(None);
            }
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            other => {
                return Err(Error::InvalidArgument(format!("unknown argument '{other}'")));
            }
        }
    }
    Ok(Some(parsed))
}

fn print_help() {
    println!("Flappy LCD - dodge the pipes with one button\n");
    println!("Usage: flappy-lcd [options]\n");
    println!("Options:");
    println!("  -s, --seed <N>  Seed for the obstacle layout (replays a game)");
    println!("  -v, --verbose   Debug logging (to {DEFAULT_LOG_FILE} unless --log-file is given)");
    println!("  --log-file <P>  Append the log to P instead of stderr");
    println!("  --version       Show version information");
    println!("  --help          Show this help message\n");
    println!("Controls: hold Space/Up/Enter to rise, release to sink, Esc or q to quit.");
}

fn run(args: &Args) -> Result<(u64, Option<u32>)> {
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("starting with seed {seed}");

    enable_raw_mode()?;
    let outcome = guarded(enter_screen, || play(seed), restore_screen);
    Ok((seed, outcome?))
}

/// Runs `body` after `setup`. `restore` runs once either way, including when
/// `setup` fails partway.
fn guarded<T>(
    setup: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    let outcome = setup().and_then(|()| body());
    restore();
    outcome
}

fn enter_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    Ok(())
}

fn restore_screen() {
    let mut stdout = io::stdout();
    let _ = stdout.execute(cursor::Show);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Plays one game. `None` means the player quit before the game ended.
fn play(seed: u64) -> Result<Option<u32>> {
    let display = TerminalDisplay::new(CrosstermBackend::new(io::stdout()))?;
    let io = Peripherals::new(display, KeyboardInput::new(), ThreadSleep);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = GameLoop::initialize(io, &mut rng)?;

    while game.is_running() {
        game.run_tick()?;
        if game.peripherals().button.quit_requested() {
            return Ok(None);
        }
    }

    // The game-over screen stays up until the player leaves.
    game.peripherals_mut().button.wait_for_quit()?;
    Ok(Some(game.score()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Args>> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_seed_and_verbose() {
        let args = parse(&["--seed", "42", "-v"]).unwrap().unwrap();
        assert_eq!(args.seed, Some(42));
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]).unwrap().unwrap();
        assert_eq!(args.seed, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_verbose_logs_to_file() {
        let args = parse(&["-v"]).unwrap().unwrap();
        assert_eq!(args.log_path(), Some(PathBuf::from(DEFAULT_LOG_FILE)));

        let args = parse(&["--log-file", "/tmp/game.log"]).unwrap().unwrap();
        assert_eq!(args.log_path(), Some(PathBuf::from("/tmp/game.log")));

        assert_eq!(parse(&[]).unwrap().unwrap().log_path(), None);
    }

    #[test]
    fn test_guarded_restores_after_failed_setup() {
        let mut restored = 0;
        let mut ran_body = false;
        let outcome: Result<()> = guarded(
            || Err(Error::Io(io::Error::new(io::ErrorKind::Other, "alternate screen refused"))),
            || {
                ran_body = true;
                Ok(())
            },
            || restored += 1,
        );
        assert!(outcome.is_err());
        assert!(!ran_body);
        assert_eq!(restored, 1);
    }

    #[test]
    fn test_guarded_restores_after_body() {
        let mut restored = 0;
        let outcome = guarded(|| Ok(()), || Ok(7), || restored += 1);
        assert_eq!(outcome.unwrap(), 7);
        assert_eq!(restored, 1);

        let outcome: Result<()> = guarded(
            || Ok(()),
            || Err(Error::InvalidArgument("boom".to_string())),
            || restored += 1,
        );
        assert!(outcome.is_err());
        assert_eq!(restored, 2);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--seed"]).is_err());
        assert!(parse(&["--seed", "abc"]).is_err());
        assert!(parse(&["--fly"]).is_err());
        assert!(parse(&["--log-file"]).is_err());
    }
}
