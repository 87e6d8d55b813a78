use crate::error::Result;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;

fn builder(default_level: LevelFilter, verbose: bool) -> Builder {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        default_level
    };

    let env = Env::default().default_filter_or(level.to_string());
    Builder::from_env(env)
}

/// Initializes the global logger on stderr.
///
/// `default_level` applies when `RUST_LOG` is unset; `verbose` bumps it to
/// debug.
pub fn init(default_level: LevelFilter, verbose: bool) {
    // `try_init` only fails if a logger was already set; tests may call this repeatedly.
    let _ = builder(default_level, verbose).try_init();
}

/// Same as [`init`], but appends to the file at `path` (created if missing).
///
/// The interactive binary uses this while the terminal is in raw mode, where
/// anything written to stderr would land on top of the game screen.
pub fn init_to_file(default_level: LevelFilter, verbose: bool, path: &Path) -> Result<()> {
    let file = File::options().create(true).append(true).open(path)?;
    let _ = builder(default_level, verbose)
        .target(Target::Pipe(Box::new(file)))
        .try_init();
    Ok(())
}
