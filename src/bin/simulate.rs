//! Headless game simulator CLI.
//!
//! Plays many games against a scripted button to see how long runs last and
//! what they score.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 1000 runs, random presses
//!   cargo run --bin simulate -- -n 100 --policy idle
//!   cargo run --bin simulate -- --seed 42 --json     # Reproducible, JSON output

use flappy_lcd::simulator::{run_simulation, InputPolicy, SimConfig};
use flappy_lcd::{logging, Error, Result};
use log::LevelFilter;
use std::env;

struct Options {
    config: SimConfig,
    json: bool,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => return,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(2);
        }
    };

    logging::init(LevelFilter::Info, options.verbose);

    if let Err(e) = run(&options) {
        eprintln!("simulate: {e}");
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    let config = &options.config;
    if !options.json {
        println!("Configuration:");
        println!("  Runs:       {}", config.num_runs);
        println!("  Max Ticks:  {}", config.max_ticks_per_run);
        println!("  Policy:     {}", config.policy);
        if let Some(seed) = config.seed {
            println!("  Seed:       {}", seed);
        }
        println!();
    }

    let report = run_simulation(config)?;

    if options.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| Error::InvalidArgument(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(text: &str, flag: &str) -> Result<T> {
    text.parse()
        .map_err(|_| Error::InvalidArgument(format!("bad value '{text}' for {flag}")))
}

fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options {
        config: SimConfig::default(),
        json: false,
        verbose: false,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--runs" => {
                options.config.num_runs = number(value(args, i, flag)?, flag)?;
                i += 1;
            }
            "-s" | "--seed" => {
                options.config.seed = Some(number(value(args, i, flag)?, flag)?);
                i += 1;
            }
            "-t" | "--ticks" => {
                options.config.max_ticks_per_run = number(value(args, i, flag)?, flag)?;
                i += 1;
            }
            "-p" | "--policy" => {
                options.config.policy = InputPolicy::parse(value(args, i, flag)?)?;
                i += 1;
            }
            "--json" => options.json = true,
            "-v" | "--verbose" => options.verbose = true,
            "-h" | "--help" => {
                print_help();
                return Ok(None);
            }
            other => {
                return Err(Error::InvalidArgument(format!("unknown argument '{other}'")));
            }
        }
        i += 1;
    }

    Ok(Some(options))
}

fn print_help() {
    println!("Flappy LCD Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of games (default: 1000)");
    println!("    -s, --seed <S>      Base seed; game i uses S + i");
    println!("    -t, --ticks <T>     Tick cap per game (default: 10000)");
    println!("    -p, --policy <P>    idle | hold | random | random:<chance> (default: random:0.3)");
    println!("    --json              Print the report as JSON");
    println!("    -v, --verbose       Log every run");
    println!("    -h, --help          Show this help");
}
