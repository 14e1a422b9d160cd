use anyhow::Context;
use std::io;
use std::path::{Path, PathBuf};
use yatzy_core::{play, EventBus, GameConfig, RngState, Session, SessionError};
use yatzy_data::{load_game_config, load_game_config_file};

mod console;
mod input;
mod view;

use console::ConsolePlayer;

const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliOptions {
    seed: Option<u64>,
    config: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--help" | "-h" => options.help = true,
            "--json" => options.json = true,
            "--seed" => {
                let value = args.get(idx + 1).ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed '{value}'"))?;
                options.seed = Some(seed);
                idx += 1;
            }
            "--config" | "-c" => {
                let value = args.get(idx + 1).ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(value));
                idx += 1;
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
        idx += 1;
    }
    Ok(options)
}

fn print_usage() {
    println!("usage: yatzy [--seed N] [--config PATH] [--json]");
    println!();
    println!("  --seed N       roll dice from a fixed seed");
    println!("  --config PATH  ruleset JSON (default: {ASSETS_DIR}/ruleset.json)");
    println!("  --json         print the final scorecard as JSON");
    println!();
    println!("Set RUST_LOG=debug to trace every roll on stderr.");
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            std::process::exit(2);
        }
    };
    if options.help {
        print_usage();
        return;
    }
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn build_config(options: &CliOptions) -> anyhow::Result<GameConfig> {
    match &options.config {
        Some(path) => load_game_config_file(path),
        None => load_game_config(Path::new(ASSETS_DIR)),
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let config = build_config(options)?;
    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    log::info!(
        "starting game: seed {}, {} categories",
        rng.seed(),
        config.categories.len()
    );
    let mut session = Session::new(config, rng)?;
    let stdin = io::stdin();
    let mut player = ConsolePlayer::new(stdin.lock(), io::stdout());
    let mut events = EventBus::default();
    match play(&mut session, &mut player, &mut events) {
        Ok(scorecard) => {
            if options.json {
                let json = serde_json::to_string_pretty(&scorecard)
                    .context("serialize scorecard")?;
                println!("{json}");
            }
            Ok(())
        }
        Err(SessionError::Abandoned) => {
            println!();
            println!("Game abandoned with {} points.", session.total());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
