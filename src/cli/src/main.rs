use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use env_logger::TimestampPrecision;
use facelet_core::{Cube, MoveSequence, Session, success, working};
use log::{LevelFilter, info};

use crate::{
    config::FaceletConfig,
    input::{Command, HELP, parse_line},
    playback::play,
    render::render_net,
};

mod config;
mod input;
mod playback;
mod render;

/// Turns, scrambles and un-scrambles a 3x3x3 cube in the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `<config dir>/facelet/config.toml` when that file exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print sticker letters instead of colored cells
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random scramble and show the scrambled cube
    Scramble {
        /// Number of moves; overrides the configuration file
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Apply a move sequence to a solved cube and show the result
    Apply {
        /// The move sequence, e.g. "R U' F"
        sequence: String,
    },
    /// Print the sequence that undoes a move sequence
    Invert {
        /// The move sequence, e.g. "R U' F"
        sequence: String,
    },
    /// Apply a move sequence, or a random scramble if none is given, then play
    /// back its inverse
    Solve {
        /// The move sequence, e.g. "R U' F"
        sequence: Option<String>,
        /// Pause between moves in milliseconds; overrides the configuration file
        #[arg(short, long)]
        delay_ms: Option<u64>,
        /// Seed for a reproducible scramble
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Turn the cube interactively with the keyboard
    Play {
        /// Seed for reproducible scrambles
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn mk_rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = FaceletConfig::load(cli.config.as_deref())?;
    config.plain |= cli.plain;

    match cli.command {
        Commands::Scramble { length, seed } => {
            let mut session = Session::new();
            let length = length.unwrap_or(config.scramble_length);
            let moves = session.scramble(&mut mk_rng(seed), length).clone();
            println!("{moves}");
            print!("{}", render_net(&session.cube().serialize(), config.plain));
            println!("{}", session.cube());
        }
        Commands::Apply { sequence } => {
            let mut cube = Cube::new();
            let moves: MoveSequence = sequence.parse()?;
            cube.apply_moves(&moves);
            print!("{}", render_net(&cube.serialize(), config.plain));
            println!("{cube}");
        }
        Commands::Invert { sequence } => {
            let moves: MoveSequence = sequence.parse()?;
            println!("{}", moves.inverse());
        }
        Commands::Solve {
            sequence,
            delay_ms,
            seed,
        } => {
            if let Some(delay_ms) = delay_ms {
                config.playback_delay_ms = delay_ms;
            }

            let mut session = Session::new();
            match sequence {
                Some(sequence) => {
                    session.apply_all(&sequence)?;
                }
                None => {
                    session.scramble(&mut mk_rng(seed), config.scramble_length);
                }
            }
            println!("Scramble: {}", session.log());
            print!("{}", render_net(&session.cube().serialize(), config.plain));

            solve(&mut session, &config)?;
        }
        Commands::Play { seed } => {
            run_session(&config, mk_rng(seed))?;
        }
    }

    Ok(())
}

fn solve(session: &mut Session, config: &FaceletConfig) -> color_eyre::Result<()> {
    let mut playback = session.solve()?;
    println!("Solution: {}", playback.moves());
    eprintln!(working!("Solving"));

    let steps = play(&mut playback, config.playback_delay(), |move_, cube| {
        println!("{move_}");
        print!("{}", render_net(&cube.serialize(), config.plain));
    });
    info!(target: "playback", "Performed {steps} moves");

    if playback.cube().is_solved() {
        println!(success!("Solved!"));
        Ok(())
    } else {
        Err(eyre!("The cube is not solved after playing back the solution"))
    }
}

fn run_session(config: &FaceletConfig, mut rng: fastrand::Rng) -> color_eyre::Result<()> {
    let mut session = Session::new();
    println!("{HELP}");
    print!("{}", render_net(&session.cube().serialize(), config.plain));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Moves(moves) => {
                if moves.is_empty() {
                    continue;
                }
                for move_ in moves {
                    session.apply_move(move_);
                }
                println!("Moves: {}", session.log());
            }
            Command::Scramble => {
                let moves = session.scramble(&mut rng, config.scramble_length);
                println!("Scramble: {moves}");
            }
            Command::Solve => {
                if let Err(e) = solve(&mut session, config) {
                    println!("{e}");
                }
                continue;
            }
            Command::Reset => session.reset(),
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        print!("{}", render_net(&session.cube().serialize(), config.plain));
    }

    Ok(())
}
