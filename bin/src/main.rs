use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_word_search::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;
use std::time::Instant;

/// Builds word-search puzzles from a word list, or finds the listed words in
/// an existing grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a file that contains a list of words, one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a puzzle that contains every word in the words file.
    Generate {
        /// Grid height; defaults to the longest word's length.
        #[arg(long)]
        height: Option<usize>,

        /// Grid width; defaults to the longest word's length.
        #[arg(long)]
        width: Option<usize>,

        /// Placement attempts per grid size before growing.
        #[arg(long, default_value_t = 3)]
        attempts: usize,

        /// Leave unused cells empty instead of filling them with letters.
        #[arg(long)]
        no_fill: bool,

        /// Place words anywhere feasible instead of seeking overlaps.
        #[arg(long)]
        no_overlap: bool,

        /// Build the same puzzle on every run; random when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Print where each word ended up after the grid.
        #[arg(long)]
        key: bool,
    },
    /// Find the words of the words file in an existing grid, read as one row
    /// per line with a space for each empty cell.
    Solve {
        /// Path to the grid file.
        grid_file: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match try_main(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let words = read_words(&args.words_file)?;

    match args.command {
        Command::Generate {
            height,
            width,
            attempts,
            no_fill,
            no_overlap,
            seed,
            key,
        } => {
            let config = PuzzleConfig {
                height,
                width,
                fill_blanks: !no_fill,
                overlap: !no_overlap,
                attempts,
                ..PuzzleConfig::default()
            };
            let grid = match seed {
                Some(seed) => {
                    build_puzzle_with_rng(&words, &config, &mut StdRng::seed_from_u64(seed))?
                }
                None => build_puzzle(&words, &config)?,
            };
            print!("{grid}");
            println!(
                "\nPlaced {} words in a {}x{} grid in {:.3}s.",
                words.len(),
                grid.height(),
                grid.width(),
                start_time.elapsed().as_secs_f64()
            );
            if key {
                println!();
                print_locations(&grid, &words);
            }
        }
        Command::Solve { grid_file } => {
            let rows = BufReader::new(File::open(&grid_file)?)
                .lines()
                .collect::<io::Result<Vec<String>>>()?;
            let grid = Grid::from_rows(&rows)?;
            print_locations(&grid, &words);
        }
    }

    Ok(())
}

fn read_words(path: &str) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_lowercase());
        }
    }
    Ok(words)
}

fn print_locations(grid: &Grid, words: &[String]) {
    let result = solve(grid, words);
    for hit in &result.found {
        println!(
            "{}: column {}, row {}, {}",
            hit.word,
            hit.x,
            hit.y,
            describe(hit.orientation)
        );
    }
    for word in &result.not_found {
        println!("{word}: not found");
    }
}

fn describe(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "left to right",
        Orientation::HorizontalReversed => "right to left",
        Orientation::Vertical => "top to bottom",
        Orientation::VerticalReversed => "bottom to top",
        Orientation::DiagonalDownRight => "diagonally down-right",
        Orientation::DiagonalUpRight => "diagonally up-right",
        Orientation::DiagonalDownLeft => "diagonally down-left",
        Orientation::DiagonalUpLeft => "diagonally up-left",
    }
}
