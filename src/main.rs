use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use thiserror::Error;

use stock_picker::analysis::profit;
use stock_picker::config::Config;
use stock_picker::data::loader::PriceStore;
use stock_picker::data::{DataError, DATE_FORMAT};
use stock_picker::report;

#[derive(Parser)]
#[command(name = "stock-picker")]
#[command(about = "Pick the best buy/sell dates from historical stock prices", long_about = None)]
struct Cli {
    /// Path to the stocks CSV
    path: PathBuf,
    /// Optional YAML file overriding prompt and suggestion settings
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum ShellError {
    #[error("Too many wrong attempts.")]
    TooManyAttempts,
    #[error("Stock code is not even close. Please try again.")]
    NoSuggestions,
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Input error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Failed to load config {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    if !cli.path.is_file() {
        eprintln!("Not a valid file: {}", cli.path.display());
        return ExitCode::FAILURE;
    }

    println!("Reading data from CSV...");
    let store = match PriceStore::load(&cli.path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Failed to load {}: {err}", cli.path.display());
            return ExitCode::FAILURE;
        }
    };
    println!("Reading data done. {} tickers available.", store.tickers().len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        if let Err(err) = run_session(&store, &config, &mut input) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }

        match prompt(&mut input, "Do you want to start over? ([y] or n):-\t") {
            Ok(answer) if answer.is_empty() || answer == "y" => continue,
            _ => {
                println!("\nThank you for using Stock Picker.\n");
                break;
            }
        }
    }
    ExitCode::SUCCESS
}

/// One pass of the interactive flow: ticker, date range, report.
fn run_session(
    store: &PriceStore,
    config: &Config,
    input: &mut impl BufRead,
) -> Result<(), ShellError> {
    let guess =
        prompt(input, "\"Welcome Agent! Which stock you need to process?\":-\t")?.to_uppercase();
    let ticker = match store.series_for(&guess) {
        Ok(series) => series.ticker.clone(),
        Err(DataError::UnknownTicker(_)) => confirm_suggestion(store, config, input, &guess)?,
        Err(err) => return Err(err.into()),
    };
    let series = store.series_for(&ticker)?;

    let start = prompt_date(
        input,
        "\"From which date you want to start. Eg: 20-Jan-2019\":-\t",
        config.prompts.max_attempts,
    )?;
    let end = prompt_date(
        input,
        "\"Till which date you want to analyze. Eg: 20-Jan-2019\":-\t",
        config.prompts.max_attempts,
    )?;

    let window = profit::window_for(series, start, end);
    let result = profit::analyze(window);
    println!("\"Here is you result\":-\t{}", report::format_report(&result));
    Ok(())
}

/// Offers fuzzy matches one at a time; empty input counts as yes.
fn confirm_suggestion(
    store: &PriceStore,
    config: &Config,
    input: &mut impl BufRead,
    guess: &str,
) -> Result<String, ShellError> {
    let matches = store.suggest(
        guess,
        config.suggestions.max_results,
        config.suggestions.min_similarity,
    );
    if matches.is_empty() {
        return Err(ShellError::NoSuggestions);
    }
    for candidate in matches {
        let answer = prompt(input, &format!("\"Oops! Do you mean {candidate}? [y] or n\":-\t"))?;
        if answer.is_empty() || answer == "y" {
            return Ok(candidate.to_string());
        }
    }
    Err(ShellError::NoSuggestions)
}

/// Bounded retry loop for a free-text date in the expected format.
fn prompt_date(
    input: &mut impl BufRead,
    msg: &str,
    max_attempts: usize,
) -> Result<NaiveDate, ShellError> {
    let mut error_msg = "";
    for _ in 0..max_attempts {
        let answer = prompt(input, &format!("{error_msg}{msg}"))?;
        match NaiveDate::parse_from_str(&answer, DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => error_msg = "Something is wrong. Please enter the date again.\n",
        }
    }
    Err(ShellError::TooManyAttempts)
}

fn prompt(input: &mut impl BufRead, msg: &str) -> io::Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
    }
    Ok(line.trim().to_string())
}
