use anyhow::{Context, Result};
use bikeshare_rs::{Console, browser, report, storage};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version,
    about = "Interactively explore US bike-share trip data"
)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv.
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    loop {
        if !run_once(&mut console, &cli)? {
            break;
        }
    }
    Ok(())
}

/// One pass of the pipeline. Returns whether the user asked to restart.
fn run_once<R: io::BufRead, W: Write>(console: &mut Console<R, W>, cli: &Cli) -> Result<bool> {
    let selection = console.get_filters()?;
    let trips = storage::load_data(&cli.data_dir, &selection, console.output())
        .with_context(|| format!("loading {} data", selection.city))?;

    report::all(console.output(), &trips)?;
    browser::raw_data(console, &trips)?;

    Ok(console.ask_restart()?)
}
