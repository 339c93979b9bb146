use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use log::debug;
use recipe_finder::{find_recipe_in_files, FinderConfig, FinderError};

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Find a recipe you can cook with what is in the fridge")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the recipe whose ingredients are all in the fridge and fresh
    Run {
        /// Recipes JSON file
        recipes: PathBuf,

        /// Fridge contents CSV file (name,amount,unit,DD/MM/YYYY)
        fridge: PathBuf,

        /// Check expiry against this DD/MM/YYYY date instead of today
        #[arg(long)]
        today: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("Error: {}", usage_error_line(&e));
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Collapse clap's usage report into one line, dropping the usage block
fn usage_error_line(err: &clap::Error) -> String {
    let message = err
        .to_string()
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:"))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    message
        .strip_prefix("error: ")
        .unwrap_or(&message)
        .to_string()
}

fn run(cli: Cli) -> Result<String, FinderError> {
    let mut config = FinderConfig::load()?;

    match cli.command {
        Commands::Run {
            recipes,
            fridge,
            today,
        } => {
            if today.is_some() {
                config.today = today;
            }
            debug!("Using configuration {:?}", config);

            let clock = config.clock()?;
            let found = find_recipe_in_files(&recipes, &fridge, clock)?;
            Ok(found.unwrap_or(config.no_match_message))
        }
    }
}
