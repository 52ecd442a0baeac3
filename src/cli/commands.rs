use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::warn;

use crate::config::{AppConfig, ConfigOverrides};
use crate::logging::{LogConfig, init_logging};
use crate::parsers::load_countries;
use crate::selection::{RandomSource, SeededRandom, ThreadRandom};
use crate::state::{Event, ExplorerState, LoadState};
use crate::tui::run_interactive;

#[derive(Parser)]
#[command(name = "country-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Browse, filter and group countries in the terminal", long_about = None)]
pub struct Cli {
    /// Countries dataset (JSON); overrides COUNTRY_EXPLORER_DATA and the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Seed for highlight color draws (reproducible colors)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive country table (default)
    Browse,
    /// Print one page of the filtered table
    List {
        /// Filter text, e.g. "search:ger group:EUR"
        #[arg(short, long, default_value = "")]
        query: String,
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show statistics about the dataset
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Browse));
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_file.clone(), interactive))?;

    let config = AppConfig::resolve(&ConfigOverrides {
        data_path: cli.data.clone(),
        config_path: cli.config.clone(),
    })?;

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let mut state = ExplorerState::new(config.palette.clone(), rng);
    load_dataset(&mut state, &config.data_path);

    match cli.command {
        None | Some(Commands::Browse) => run_interactive(state)?,
        Some(Commands::List { query, page }) => show_list(state, &query, page),
        Some(Commands::Stats) => show_stats(&state, &config),
    }

    Ok(())
}

/// Deliver the dataset (or its absence) to the state machine
fn load_dataset<R: RandomSource>(state: &mut ExplorerState<R>, path: &Path) {
    match load_countries(path) {
        Ok(countries) => state.dispatch(Event::DatasetLoaded(countries)),
        Err(e) => {
            warn!(error = %format!("{e:#}"), "failed to load dataset");
            state.dispatch(Event::DatasetUnavailable(format!("{e:#}")));
        }
    }
}

fn show_list<R: RandomSource>(mut state: ExplorerState<R>, query: &str, page: usize) {
    if !query.is_empty() {
        state.dispatch(Event::QueryChanged(query.to_string()));
    }
    if page != state.current_page() {
        state.dispatch(Event::PageSelected(page));
    }

    if let LoadState::Unavailable(reason) = state.load_state() {
        println!("No data: {}", reason);
        return;
    }

    for row in state.visible_rows() {
        let marker = if row.selected { "*" } else { " " };
        let highlight = match (row.selected, row.color) {
            (true, Some(color)) => format!(" [{}]", color.name),
            (true, None) => " [no color]".to_string(),
            _ => String::new(),
        };
        println!(
            "{} {:<40} {:<20} {}{}",
            marker, row.country.name, row.country.capital, row.country.currency, highlight
        );
    }

    println!(
        "Page {}/{} ({} countries)",
        state.current_page(),
        state.page_count(),
        state.filtered().len()
    );
}

fn show_stats<R: RandomSource>(state: &ExplorerState<R>, config: &AppConfig) {
    let countries = state.dataset();
    let without_currency = countries.iter().filter(|c| c.currency.is_empty()).count();
    let currencies: BTreeSet<&str> = countries.iter().flat_map(|c| c.currency_codes()).collect();
    let languages: BTreeSet<&str> =
        countries.iter().flat_map(|c| c.languages.iter().map(|l| l.code.as_str())).collect();

    println!("Country Dataset Statistics");
    println!("==========================");
    if let LoadState::Unavailable(reason) = state.load_state() {
        println!("No data: {}", reason);
    }
    println!("Total countries: {}", countries.len());
    println!("  Without currency: {}", without_currency);
    println!("Distinct currencies: {}", currencies.len());
    println!("Distinct languages: {}", languages.len());
    println!();
    println!("Dataset: {}", config.data_path.display());
    println!("Palette: {} colors", config.palette.len());
}
