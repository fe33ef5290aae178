use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};
use serde::Serialize;

use pushkind_pricewatch::scrape::config::ScraperConfig;
use pushkind_pricewatch::scrape::fetch::HttpFetcher;
use pushkind_pricewatch::scrape::store::ProductStore;
use pushkind_pricewatch::scrape::{ProductScraper, ScrapeError, ScrapeResult};
use pushkind_pricewatch::settings::load_section;

/// Scrape product pages and record their prices.
#[derive(Parser)]
#[command(name = "pricewatch-scrape", version, about)]
struct Cli {
    /// SQLite file for scraped products (overrides `scraper.database_path`).
    #[arg(long, global = true, env = "PRICEWATCH_SCRAPER_DATABASE")]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape one product page and save its current price.
    Product {
        url: String,
        /// Print the product without touching the store.
        #[arg(long)]
        no_save: bool,
    },
    /// Run a site search and print every result.
    Search {
        query: String,
        /// Also save every result with its price.
        #[arg(long)]
        save: bool,
    },
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("Failed to serialize output: {e}"),
    }
}

fn run(cli: Cli, config: ScraperConfig) -> ScrapeResult<()> {
    let fetcher = HttpFetcher::new(config.headers())?;
    info!("Using user agent {}", fetcher.headers().user_agent);

    let scraper = ProductScraper::new(fetcher, config.base_url.clone());
    let store = ProductStore::new(cli.database.unwrap_or(config.database_path));

    match cli.command {
        Command::Product { url, no_save } => {
            let product = scraper.product_from_url(&url)?;
            print_json(&product);
            if !no_save {
                store.save_product(&product)?;
            }
        }
        Command::Search { query, save } => {
            let products = scraper.products_from_search(&query)?;
            print_json(&products);
            if save {
                for product in &products {
                    store.save_product(product)?;
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config: ScraperConfig = match load_section("scraper") {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ScrapeError::Fetch { .. }) => {
            error!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
