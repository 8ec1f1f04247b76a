//! CLI for browsing and bidding on auctions.
//!
//! This binary provides commands for:
//! - Listing the seed catalog in any sort order
//! - Running an interactive or scripted session that creates auctions and
//!   places bids

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use auction_client::{render_listing, Session};
use auction_module::{AuctionGenesisConfig, AuctionStore};
use auction_types::SortCriterion;

#[derive(Parser)]
#[command(name = "auction-cli")]
#[command(about = "Browse auctions, create listings and place bids")]
struct Cli {
    /// Seed catalog (JSON). Defaults to the built-in showcase auctions.
    #[arg(long, global = true)]
    genesis: Option<PathBuf>,

    /// Start with no auctions
    #[arg(long, global = true, conflicts_with = "genesis")]
    empty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List auctions
    List {
        /// Sort order: latest, price-low, price-high or ending-soon
        #[arg(long, default_value = "latest")]
        sort: SortCriterion,
    },

    /// Run a command session (reads stdin unless a script is given)
    Session {
        /// Read commands from this file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

fn load_genesis(cli: &Cli) -> Result<AuctionGenesisConfig> {
    if cli.empty {
        return Ok(AuctionGenesisConfig::empty());
    }

    match &cli.genesis {
        Some(path) => read_genesis(path),
        None => Ok(AuctionGenesisConfig::default()),
    }
}

fn read_genesis(path: &Path) -> Result<AuctionGenesisConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open genesis file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("invalid genesis file {}", path.display()))
}

fn build_store(config: &AuctionGenesisConfig) -> Result<AuctionStore> {
    let store = config.build_store().context("invalid seed catalog")?;
    info!(auctions = store.len(), "catalog loaded");
    Ok(store)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("auction_cli=info".parse()?)
                .add_directive("auction_module=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let store = build_store(&load_genesis(&cli)?)?;

    match cli.command {
        Commands::List { sort } => {
            println!("Sort by: {}\n", sort.label());
            print!("{}", render_listing(store.sorted_view(sort)));
        }

        Commands::Session { script } => {
            let mut session = Session::new(store);
            let mut stdout = io::stdout().lock();

            match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open script {}", path.display()))?;
                    session.run(BufReader::new(file), &mut stdout)?;
                }
                None => {
                    session.run(io::stdin().lock(), &mut stdout)?;
                }
            }

            info!(auctions = session.store().len(), "session ended");
        }
    }

    Ok(())
}
