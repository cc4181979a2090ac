use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spdlog::{info, warn};

use postdex::indexer::run_index;
use postdex::logger::configure_logger;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "postdex.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Directory containing the .txt post files
    #[arg(short, long)]
    posts_dir: Option<String>,

    /// Directory where chrono.json and catalog.json are written
    #[arg(short, long)]
    output_dir: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let mut config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run postdex --help");
            return Ok(());
        }
    };

    if let Some(posts_dir) = args.posts_dir {
        config.paths.posts_dir = PathBuf::from(posts_dir);
    }
    if let Some(output_dir) = args.output_dir {
        config.paths.output_dir = PathBuf::from(output_dir);
    }

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Indexing posts from {}", config.paths.posts_dir.display());

    run_index(&config)
}
