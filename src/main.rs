//! Tutordesk - terminal front end for the tutoring center session list
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use tutordesk::RunOptions;
use tutordesk_app::config::{default_config_path, init_config_file};
use tutordesk_core::logging;
use tutordesk_core::prelude::*;

/// Tutordesk - keyboard-driven session list for tutors and admins
#[derive(Parser, Debug)]
#[command(name = "tutordesk")]
#[command(about = "Keyboard-driven terminal front end for a tutoring-center session list", long_about = None)]
struct Args {
    /// Backend base URL, e.g. http://localhost:8000/api
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Config file (default: <config_dir>/tutordesk/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run against built-in demo data instead of the backend
    #[arg(long)]
    demo: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        let Some(path) = args.config.or_else(default_config_path) else {
            return Err(Error::config("Could not determine the config directory"));
        };
        if init_config_file(&path)? {
            eprintln!("Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let result = tutordesk::run(RunOptions {
        config_path: args.config,
        api_url: args.api_url,
        demo: args.demo,
    })
    .await;

    if result.is_err() {
        eprintln!("Details in {}", logging::current_log_file().display());
    }
    result
}
