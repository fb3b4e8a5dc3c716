//! Configuration file parsing for Tutordesk
//!
//! Supports `<config_dir>/tutordesk/config.toml`, or any path given with
//! `--config`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
