use crate::cli::CommonArgs;
use crate::error::{HeatError, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// File name of the repository list inside the home directory.
pub const REGISTRY_FILE_NAME: &str = ".gogitlocalstats";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Make every `console` style on stdout follow this choice.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => console::set_colors_enabled(true),
            ColorChoice::Never => console::set_colors_enabled(false),
        }
    }
}

/// Everything the commands need from the environment, resolved once.
#[derive(Debug, Clone)]
pub struct Settings {
    pub registry: PathBuf,
    pub color: ColorChoice,
}

impl Settings {
    pub fn resolve(common: &CommonArgs) -> Result<Self> {
        let registry = match &common.registry {
            Some(path) => path.clone(),
            None => default_registry_path()?,
        };
        Ok(Self {
            registry,
            color: common.color,
        })
    }
}

pub fn default_registry_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(REGISTRY_FILE_NAME))
        .ok_or_else(|| HeatError::Config("cannot determine the home directory".to_string()))
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("localheat={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
