use snafu::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ArgsError {
    #[snafu(display("Failed to parse command line: {source}"))]
    Parse { source: clap::Error },

    #[snafu(display("Failed to read config file {}: {source}", path.display()))]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse config file {}: {source}", path.display()))]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[snafu(display("Invalid configuration value {key}"))]
    UnknownConfigKey { key: String },

    #[snafu(display("Invalid configuration value {key}: {message}"))]
    InvalidConfigValue { key: String, message: String },

    #[snafu(display(
        "Invalid combination of -regtest, -signet, -testnet and -chain. Can use at most one."
    ))]
    InvalidChainCombination,
}

pub type Result<T, E = ArgsError> = std::result::Result<T, E>;
