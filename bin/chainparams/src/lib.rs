use chain_args::{ArgFlags, ArgsError, ArgsManager, OptionsCategory};
use chain_params::{select_base_params, setup_chain_params_base_options, ChainContext, ChainType};
use serde::Serialize;
use snafu::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Argument error: {}", source))]
    Args { source: ArgsError },

    #[snafu(display("Invalid port: {}", value))]
    InvalidPort { value: i64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Name used for the default data directory and in help output.
pub const APP_NAME: &str = "chainparams";

/// Register the host options alongside the chain selection options.
pub fn setup_node_args(args: &ArgsManager) {
    args.add_arg(
        "-help",
        "Print this help message and exit",
        ArgFlags::ALLOW_ANY,
        OptionsCategory::Options,
    );
    args.add_arg(
        "-help-debug",
        "Print help message with debugging options and exit",
        ArgFlags::ALLOW_ANY,
        OptionsCategory::DebugTest,
    );
    args.add_arg(
        "-conf=<file>",
        "Specify a TOML configuration file. [chains.<name>] tables in it apply only to \
         that chain",
        ArgFlags::ALLOW_STRING,
        OptionsCategory::Options,
    );
    args.add_arg(
        "-datadir=<dir>",
        "Specify data directory",
        ArgFlags::ALLOW_STRING,
        OptionsCategory::Options,
    );
    args.add_arg(
        "-port=<port>",
        "Listen for connections on <port> (default: 8332, testnet: 18332, signet: 38332, \
         regtest: 18443, custom chains: 18553)",
        ArgFlags::ALLOW_ANY | ArgFlags::NETWORK_ONLY,
        OptionsCategory::Connection,
    );
    args.add_arg(
        "-loglevel=<level>",
        "Log filter directive (default: info). RUST_LOG takes precedence",
        ArgFlags::ALLOW_STRING,
        OptionsCategory::DebugTest,
    );

    setup_chain_params_base_options(args);
}

/// What the node resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    pub chain: ChainType,
    pub data_dir: PathBuf,
    pub port: u16,
    pub default_port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Help(String),
    Report(ChainReport),
}

#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Run startup on already parsed arguments: load the config file, select the
/// chain process-wide, and report the effective settings.
pub fn run(args: &ArgsManager) -> Result<Outcome> {
    let help_debug = args.get_bool_arg("help-debug", false);
    if help_debug || args.get_bool_arg("help", false) {
        return Ok(Outcome::Help(args.help_message(help_debug)));
    }

    if let Some(conf) = args.get_arg("conf") {
        args.read_config_file(Path::new(&conf)).context(ArgsSnafu)?;
        info!("Loaded config file {}", conf);
    }

    let chain = args.get_chain_name().context(ArgsSnafu)?;
    select_base_params(args, &chain);
    let context = ChainContext::new(&chain);

    for arg in args.unsuitable_section_only_args() {
        warn!(
            "Config setting for -{} only applied on {} network when in [{}] section.",
            arg,
            context.chain(),
            context.chain()
        );
    }

    let base = args
        .get_arg("datadir")
        .map(PathBuf::from)
        .unwrap_or_else(default_data_dir);

    let default_port = context.params().default_port();
    let requested = args.get_int_arg("port", i64::from(default_port));
    let port = u16::try_from(requested)
        .ok()
        .filter(|port| *port != 0)
        .context(InvalidPortSnafu { value: requested })?;

    Ok(Outcome::Report(ChainReport {
        chain: context.chain().clone(),
        data_dir: context.data_dir(&base),
        port,
        default_port,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn node_args(argv: &[&str]) -> ArgsManager {
        let args = ArgsManager::new(APP_NAME);
        setup_node_args(&args);
        args.parse_parameters(argv.iter().copied()).unwrap();
        args
    }

    fn report(outcome: Outcome) -> ChainReport {
        match outcome {
            Outcome::Report(report) => report,
            Outcome::Help(_) => panic!("expected a report"),
        }
    }

    #[test]
    fn test_defaults_to_main() {
        let args = node_args(&["chainparams", "--datadir=/srv/node"]);
        let report = report(run(&args).unwrap());

        assert_eq!(report.chain, ChainType::Main);
        assert_eq!(report.data_dir, PathBuf::from("/srv/node"));
        assert_eq!(report.port, 8332);
        assert_eq!(report.default_port, 8332);
    }

    #[test]
    fn test_custom_chain_report() {
        let args = node_args(&["chainparams", "--datadir=/srv/node", "--chain=mytestnet"]);
        let report = report(run(&args).unwrap());

        assert_eq!(report.chain, ChainType::Custom("mytestnet".to_string()));
        assert_eq!(report.data_dir, PathBuf::from("/srv/node/mytestnet"));
        assert_eq!(report.port, 18553);
    }

    #[test]
    fn test_port_override() {
        let args = node_args(&["chainparams", "--regtest", "--port=19000"]);
        let report = report(run(&args).unwrap());
        assert_eq!(report.port, 19000);
        assert_eq!(report.default_port, 18443);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let args = node_args(&["chainparams", "--port=70000"]);
        assert!(matches!(
            run(&args),
            Err(Error::InvalidPort { value: 70000 })
        ));
    }

    #[test]
    fn test_config_file_selects_chain_and_section() {
        let dir = tempdir().unwrap();
        let conf = dir.path().join("node.toml");
        fs::write(
            &conf,
            "signet = 1\nport = 9000\n\n[chains.signet]\nsignet_blockscript = \"51\"\n",
        )
        .unwrap();

        let conf_arg = format!("--conf={}", conf.display());
        let args = node_args(&["chainparams", conf_arg.as_str()]);
        let report = report(run(&args).unwrap());

        assert_eq!(report.chain, ChainType::Signet);
        // Top-level port is network-only and ignored off main.
        assert_eq!(report.port, 38332);
        assert_eq!(args.get_arg("signet_blockscript").as_deref(), Some("51"));
    }

    #[test]
    fn test_conflicting_chain_flags() {
        let args = node_args(&["chainparams", "--testnet", "--chain=signet"]);
        assert!(matches!(
            run(&args),
            Err(Error::Args {
                source: ArgsError::InvalidChainCombination
            })
        ));
    }

    #[test]
    fn test_help_outcomes() {
        let args = node_args(&["chainparams", "--help"]);
        let Outcome::Help(help) = run(&args).unwrap() else {
            panic!("expected help");
        };
        assert!(help.contains("--testnet"));
        assert!(!help.contains("--segwitheight"));

        let args = node_args(&["chainparams", "--help-debug"]);
        let Outcome::Help(help) = run(&args).unwrap() else {
            panic!("expected help");
        };
        assert!(help.contains("--segwitheight"));
    }
}
