use crate::config_file::{ConfigFile, Values, CHAIN_SECTIONS};
use crate::error::{InvalidChainCombinationSnafu, ParseSnafu, Result, UnknownConfigKeySnafu};
use crate::flags::{ArgFlags, OptionsCategory};
use chain_models::ChainType;
use clap::{value_parser, Arg, ArgAction, Command};
use snafu::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// A registered option as shown in help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgDescription {
    pub value_name: Option<String>,
    pub help: String,
    pub flags: ArgFlags,
    pub category: OptionsCategory,
}

impl ArgDescription {
    fn to_clap(&self, key: &str, show_debug: bool) -> Arg {
        let hidden = self.category == OptionsCategory::Hidden
            || (self.flags.contains(ArgFlags::DEBUG_ONLY) && !show_debug);

        let mut arg = Arg::new(key.to_string())
            .long(key.to_string())
            .action(ArgAction::Append)
            .value_parser(value_parser!(String))
            .help(self.help.clone())
            .help_heading(self.category.heading())
            .hide(hidden);

        if let Some(value_name) = &self.value_name {
            arg = arg.value_name(value_name.clone());
        }

        if self.flags.requires_value() {
            arg.num_args(1)
        } else {
            // A bare `--key` counts as set with an empty value, which reads as true.
            arg.num_args(0..=1)
                .require_equals(true)
                .default_missing_value("")
        }
    }
}

#[derive(Debug, Default)]
struct ArgsState {
    available: BTreeMap<String, ArgDescription>,
    command_line: Values,
    config: ConfigFile,
    network: Option<String>,
}

impl ArgsState {
    fn flags(&self, key: &str) -> ArgFlags {
        self.available
            .get(key)
            .map(|arg| arg.flags)
            .unwrap_or_default()
    }

    /// Top-level config values for network-only options apply on main only.
    fn uses_top_level(&self, key: &str) -> bool {
        self.network.as_deref() == Some(ChainType::MAIN)
            || !self.flags(key).contains(ArgFlags::NETWORK_ONLY)
    }

    fn section_values(&self, key: &str) -> Option<&Vec<String>> {
        let network = self.network.as_ref()?;
        self.config
            .sections
            .get(network)?
            .get(key)
            .filter(|values| !values.is_empty())
    }

    fn top_level_values(&self, key: &str) -> Option<&Vec<String>> {
        if !self.uses_top_level(key) {
            return None;
        }
        self.config
            .top_level
            .get(key)
            .filter(|values| !values.is_empty())
    }

    fn command_line_values(&self, key: &str) -> Option<&Vec<String>> {
        self.command_line
            .get(key)
            .filter(|values| !values.is_empty())
    }

    /// Last command-line value, then the first value from the selected
    /// chain's section, then the first top-level value.
    fn lookup(&self, key: &str, ignore_sections: bool) -> Option<&str> {
        if let Some(values) = self.command_line_values(key) {
            return values.last().map(String::as_str);
        }
        if !ignore_sections {
            if let Some(values) = self.section_values(key) {
                return values.first().map(String::as_str);
            }
        }
        self.top_level_values(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    fn bool_arg(&self, key: &str, default: bool, ignore_sections: bool) -> bool {
        self.lookup(key, ignore_sections)
            .map(interpret_bool)
            .unwrap_or(default)
    }
}

/// Registry and store for command-line and config file options.
///
/// Options are registered up front with [`ArgsManager::add_arg`]; parsing,
/// config loading and help output are all driven by that registry.
#[derive(Debug)]
pub struct ArgsManager {
    name: String,
    state: RwLock<ArgsState>,
}

impl ArgsManager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(ArgsState::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ArgsState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ArgsState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an option. `name` is `-key` or `-key=<value>`; registering
    /// the same key again replaces its description.
    pub fn add_arg(&self, name: &str, help: &str, flags: ArgFlags, category: OptionsCategory) {
        let name = name.trim_start_matches('-');
        let (key, value_name) = match name.split_once('=') {
            Some((key, value_name)) => (key, Some(value_name.to_string())),
            None => (name, None),
        };

        let description = ArgDescription {
            value_name,
            help: help.to_string(),
            flags,
            category,
        };

        if self
            .write()
            .available
            .insert(key.to_string(), description)
            .is_some()
        {
            debug!("Replaced description of option -{}", key);
        }
    }

    #[must_use]
    pub fn description(&self, key: &str) -> Option<ArgDescription> {
        self.read().available.get(key.trim_start_matches('-')).cloned()
    }

    #[must_use]
    pub fn registered_keys(&self) -> Vec<String> {
        self.read().available.keys().cloned().collect()
    }

    fn command(&self, state: &ArgsState, show_debug: bool) -> Command {
        let mut entries: Vec<_> = state.available.iter().collect();
        entries.sort_by(|(key_a, a), (key_b, b)| {
            (a.category, key_a).cmp(&(b.category, key_b))
        });

        entries.into_iter().fold(
            Command::new(self.name.clone())
                .disable_help_flag(true)
                .disable_version_flag(true),
            |cmd, (key, arg)| cmd.arg(arg.to_clap(key, show_debug)),
        )
    }

    /// Parse `argv` (program name first) against the registered options,
    /// replacing any previously parsed command line.
    pub fn parse_parameters<I, T>(&self, argv: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut state = self.write();
        let matches = self
            .command(&state, true)
            .try_get_matches_from(argv)
            .context(ParseSnafu)?;

        let mut command_line = Values::new();
        for key in state.available.keys() {
            if let Some(values) = matches.get_many::<String>(key) {
                command_line.insert(key.clone(), values.cloned().collect());
            }
        }

        debug!("Parsed {} command-line options", command_line.len());
        state.command_line = command_line;
        Ok(())
    }

    /// Load a TOML config file, replacing previously loaded config values.
    /// Every key, top-level or inside a chain section, must be registered.
    pub fn read_config_file(&self, path: &Path) -> Result<()> {
        let file = ConfigFile::load(path)?;

        let mut state = self.write();
        for key in file.top_level.keys() {
            ensure!(
                state.available.contains_key(key),
                UnknownConfigKeySnafu { key: key.clone() }
            );
        }
        for (section, values) in &file.sections {
            for key in values.keys() {
                ensure!(
                    state.available.contains_key(key),
                    UnknownConfigKeySnafu {
                        key: format!("{CHAIN_SECTIONS}.{section}.{key}")
                    }
                );
            }
        }

        debug!(
            "Read config file {} ({} top-level keys, {} sections)",
            path.display(),
            file.top_level.len(),
            file.sections.len()
        );
        state.config = file;
        Ok(())
    }

    /// Scope config section lookups to `chain`.
    pub fn select_config_network(&self, chain: &str) {
        self.write().network = Some(chain.to_string());
    }

    #[must_use]
    pub fn selected_network(&self) -> Option<String> {
        self.read().network.clone()
    }

    /// Override any parsed or configured value for `key`.
    pub fn force_set_arg(&self, key: &str, value: &str) {
        self.write().command_line.insert(
            key.trim_start_matches('-').to_string(),
            vec![value.to_string()],
        );
    }

    #[must_use]
    pub fn is_arg_set(&self, key: &str) -> bool {
        self.read().lookup(key.trim_start_matches('-'), false).is_some()
    }

    #[must_use]
    pub fn get_arg(&self, key: &str) -> Option<String> {
        self.read()
            .lookup(key.trim_start_matches('-'), false)
            .map(str::to_string)
    }

    #[must_use]
    pub fn get_arg_or(&self, key: &str, default: &str) -> String {
        self.get_arg(key).unwrap_or_else(|| default.to_string())
    }

    /// All values from the highest-precedence source that has any.
    #[must_use]
    pub fn get_args(&self, key: &str) -> Vec<String> {
        let key = key.trim_start_matches('-');
        let state = self.read();
        state
            .command_line_values(key)
            .or_else(|| state.section_values(key))
            .or_else(|| state.top_level_values(key))
            .cloned()
            .unwrap_or_default()
    }

    /// Integer value of `key`; values that are not integers read as 0.
    #[must_use]
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        self.get_arg(key)
            .map(|value| value.trim().parse().unwrap_or(0))
            .unwrap_or(default)
    }

    #[must_use]
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        self.read()
            .bool_arg(key.trim_start_matches('-'), default, false)
    }

    /// Resolve the chain from `-chain` and the `-regtest`/`-signet`/`-testnet`
    /// shortcuts. Chain sections are not consulted here since no chain is
    /// selected yet.
    pub fn get_chain_name(&self) -> Result<String> {
        let state = self.read();
        let regtest = state.bool_arg("regtest", false, true);
        let signet = state.bool_arg("signet", false, true);
        let testnet = state.bool_arg("testnet", false, true);
        let chain = state.lookup("chain", true);

        let selected = [chain.is_some(), regtest, signet, testnet]
            .into_iter()
            .filter(|set| *set)
            .count();
        ensure!(selected <= 1, InvalidChainCombinationSnafu);

        let name = if regtest {
            ChainType::REGTEST
        } else if signet {
            ChainType::SIGNET
        } else if testnet {
            ChainType::TESTNET
        } else {
            chain.unwrap_or(ChainType::MAIN)
        };
        Ok(name.to_string())
    }

    /// Network-only options that are set only at the top level of the config
    /// while a non-main chain is selected, and therefore ignored.
    #[must_use]
    pub fn unsuitable_section_only_args(&self) -> BTreeSet<String> {
        let state = self.read();
        let Some(network) = state.network.as_deref() else {
            return BTreeSet::new();
        };
        if network == ChainType::MAIN {
            return BTreeSet::new();
        }

        state
            .available
            .iter()
            .filter(|(_, arg)| arg.flags.contains(ArgFlags::NETWORK_ONLY))
            .map(|(key, _)| key)
            .filter(|key| {
                state.config.top_level.contains_key(*key)
                    && state.section_values(key).is_none()
                    && state.command_line_values(key).is_none()
            })
            .cloned()
            .collect()
    }

    /// Help text for every registered option, grouped by category.
    #[must_use]
    pub fn help_message(&self, show_debug: bool) -> String {
        let state = self.read();
        self.command(&state, show_debug).render_help().to_string()
    }
}

/// Empty means the flag was given bare, which is true.
fn interpret_bool(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("true") {
        return true;
    }
    if value.eq_ignore_ascii_case("false") {
        return false;
    }
    value.parse::<i64>().map(|n| n != 0).unwrap_or(false)
}
