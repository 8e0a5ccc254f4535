use crate::error::{NotSelectedSnafu, Result};
use chain_args::ArgsManager;
use chain_models::{BaseChainParams, ChainType};
use snafu::OptionExt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Default port for any chain without a reserved name.
pub const CUSTOM_CHAIN_DEFAULT_PORT: u16 = 18553;

/// Build the parameters for `chain`. Never fails: unrecognized names,
/// including the empty string, become a custom chain that uses the name as
/// its data directory suffix.
#[must_use]
pub fn create_base_chain_params(chain: &str) -> BaseChainParams {
    match ChainType::from_name(chain) {
        ChainType::Main => BaseChainParams::new("", 8332),
        ChainType::Testnet => BaseChainParams::new("testnet3", 18332),
        ChainType::Regtest => BaseChainParams::new("regtest", 18443),
        ChainType::Signet => BaseChainParams::new("signet", 38332),
        ChainType::Custom(name) => BaseChainParams::new(name, CUSTOM_CHAIN_DEFAULT_PORT),
    }
}

/// Slot for the selected chain parameters.
///
/// Selecting again replaces the previous value. Readers get a shared handle,
/// so a reader holding old parameters keeps them intact across a reselect.
#[derive(Debug, Default)]
pub struct ChainParamsHolder {
    selected: RwLock<Option<Arc<BaseChainParams>>>,
}

impl ChainParamsHolder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: RwLock::new(None),
        }
    }

    pub fn select(&self, chain: &str) -> Arc<BaseChainParams> {
        let params = Arc::new(create_base_chain_params(chain));
        *self
            .selected
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(params.clone());
        params
    }

    pub fn get(&self) -> Result<Arc<BaseChainParams>> {
        self.selected
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .context(NotSelectedSnafu)
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

static GLOBAL_CHAIN_PARAMS: ChainParamsHolder = ChainParamsHolder::new();

/// Select the process-wide chain and scope `args` config sections to it.
pub fn select_base_params(args: &ArgsManager, chain: &str) {
    let params = GLOBAL_CHAIN_PARAMS.select(chain);
    args.select_config_network(chain);

    info!(
        "Selected chain '{}' (data dir suffix: '{}', default port: {})",
        chain,
        params.data_dir_suffix(),
        params.default_port()
    );
}

/// The process-wide chain parameters, or [`crate::Error::NotSelected`].
pub fn try_base_params() -> Result<Arc<BaseChainParams>> {
    GLOBAL_CHAIN_PARAMS.get()
}

/// The process-wide chain parameters.
///
/// # Panics
///
/// Panics if no chain has been selected. Reading parameters before
/// [`select_base_params`] is a bug in startup ordering.
#[must_use]
pub fn base_params() -> Arc<BaseChainParams> {
    match try_base_params() {
        Ok(params) => params,
        Err(e) => panic!("{e}: call select_base_params during startup"),
    }
}
