use crate::error::{ArgsSnafu, Result};
use crate::params::create_base_chain_params;
use chain_args::ArgsManager;
use chain_models::{BaseChainParams, ChainType};
use snafu::ResultExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The selected chain, built once at startup and handed to the components
/// that need it instead of going through the process-wide accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainContext {
    chain: ChainType,
    params: Arc<BaseChainParams>,
}

impl ChainContext {
    pub fn new(chain: &str) -> Self {
        Self {
            chain: ChainType::from_name(chain),
            params: Arc::new(create_base_chain_params(chain)),
        }
    }

    /// Resolve the chain from `args` and scope its config sections to it.
    pub fn from_args(args: &ArgsManager) -> Result<Self> {
        let chain = args.get_chain_name().context(ArgsSnafu)?;
        args.select_config_network(&chain);
        Ok(Self::new(&chain))
    }

    #[must_use]
    pub fn chain(&self) -> &ChainType {
        &self.chain
    }

    #[must_use]
    pub fn params(&self) -> &BaseChainParams {
        &self.params
    }

    #[must_use]
    pub fn shared_params(&self) -> Arc<BaseChainParams> {
        self.params.clone()
    }

    #[must_use]
    pub fn data_dir(&self, base: &Path) -> PathBuf {
        self.params.data_dir(base)
    }
}
