//! Chain selection for the node.
//!
//! The host registers the chain options with [`setup_chain_params_base_options`],
//! resolves a chain name through its `ArgsManager`, and calls
//! [`select_base_params`] once at startup. Everything afterwards reads the
//! selection through [`base_params`] or a [`ChainContext`] handed down from
//! startup.

pub mod context;
pub mod error;
pub mod options;
pub mod params;

pub use chain_models::{BaseChainParams, ChainType};
pub use context::ChainContext;
pub use error::{Error, Result};
pub use options::setup_chain_params_base_options;
pub use params::{
    base_params, create_base_chain_params, select_base_params, try_base_params,
    ChainParamsHolder,
};
