use serde::{Deserialize, Serialize};
use std::fmt;

/// A named network profile the node can run against.
///
/// Parsing never fails: any name other than the four reserved ones is a
/// custom chain, which keeps every regtest-only behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChainType {
    #[default]
    Main,
    Testnet,
    Signet,
    Regtest,
    Custom(String),
}

impl ChainType {
    pub const MAIN: &'static str = "main";
    pub const TESTNET: &'static str = "test";
    pub const SIGNET: &'static str = "signet";
    pub const REGTEST: &'static str = "regtest";

    /// Exact, case-sensitive match on the reserved names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::MAIN => ChainType::Main,
            Self::TESTNET => ChainType::Testnet,
            Self::SIGNET => ChainType::Signet,
            Self::REGTEST => ChainType::Regtest,
            other => ChainType::Custom(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ChainType::Main => Self::MAIN,
            ChainType::Testnet => Self::TESTNET,
            ChainType::Signet => Self::SIGNET,
            ChainType::Regtest => Self::REGTEST,
            ChainType::Custom(name) => name,
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, ChainType::Custom(_))
    }

    /// Custom chains carry the regtest-only options too.
    #[must_use]
    pub fn allows_regtest_options(&self) -> bool {
        matches!(self, ChainType::Regtest | ChainType::Custom(_))
    }

    /// The rust-bitcoin network for the well-known chains.
    #[must_use]
    pub fn bitcoin_network(&self) -> Option<bitcoin::Network> {
        match self {
            ChainType::Main => Some(bitcoin::Network::Bitcoin),
            ChainType::Testnet => Some(bitcoin::Network::Testnet),
            ChainType::Signet => Some(bitcoin::Network::Signet),
            ChainType::Regtest => Some(bitcoin::Network::Regtest),
            ChainType::Custom(_) => None,
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ChainType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ChainType {
    fn from(name: String) -> Self {
        match Self::from_name(&name) {
            ChainType::Custom(_) => ChainType::Custom(name),
            reserved => reserved,
        }
    }
}

impl From<ChainType> for String {
    fn from(chain: ChainType) -> Self {
        match chain {
            ChainType::Custom(name) => name,
            reserved => reserved.as_str().to_string(),
        }
    }
}
