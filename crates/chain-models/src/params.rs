use serde::Serialize;
use std::path::{Path, PathBuf};

/// Parameters shared by every component that needs to know which chain the
/// process runs on, without pulling in consensus rules.
///
/// Values are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BaseChainParams {
    data_dir_suffix: String,
    default_port: u16,
}

impl BaseChainParams {
    pub fn new(data_dir_suffix: impl Into<String>, default_port: u16) -> Self {
        Self {
            data_dir_suffix: data_dir_suffix.into(),
            default_port,
        }
    }

    /// Path segment appended to the base data directory. Empty on main.
    #[must_use]
    pub fn data_dir_suffix(&self) -> &str {
        &self.data_dir_suffix
    }

    #[must_use]
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// Per-chain data directory under `base`.
    #[must_use]
    pub fn data_dir(&self, base: &Path) -> PathBuf {
        if self.data_dir_suffix.is_empty() {
            base.to_path_buf()
        } else {
            base.join(&self.data_dir_suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_without_suffix_is_base() {
        let params = BaseChainParams::new("", 8332);
        let base = Path::new("/var/lib/node");
        assert_eq!(params.data_dir(base), PathBuf::from("/var/lib/node"));
    }

    #[test]
    fn test_data_dir_appends_suffix() {
        let params = BaseChainParams::new("testnet3", 18332);
        let base = Path::new("/var/lib/node");
        assert_eq!(
            params.data_dir(base),
            PathBuf::from("/var/lib/node/testnet3")
        );
    }

    #[test]
    fn test_serialization_exposes_fields() {
        let params = BaseChainParams::new("signet", 38332);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["data_dir_suffix"], "signet");
        assert_eq!(json["default_port"], 38332);
    }
}
