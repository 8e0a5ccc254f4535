//! TOML config file loading.
//!
//! Top-level keys are general settings. Chain sections live under the
//! `chains` table and only apply while that chain is selected. Keys and chain
//! names keep their case:
//!
//! ```toml
//! signet = 1
//!
//! [chains.signet]
//! port = 38334
//!
//! [chains.MyChain]
//! maxpeers = 7
//! ```

use crate::error::{ConfigLoadSnafu, ConfigParseSnafu, InvalidConfigValueSnafu, Result};
use snafu::ResultExt;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use toml::{Table, Value};

/// Table holding one sub-table per chain.
pub const CHAIN_SECTIONS: &str = "chains";

pub type Values = HashMap<String, Vec<String>>;

/// Raw values read from a config file, before they are checked against the
/// option registry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub top_level: Values,
    pub sections: HashMap<String, Values>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).context(ConfigLoadSnafu { path })?;
        let table: Table = contents.parse().context(ConfigParseSnafu { path })?;
        Self::from_table(table)
    }

    fn from_table(table: Table) -> Result<Self> {
        let mut file = ConfigFile::default();
        for (key, value) in table {
            match value {
                Value::Table(chains) if key == CHAIN_SECTIONS => {
                    for (chain, section) in chains {
                        let qualified = format!("{CHAIN_SECTIONS}.{chain}");
                        let Value::Table(section) = section else {
                            return InvalidConfigValueSnafu {
                                key: qualified,
                                message: "chain sections must be tables",
                            }
                            .fail();
                        };
                        file.sections.insert(chain, section_values(&qualified, section)?);
                    }
                }
                Value::Table(_) => {
                    return InvalidConfigValueSnafu {
                        key,
                        message: format!(
                            "tables are only supported as [{CHAIN_SECTIONS}.<chain>] sections"
                        ),
                    }
                    .fail();
                }
                value => {
                    let values = scalar_values(&key, value)?;
                    file.top_level.insert(key, values);
                }
            }
        }

        Ok(file)
    }
}

fn section_values(section_key: &str, section: Table) -> Result<Values> {
    let mut values = Values::new();
    for (key, value) in section {
        let qualified = format!("{section_key}.{key}");
        values.insert(key, scalar_values(&qualified, value)?);
    }
    Ok(values)
}

fn scalar_values(key: &str, value: Value) -> Result<Vec<String>> {
    match value {
        Value::String(s) => Ok(vec![s]),
        Value::Integer(i) => Ok(vec![i.to_string()]),
        Value::Float(f) => Ok(vec![f.to_string()]),
        Value::Boolean(b) => Ok(vec![b.to_string()]),
        Value::Datetime(dt) => Ok(vec![dt.to_string()]),
        Value::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                values.extend(scalar_values(key, item)?);
            }
            Ok(values)
        }
        Value::Table(_) => InvalidConfigValueSnafu {
            key,
            message: "nested tables are not supported",
        }
        .fail(),
    }
}
