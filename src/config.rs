use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

use crate::convert::AccountMap;

/// Contents of the `--account-map` file.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Moneytree category -> freee account. An empty account means the fallback account.
    #[serde(default)]
    pub accounts: BTreeMap<String, String>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        for category in self.accounts.keys() {
            if category.trim().is_empty() {
                bail!("Category names must not be empty");
            }
        }
        Ok(())
    }

    pub fn from_account_map(accounts: &AccountMap) -> Self {
        Self {
            accounts: accounts
                .sorted()
                .into_iter()
                .map(|(category, account)| (category.to_string(), account.to_string()))
                .collect(),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub fn parse(content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load(path: &Path) -> Result<Config> {
    log::info!("Loading account map from {}...", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config =
        parse(&content).with_context(|| format!("Invalid account map {}", path.display()))?;
    log::info!("Loading account map...done ({} entries)", config.accounts.len());
    Ok(config)
}

/// The built-in account map, extended by the entries of the given config file.
pub fn account_map(config_path: Option<&Path>) -> Result<AccountMap> {
    let accounts = AccountMap::default();
    match config_path {
        Some(path) => Ok(accounts.with_overrides(load(path)?.accounts)),
        None => Ok(accounts),
    }
}
