use common_macros::hash_map;
use std::collections::{BTreeMap, HashMap};

/// Account used for categories that have no (or an empty) mapping.
pub const FALLBACK_ACCOUNT: &str = "雑費";

/// Maps Moneytree expense categories to freee account names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMap {
    accounts: HashMap<String, String>,
}

impl Default for AccountMap {
    fn default() -> Self {
        let accounts = hash_map![
            "家賃" => "地代家賃",
            "WEBサービス" => "雑費",
            "通信" => "通信費",
            "買い物" => "雑費",
            "税金" => "租税公課",
            "水道" => "水道光熱費",
            "電気" => "水道光熱費",
            "交際費" => "交際費",
            "本・雑誌" => "新聞図書費",
            "タクシー" => "旅費交通費",
            "ガス" => "水道光熱費",
            "オフィス設備" => "修繕費",
            "携帯電話" => "通信費",
            "電車" => "旅費交通費",
            "電化製品" => "消耗品費",
            "インターネット" => "通信費",
            "消耗品" => "消耗品費",
            "交通" => "旅費交通費",
            "住民税" => "事業主貸",
        ];
        Self {
            accounts: accounts
                .into_iter()
                .map(|(category, account)| (category.to_string(), account.to_string()))
                .collect(),
        }
    }
}

impl AccountMap {
    /// Adds the given mappings, replacing existing ones for the same category.
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = (String, String)>) -> Self {
        for (category, account) in overrides {
            match self.accounts.insert(category.clone(), account.clone()) {
                Some(previous) if previous != account => {
                    log::info!("Mapping category {category} to {account} instead of {previous}")
                }
                Some(_) => {}
                None => log::info!("Mapping category {category} to {account}"),
            }
        }
        self
    }

    pub fn resolve(&self, category: &str) -> &str {
        match self.accounts.get(category) {
            Some(account) if !account.is_empty() => account,
            _ => {
                log::debug!("No account for category '{category}', using {FALLBACK_ACCOUNT}");
                FALLBACK_ACCOUNT
            }
        }
    }

    pub fn sorted(&self) -> BTreeMap<&str, &str> {
        self.accounts
            .iter()
            .map(|(category, account)| (category.as_str(), account.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
