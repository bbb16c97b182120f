//! Records as they appear in the CSV exports of Moneytree.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// One row of a bank account history export.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BankTransaction {
    #[serde(rename = "日付", with = "crate::date_format")]
    pub date: NaiveDate,
    #[serde(rename = "金額", deserialize_with = "lenient_int")]
    pub amount: i64,
    #[serde(rename = "口座通貨", default)]
    pub currency: String,
    #[serde(rename = "ご利用先・摘要", default)]
    pub summary: String,
    #[serde(rename = "メモ", default)]
    pub memo: String,
    #[serde(rename = "領収書", default)]
    pub receipt: String,
    #[serde(rename = "取引後残高", default, deserialize_with = "lenient_int")]
    pub balance: i64,
    #[serde(rename = "カテゴリ", default)]
    pub category: String,
    #[serde(rename = "経費", default)]
    pub expense_category: String,
}

/// One row of an expenses export. `amount` is the money spent, always as a positive number.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    #[serde(rename = "日付", with = "crate::date_format")]
    pub date: NaiveDate,
    #[serde(rename = "金額", deserialize_with = "lenient_int")]
    pub amount: i64,
    #[serde(rename = "口座通貨", default)]
    pub currency: String,
    #[serde(rename = "ご利用先・摘要", default)]
    pub summary: String,
    #[serde(rename = "メモ", default)]
    pub memo: String,
    #[serde(rename = "領収書", default)]
    pub receipt: String,
    #[serde(rename = "カテゴリ", default)]
    pub category: String,
    #[serde(rename = "口座名", default)]
    pub bank_account_name: String,
    #[serde(rename = "口座番号", default)]
    pub bank_account_number: String,
    #[serde(rename = "現地通貨", default)]
    pub local_currency: String,
    #[serde(rename = "現地通貨金額", default, deserialize_with = "lenient_int")]
    pub local_currency_amount: i64,
}

/// Moneytree leaves integer cells blank when there is no value, treat those as zero.
fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = String::deserialize(deserializer)?;
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|err| serde::de::Error::custom(format!("Invalid integer '{value}': {err}")))
}
