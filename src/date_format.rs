//! Serde helpers for the `YYYY/MM/DD` dates used by both Moneytree and freee CSV files.

use chrono::NaiveDate;
use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y/%m/%d";

pub fn parse(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), FORMAT)
}

pub fn format(date: &NaiveDate) -> String {
    date.format(FORMAT).to_string()
}

pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(date))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(|err| D::Error::custom(format!("Invalid date '{value}': {err}")))
}

pub mod option {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_str(""),
        }
    }
}
