use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone as _, Utc};

use crate::freee::{DealKind, TaxCategory};

/// Consumption tax went from 8% to 10% at this instant.
fn tax_rate_increased_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 10, 1, 0, 0, 0)
        .single()
        .expect("Fixed date is valid")
}

/// Moneytree dates have no time of day, they are taken as midnight UTC.
fn as_utc_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn tax_category(date: NaiveDate, kind: DealKind) -> TaxCategory {
    let reduced_rate = as_utc_instant(date) < tax_rate_increased_at();
    match (kind, reduced_rate) {
        (DealKind::Income, true) => TaxCategory::TaxableSales8,
        (DealKind::Income, false) => TaxCategory::TaxableSales10,
        (DealKind::Expense, true) => TaxCategory::TaxablePurchase8,
        (DealKind::Expense, false) => TaxCategory::TaxablePurchase10,
    }
}
