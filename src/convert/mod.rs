//! Turns Moneytree records into freee deals.

pub mod accounts;
pub mod bank_transaction;
pub mod expense;
pub mod tax;

pub use accounts::AccountMap;

use crate::freee::Deal;

/// Maps every record, drops the ones without a deal and returns the rest ordered by date.
pub fn assemble<R>(
    records: impl IntoIterator<Item = R>,
    to_deal: impl FnMut(R) -> Option<Deal>,
) -> Vec<Deal> {
    sort_deals_by_date(records.into_iter().filter_map(to_deal).collect())
}

/// Deals on the same date keep their relative order.
pub fn sort_deals_by_date(mut deals: Vec<Deal>) -> Vec<Deal> {
    deals.sort_by_key(|deal| deal.occurred_at);
    deals
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::freee::{DealKind, TaxCategory};
    use crate::moneytree::{BankTransaction, Expense};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn deal(date: NaiveDate, remarks: &str) -> Deal {
        Deal::settled_on_occurrence(
            DealKind::Income,
            date,
            "売上高".to_string(),
            TaxCategory::TaxableSales10,
            1,
            remarks.to_string(),
            "事業主貸",
        )
    }

    fn remarks(deals: &[Deal]) -> Vec<&str> {
        deals.iter().map(|deal| deal.remarks.as_str()).collect()
    }

    fn bank_transaction(date: NaiveDate, amount: i64, memo: &str) -> BankTransaction {
        BankTransaction {
            date,
            amount,
            currency: "JPY".to_string(),
            summary: String::new(),
            memo: memo.to_string(),
            receipt: String::new(),
            balance: 0,
            category: String::new(),
            expense_category: String::new(),
        }
    }

    fn expense(date: NaiveDate, amount: i64, memo: &str) -> Expense {
        Expense {
            date,
            amount,
            currency: "JPY".to_string(),
            summary: String::new(),
            memo: memo.to_string(),
            receipt: String::new(),
            category: "家賃".to_string(),
            bank_account_name: String::new(),
            bank_account_number: String::new(),
            local_currency: String::new(),
            local_currency_amount: 0,
        }
    }

    #[test]
    fn sort_is_stable() {
        let deals = vec![
            deal(date(2020, 1, 2), "c"),
            deal(date(2020, 1, 1), "a"),
            deal(date(2020, 1, 1), "b"),
        ];
        assert_eq!(vec!["a", "b", "c"], remarks(&sort_deals_by_date(deals)));
    }

    #[test]
    fn sort_keeps_same_day_order_regardless_of_content() {
        let deals = vec![
            deal(date(2020, 3, 1), "z"),
            deal(date(2020, 3, 1), "y"),
            deal(date(2020, 2, 1), "x"),
            deal(date(2020, 3, 1), "w"),
        ];
        assert_eq!(
            vec!["x", "z", "y", "w"],
            remarks(&sort_deals_by_date(deals))
        );
    }

    #[test]
    fn empty_input() {
        let transactions: Vec<BankTransaction> = vec![];
        assert!(assemble(&transactions, bank_transaction::to_deal).is_empty());
    }

    #[test]
    fn bank_transactions_are_filtered_and_sorted() {
        let transactions = vec![
            bank_transaction(date(2020, 1, 2), 300, "third"),
            bank_transaction(date(2020, 1, 1), -100, "withdrawal"),
            bank_transaction(date(2020, 1, 1), 100, "first"),
            bank_transaction(date(2020, 1, 1), 0, "zero"),
            bank_transaction(date(2020, 1, 1), 200, "second"),
        ];
        let deals = assemble(&transactions, bank_transaction::to_deal);
        assert_eq!(vec!["first", "second", "third"], remarks(&deals));
        assert_eq!(
            vec![100, 200, 300],
            deals.iter().map(|deal| deal.amount).collect::<Vec<_>>()
        );
    }

    #[test]
    fn expenses_are_all_kept() {
        let accounts = AccountMap::default();
        let expenses = vec![
            expense(date(2019, 10, 1), 500, "b"),
            expense(date(2019, 9, 30), 400, "a"),
            expense(date(2019, 10, 1), 0, "c"),
        ];
        let deals = assemble(&expenses, |record| {
            Some(expense::to_deal(record, &accounts))
        });
        assert_eq!(vec!["a", "b", "c"], remarks(&deals));
        assert_eq!(
            vec![-400, -500, 0],
            deals.iter().map(|deal| deal.amount).collect::<Vec<_>>()
        );
    }
}
