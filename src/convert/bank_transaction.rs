use crate::freee::{Deal, DealKind};
use crate::moneytree::BankTransaction;

use super::tax::tax_category;

const SALES_ACCOUNT: &str = "売上高";
/// Owner's drawings, the freee account income is settled against.
const SETTLEMENT_ACCOUNT: &str = "事業主貸";

/// Deposits become income deals. Withdrawals are tracked through the expenses export
/// instead, so they (and zero amounts) produce no deal.
pub fn to_deal(transaction: &BankTransaction) -> Option<Deal> {
    if transaction.amount <= 0 {
        log::debug!(
            "Skipping non-income bank transaction on {}: {} ({})",
            transaction.date,
            transaction.amount,
            transaction.summary,
        );
        return None;
    }

    Some(Deal::settled_on_occurrence(
        DealKind::Income,
        transaction.date,
        SALES_ACCOUNT.to_string(),
        tax_category(transaction.date, DealKind::Income),
        transaction.amount,
        transaction.memo.clone(),
        SETTLEMENT_ACCOUNT,
    ))
}
