use crate::freee::{Deal, DealKind};
use crate::moneytree::Expense;

use super::{accounts::AccountMap, tax::tax_category};

/// Owner's contributions, the freee account expenses are settled against.
const SETTLEMENT_ACCOUNT: &str = "事業主借";

pub fn to_deal(expense: &Expense, accounts: &AccountMap) -> Deal {
    let amount = expense.amount.saturating_neg();
    Deal::settled_on_occurrence(
        DealKind::Expense,
        expense.date,
        accounts.resolve(&expense.category).to_string(),
        tax_category(expense.date, DealKind::Expense),
        amount,
        expense.memo.clone(),
        SETTLEMENT_ACCOUNT,
    )
}
