use anyhow::Result;
use console::{style, StyledObject};
use std::path::{Path, PathBuf};

use crate::args::Args;
use crate::config::{self, Config};
use crate::convert::{self, bank_transaction, expense, AccountMap};
use crate::export::{self, EXPENSE_DEALS_PREFIX, INCOME_DEALS_PREFIX};
use crate::freee::Deal;
use crate::import;

pub fn main(args: Args) -> Result<()> {
    let accounts = config::account_map(args.account_map.as_deref())?;

    if args.print_account_map {
        print!("{}", Config::from_account_map(&accounts).to_yaml()?);
        return Ok(());
    }

    if let Some(path) = &args.bank_histories_file {
        let deals = convert_bank_histories(path)?;
        save(&deals, &args.output_dir, INCOME_DEALS_PREFIX)?;
    }
    if let Some(path) = &args.expenses_file {
        let deals = convert_expenses(path, &accounts)?;
        save(&deals, &args.output_dir, EXPENSE_DEALS_PREFIX)?;
    }

    Ok(())
}

pub fn convert_bank_histories(path: &Path) -> Result<Vec<Deal>> {
    let transactions = import::load_bank_transactions(path)?;
    let deals = convert::assemble(&transactions, bank_transaction::to_deal);
    log::info!(
        "Converted {} of {} bank transactions into income deals",
        deals.len(),
        transactions.len(),
    );
    Ok(deals)
}

pub fn convert_expenses(path: &Path, accounts: &AccountMap) -> Result<Vec<Deal>> {
    let expenses = import::load_expenses(path)?;
    Ok(convert::assemble(&expenses, |record| {
        Some(expense::to_deal(record, accounts))
    }))
}

fn save(deals: &[Deal], output_dir: &Path, prefix: &str) -> Result<PathBuf> {
    let path = export::save_deals(deals, output_dir, prefix)?;
    println!(
        "{} {}",
        style_count(deals.len()),
        style_path(&path.display().to_string())
    );
    Ok(path)
}

fn style_count(count: usize) -> StyledObject<String> {
    let result = style(format!("{count} deals")).bold();
    if count == 0 {
        result.yellow()
    } else {
        result.green()
    }
}

fn style_path(path: &str) -> StyledObject<String> {
    style(format!("-> {path}")).cyan()
}
