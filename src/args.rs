use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Convert Moneytree csv exports into csv files for the freee deal import.
#[derive(Parser, Debug)]
#[clap(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(true)
        .args(["bank_histories_file", "expenses_file", "print_account_map"]),
))]
pub struct Args {
    /// Bank account histories csv file downloaded from Moneytree
    #[clap(long)]
    pub bank_histories_file: Option<PathBuf>,

    /// Expenses csv file downloaded from Moneytree
    #[clap(long)]
    pub expenses_file: Option<PathBuf>,

    /// Directory the generated csv files are written to
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// YAML file with additional category to account mappings
    #[clap(long)]
    pub account_map: Option<PathBuf>,

    /// Print the category to account mappings in use and exit
    #[clap(long)]
    pub print_account_map: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
