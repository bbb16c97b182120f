pub mod args;
pub mod cli;
pub mod config;
pub mod convert;
mod date_format;
pub mod export;
pub mod freee;
pub mod import;
pub mod moneytree;
