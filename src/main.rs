use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = moneytree_freee::args::parse();
    moneytree_freee::cli::main(args)
}
