use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

mod cli;

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("storefront_admin", LevelFilter::Info)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = cli::Cli::parse();
    cli::run(args).await
}
