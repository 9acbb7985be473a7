use std::io;
use std::process;

use blog_core::{Api, BlogClient};
use clap::Parser;
use log::info;

mod cli;
mod render;
mod repl;
mod settings;
mod transport;

use transport::UreqTransport;

fn main() {
    let args = cli::Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .format_timestamp_secs()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    let base_url = settings::resolve_base_url(args)?;
    info!("using blog API at {base_url}");

    let api = Api::new(BlogClient::new(&base_url), UreqTransport::new());
    let mut session = repl::Session::new(api);
    repl::run(&mut session, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
