use clap::Parser;
use std::process;
use svgr::cli::{print_banner, run, Cli};
use svgr::init_logging;

#[tokio::main]
async fn main() {
    print_banner();
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    if let Err(e) = run(cli).await {
        println!();
        println!("Error: {e}");
        process::exit(1);
    }
}
