use clap::Parser;
use dotenvy::dotenv;

use studyhall::cli::{self, Cli};

#[tokio::main]
async fn main() {
    dotenv().ok();
    studyhall::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli).await {
        eprintln!("\n❌ {}", e);
        std::process::exit(1);
    }
}
