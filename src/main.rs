mod core;
mod library;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use stacks::ClientKind;
use std::fs::File;

#[derive(Parser)]
#[command(name = "stacks", about = "Top-10 most borrowed books, by category")]
struct Args {
    /// Library client to use
    #[arg(short, long, value_enum)]
    client: Option<ClientKind>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to stacks.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("stacks.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match core::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("stacks: {e}");
            std::process::exit(1);
        }
    };
    let cli_client = args.client.map(|c| c.as_config_str());
    let config = core::config::resolve(&file_config, cli_client);

    log::info!("Stacks starting up with client: {}", config.client);

    tui::run(config)
}
