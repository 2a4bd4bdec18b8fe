use clap::Parser;

mod cli;
mod config;
mod core;
mod engines;
mod error;
mod handlers;
mod llm;
mod models;
mod server;
mod transformers;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    pretty_env_logger::init();
    log::info!("Starting briefer...");

    match dotenv {
        Ok(path) => log::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => log::debug!("No .env file found"),
        Err(e) => log::warn!("Failed to load .env file: {}", e),
    }

    let config = config::load_config(cli::CliArgs::parse())?;

    server::run(config).await
}
