use std::{net::SocketAddr, time::Duration};

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::{config::Config, core::Services, handlers};

const BROWSER_DELAY: Duration = Duration::from_secs(1);

fn opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Opens the frontend once the listener had a moment to come up.
fn open_browser(url: String) {
    tokio::spawn(async move {
        tokio::time::sleep(BROWSER_DELAY).await;

        match tokio::process::Command::new(opener()).arg(&url).status().await {
            Ok(status) if status.success() => log::info!("Opened {} in browser", url),
            Ok(status) => log::warn!("Browser opener exited with {}", status),
            Err(e) => log::warn!("Failed to open browser: {}", e),
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {}", e);
    }
    log::info!("Shutting down...");
}

pub async fn run(config: Config) -> Result<()> {
    let services = Services::from_config(&config).context("failed to build service clients")?;
    let app = handlers::router(services, &config.server.static_dir);

    let bind = format!("{}:{}", config.server.host, config.server.port);
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address {bind}"))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    log::info!(
        "Listening on http://{}, serving frontend from {}",
        addr,
        config.server.static_dir.display()
    );

    if config.server.open_browser {
        let host = if addr.ip().is_unspecified() {
            "127.0.0.1".to_string()
        } else {
            addr.ip().to_string()
        };
        open_browser(format!("http://{}:{}", host, addr.port()));
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log::info!("Server stopped");

    Ok(())
}
