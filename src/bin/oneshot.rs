//! Single-request demo server.
//!
//! Accepts exactly one connection, serves one response through the same
//! pipeline as the main binary, then exits. There is no error isolation:
//! any failure propagates and terminates the process.

use tokio::net::TcpListener;
use tracing::info;

use plinth::config::Config;
use plinth::files::FileHandler;
use plinth::http::connection::Connection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {} for a single request", cfg.server.listen_addr);

    let (socket, peer) = listener.accept().await?;
    info!("Accepted connection from {}", peer);

    let mut conn = Connection::new(socket, FileHandler::new(cfg.static_files));
    conn.run().await?;

    Ok(())
}
