use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, StaticFilesConfig};
use crate::files::FileHandler;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, cfg.static_files.clone()).await
}

/// Accept loop. Every connection is handled on its own task, so a stalled
/// client never blocks the others; the only data shared between tasks is
/// read-only.
pub async fn serve(listener: TcpListener, static_files: StaticFilesConfig) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let handler = FileHandler::new(static_files.clone());
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
