use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// Owns the bound socket and dispatches every accepted connection onto a
/// freshly spawned task. The listener never reads request content itself.
pub struct Listener {
    inner: TcpListener,
    root: PathBuf,
}

impl Listener {
    /// Binds the listen socket. A port that cannot be bound is fatal:
    /// the error carries the OS cause and the accept loop is never entered.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let inner = TcpListener::bind(cfg.listen_addr())
            .await
            .with_context(|| format!("failed to bind port {}", cfg.port))?;
        info!("Listening on {}", inner.local_addr()?);

        Ok(Self {
            inner,
            root: cfg.root.clone(),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Accept failed: {}", e);
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let root = self.root.clone();
            tokio::spawn(async move {
                let mut conn = Connection::new(socket, root);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
