use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tokio::sync::Semaphore;
use tokio::time::{Duration, timeout};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

const BACKLOG: u32 = 128;

/// Upper bound on concurrently served connections.
const MAX_CONNECTIONS: usize = 256;

/// Wall-clock deadline for one connection, accept to close. A slow or
/// silent client cannot hold a worker and its descriptor past this.
const CONNECTION_DEADLINE: Duration = Duration::from_secs(30);

/// Accepts connections until a fatal accept error occurs, dispatching
/// each to a detached worker task that is never joined or tracked.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg.port)?;
    info!(
        "httpd started at port {}, doc root {}",
        cfg.port,
        cfg.doc_root.display()
    );

    let limit = Arc::new(Semaphore::new(MAX_CONNECTIONS));

    loop {
        let permit = limit.clone().acquire_owned().await?;

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!("Failed to accept a connection: {}", e);
                break;
            }
        };

        // Endpoint strings are diagnostics only, but a connection whose
        // local endpoint cannot be resolved is dropped without a response.
        let local = match socket.local_addr() {
            Ok(addr) => addr,
            Err(e) => {
                error!("Failed to get server address for new connection: {}", e);
                continue;
            }
        };
        info!("Accepted client {} at server {}", peer, local);

        let doc_root = cfg.doc_root.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, peer, local);
            match timeout(CONNECTION_DEADLINE, conn.serve(&doc_root)).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("Connection error from {}: {}", peer, e),
                Err(_) => warn!("Connection from {} exceeded the per-connection deadline", peer),
            }
            drop(permit);
        });
    }

    // Dropping the listener releases the passive socket; already-running
    // workers are unaffected and finish on their own.
    Ok(())
}

fn bind(port: u16) -> anyhow::Result<TcpListener> {
    let socket = TcpSocket::new_v4().context("Failed to allocate the listen socket")?;
    socket
        .set_reuseaddr(true)
        .context("Failed to set SO_REUSEADDR on the listen socket")?;

    let addr = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port);
    socket
        .bind(addr.into())
        .context("Failed to bind IP address and port to the listen socket")?;
    socket
        .listen(BACKLOG)
        .context("Failed to listen for connections")
}
