use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::info;
use tokio::task::JoinHandle;
use crate::config::structs::tcp_server_config::TcpServerConfig;
use crate::tcp::structs::tcp_server::TcpServer;
use crate::tracker::structs::peer_tracker::PeerTracker;

/// Pause after a failed `accept()`, so descriptor exhaustion does not spin
/// the accept loop.
pub const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Binds one configured listener and spawns its accept loop. Returns the
/// bound address, which differs from the configured one for port 0.
pub async fn tcp_service(tracker: Arc<PeerTracker>, server_config: &TcpServerConfig, rx: tokio::sync::watch::Receiver<bool>) -> io::Result<(SocketAddr, JoinHandle<()>)>
{
    let tcp_server = TcpServer::new(tracker, server_config).await?;
    let local_addr = tcp_server.local_addr()?;
    info!("[TCP] Starting a server listener on {local_addr} ({:?} encoding)", server_config.encoding);
    let handle = tokio::spawn(async move {
        tcp_server.start(rx).await;
    });
    Ok((local_addr, handle))
}
