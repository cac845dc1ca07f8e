use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use crate::config::structs::tcp_server_config::TcpServerConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tcp::structs::connection_handler::ConnectionHandler;
use crate::tcp::structs::liveness_prober::LivenessProber;
use crate::tcp::structs::tcp_server::TcpServer;
use crate::tcp::tcp::ACCEPT_RETRY_DELAY;
use crate::tracker::structs::peer_tracker::PeerTracker;
use crate::tracker::traits::liveness_probe::LivenessProbe;

impl TcpServer {
    /// Binds a listener that probes peers over TCP with the listener's own
    /// encoding.
    #[tracing::instrument(level = "debug")]
    pub async fn new(tracker: Arc<PeerTracker>, server_config: &TcpServerConfig) -> io::Result<TcpServer>
    {
        let tracker_config = &tracker.config.tracker_config;
        let prober = LivenessProber::new(
            server_config.encoding,
            server_config.max_frame_size,
            Duration::from_secs(tracker_config.probe_connect_timeout),
            Duration::from_secs(tracker_config.probe_response_timeout),
        );
        TcpServer::with_probe(tracker, server_config, Arc::new(prober)).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn with_probe(tracker: Arc<PeerTracker>, server_config: &TcpServerConfig, probe: Arc<dyn LivenessProbe>) -> io::Result<TcpServer>
    {
        let bind_address: SocketAddr = server_config.bind_address.parse().map_err(io::Error::other)?;
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(server_config.reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.listen(server_config.backlog)?;
        socket.set_nonblocking(true)?;

        let std_listener: std::net::TcpListener = socket.into();
        let listener = TcpListener::from_std(std_listener)?;

        let login_inventory_timeout = Duration::from_secs(tracker.config.tracker_config.login_inventory_timeout);
        Ok(TcpServer {
            listener,
            handler: Arc::new(ConnectionHandler {
                tracker,
                probe,
                encoding: server_config.encoding,
                max_frame_size: server_config.max_frame_size,
                request_timeout: Duration::from_secs(server_config.request_timeout),
                login_inventory_timeout,
            }),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Accepts connections until `rx` changes, one task per connection.
    #[tracing::instrument(level = "debug", skip(self, rx))]
    pub async fn start(self, mut rx: tokio::sync::watch::Receiver<bool>)
    {
        let local_addr = self.local_addr().map(|addr| addr.to_string()).unwrap_or_default();
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[TCP] Stopping server listener on {local_addr}...");
                    break;
                }
                result = self.listener.accept() => {
                    match result {
                        Ok((stream, remote_addr)) => {
                            self.handler.tracker.update_stats(StatsEvent::ConnectionsHandled, 1);
                            let handler = self.handler.clone();
                            tokio::spawn(async move {
                                handler.handle_connection(stream, remote_addr).await;
                            });
                        }
                        Err(error) => {
                            warn!("[TCP] Failed to accept a connection on {local_addr}: {error}");
                            tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                        }
                    }
                }
            }
        }
    }
}
