#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use rendezvous_tracker::config::enums::wire_encoding::WireEncoding;
use rendezvous_tracker::config::structs::configuration::Configuration;
use rendezvous_tracker::protocol::enums::request::Request;
use rendezvous_tracker::protocol::enums::response::Response;
use rendezvous_tracker::protocol::enums::status_code::StatusCode;
use rendezvous_tracker::protocol::framing::{read_message, write_message};
use rendezvous_tracker::tcp::tcp::tcp_service;
use rendezvous_tracker::tracker::structs::inventory_report::InventoryReport;
use rendezvous_tracker::tracker::structs::peer_tracker::PeerTracker;
use rendezvous_tracker::tracker::structs::session_token::SessionToken;

pub type TestTracker = Arc<PeerTracker>;
pub type TestConfig = Arc<Configuration>;

pub const MAX_FRAME_SIZE: usize = 65_536;
pub const CATALOG: [&str; 3] = ["movie.mp4", "song.mp3", "book.pdf"];

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.tracker_config.login_inventory_timeout = 1;
    config.tracker_config.probe_connect_timeout = 1;
    config.tracker_config.probe_response_timeout = 1;
    config.tcp_server[0].bind_address = "127.0.0.1:0".to_string();
    config.tcp_server[0].request_timeout = 2;
    config.tcp_server[0].max_frame_size = MAX_FRAME_SIZE;
    config.tcp_server[0].encoding = WireEncoding::msgpack;
    Arc::new(config)
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(PeerTracker::new(create_test_config(), CATALOG.iter().map(|name| name.to_string()).collect()))
}

/// Starts a listener on an ephemeral port. Keep the sender alive for as long
/// as the server should run.
pub async fn start_test_server(tracker: TestTracker) -> (SocketAddr, tokio::sync::watch::Sender<bool>) {
    let (tx, rx) = tokio::sync::watch::channel(false);
    let server_config = tracker.config.tcp_server[0].clone();
    let (address, _handle) = tcp_service(tracker, &server_config, rx).await.unwrap();
    (address, tx)
}

/// A peer that answers every liveness probe with `status_code`.
pub async fn spawn_fake_peer(status_code: StatusCode) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else { return };
            tokio::spawn(async move {
                let request: Result<Request, _> = read_message(&mut stream, &WireEncoding::msgpack, MAX_FRAME_SIZE).await;
                if let Ok(Request::CheckActiveTrackerToPeer) = request {
                    let _ = write_message(&mut stream, &WireEncoding::msgpack, &Response::status(status_code), MAX_FRAME_SIZE).await;
                }
            });
        }
    });
    address
}

/// An address nothing listens on.
pub async fn dead_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    address
}

pub async fn connect(address: SocketAddr) -> TcpStream {
    TcpStream::connect(address).await.unwrap()
}

pub async fn send(stream: &mut TcpStream, request: &Request) {
    write_message(stream, &WireEncoding::msgpack, request, MAX_FRAME_SIZE).await.unwrap();
}

pub async fn receive(stream: &mut TcpStream) -> Response {
    tokio::time::timeout(Duration::from_secs(5), read_message(stream, &WireEncoding::msgpack, MAX_FRAME_SIZE))
        .await
        .unwrap()
        .unwrap()
}

/// One request, one reply, on a fresh connection.
pub async fn request(address: SocketAddr, request: Request) -> Response {
    let mut stream = connect(address).await;
    send(&mut stream, &request).await;
    receive(&mut stream).await
}

/// Sends a fire-and-forget request and waits until the server closed the
/// connection, so its effect is visible afterwards.
pub async fn notify(address: SocketAddr, request: Request) {
    let mut stream = connect(address).await;
    send(&mut stream, &request).await;
    assert_closed_without_reply(&mut stream).await;
}

pub async fn assert_closed_without_reply(stream: &mut TcpStream) {
    let mut buffer = [0u8; 1];
    let read = tokio::time::timeout(Duration::from_secs(5), tokio::io::AsyncReadExt::read(stream, &mut buffer))
        .await
        .unwrap();
    assert!(matches!(read, Ok(0) | Err(_)), "expected the connection to close without a reply");
}

pub fn inventory(peer: SocketAddr, files: &[(&str, &[u32], bool)]) -> InventoryReport {
    InventoryReport {
        ip: peer.ip().to_string(),
        port: peer.port(),
        shared_files: files.iter().map(|(name, _, _)| name.to_string()).collect(),
        pieces: files.iter().map(|(name, pieces, _)| (name.to_string(), pieces.iter().copied().collect())).collect(),
        seeder_bits: files.iter().map(|(name, _, seeder)| (name.to_string(), *seeder)).collect(),
    }
}

pub async fn register(address: SocketAddr, username: &str, password: &str) -> Response {
    request(address, Request::Register { username: username.to_string(), password: password.to_string() }).await
}

/// Full LOGIN exchange including the inventory frame.
pub async fn login(address: SocketAddr, username: &str, password: &str, report: InventoryReport) -> SessionToken {
    let mut stream = connect(address).await;
    send(&mut stream, &Request::Login { username: username.to_string(), password: password.to_string() }).await;
    let token = match receive(&mut stream).await {
        Response::Login { status_code: StatusCode::SuccessfulLogin, token } => token,
        other => panic!("login of {username} failed: {other:?}"),
    };
    send(&mut stream, &Request::Inventory(report)).await;
    assert_closed_without_reply(&mut stream).await;
    token
}
