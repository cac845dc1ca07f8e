use std::sync::Arc;
use tokio::net::TcpListener;
use crate::tcp::structs::connection_handler::ConnectionHandler;

#[derive(Debug)]
pub struct TcpServer {
    pub(crate) listener: TcpListener,
    pub(crate) handler: Arc<ConnectionHandler>,
}
