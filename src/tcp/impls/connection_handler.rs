use std::net::SocketAddr;
use log::{debug, info, warn};
use tokio::net::TcpStream;
use tokio::time::timeout;
use crate::protocol::enums::protocol_error::ProtocolError;
use crate::protocol::enums::request::Request;
use crate::protocol::enums::response::Response;
use crate::protocol::enums::status_code::StatusCode;
use crate::protocol::framing::{read_message, write_message};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tcp::enums::login_state::LoginState;
use crate::tcp::structs::connection_handler::ConnectionHandler;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::session_token::SessionToken;

impl ConnectionHandler {
    /// Reads the first request of a connection and serves it. Errors end the
    /// connection; they are logged here and never reach the accept loop.
    #[tracing::instrument(level = "debug", skip(self, stream))]
    pub async fn handle_connection(&self, mut stream: TcpStream, remote_addr: SocketAddr)
    {
        let request = match timeout(self.request_timeout, read_message::<Request, _>(&mut stream, &self.encoding, self.max_frame_size)).await {
            Ok(Ok(request)) => request,
            Ok(Err(ProtocolError::ConnectionClosed)) => {
                debug!("[TCP] {remote_addr} closed before sending a request");
                return;
            }
            Ok(Err(error @ (ProtocolError::Encoding(_) | ProtocolError::FrameTooLarge { .. }))) => {
                warn!("[TCP] Bad request from {remote_addr}: {error}");
                self.tracker.update_stats(StatsEvent::BadRequests, 1);
                return;
            }
            Ok(Err(error)) => {
                debug!("[TCP] Reading request from {remote_addr} failed: {error}");
                return;
            }
            Err(_) => {
                debug!("[TCP] {remote_addr} sent nothing within {:?}", self.request_timeout);
                return;
            }
        };

        debug!("[TCP] {} from {remote_addr}", request.method());
        if let Err(error) = self.dispatch(&mut stream, request).await {
            match error {
                ProtocolError::UnexpectedMessage(_) => {
                    warn!("[TCP] {remote_addr}: {error}");
                    self.tracker.update_stats(StatsEvent::BadRequests, 1);
                }
                _ => debug!("[TCP] {remote_addr}: {error}"),
            }
        }
    }

    pub async fn dispatch(&self, stream: &mut TcpStream, request: Request) -> Result<(), ProtocolError>
    {
        match request {
            Request::Register { username, password } => {
                self.tracker.update_stats(StatsEvent::RegistersHandled, 1);
                let status_code = match self.tracker.register(&username, &password) {
                    Ok(()) => {
                        info!("[TCP] Registered {username}");
                        StatusCode::SuccessfulRegister
                    }
                    Err(error) => {
                        debug!("[TCP] {error}");
                        StatusCode::UnsuccessfulRegister
                    }
                };
                self.reply(stream, &Response::status(status_code)).await
            }
            Request::Login { username, password } => {
                self.handle_login(stream, LoginState::AwaitingCredentials { username, password }).await
            }
            Request::Logout { token } => {
                self.tracker.update_stats(StatsEvent::LogoutsHandled, 1);
                let status_code = match self.tracker.logout(token) {
                    Ok(username) => {
                        info!("[TCP] {username} logged out");
                        StatusCode::SuccessfulLogout
                    }
                    Err(_) => StatusCode::UnsuccessfulLogout,
                };
                self.reply(stream, &Response::status(status_code)).await
            }
            Request::List => {
                self.tracker.update_stats(StatsEvent::ListsHandled, 1);
                self.reply(stream, &Response::file_catalog(self.tracker.file_catalog())).await
            }
            Request::Details { file_name } => {
                self.tracker.update_stats(StatsEvent::DetailsHandled, 1);
                let response = match self.tracker.verified_peers_for(&file_name, self.probe.as_ref()).await {
                    Ok(peer_infos) if !peer_infos.is_empty() => {
                        debug!("[DETAILS] {} active peers hold {file_name}", peer_infos.len());
                        Response::file_found(peer_infos)
                    }
                    Ok(_) => {
                        debug!("[DETAILS] No active peer holds {file_name}");
                        Response::status(StatusCode::FileNotFound)
                    }
                    Err(error) => {
                        debug!("[DETAILS] {error}");
                        Response::status(StatusCode::FileNotFound)
                    }
                };
                self.reply(stream, &response).await
            }
            Request::NotifySuccessful { username, file_name, peer_username } => {
                self.tracker.update_stats(StatsEvent::NotificationsHandled, 1);
                if let Err(error) = self.tracker.record_file_acquired(&username, &file_name) {
                    warn!("[TCP] Ignoring download report from {username}: {error}");
                    return Ok(());
                }
                self.credit_download(&peer_username);
                Ok(())
            }
            Request::NotifySuccessfulPart { username, file_name, peer_username, piece_id } => {
                self.tracker.update_stats(StatsEvent::NotificationsHandled, 1);
                if let Err(error) = self.tracker.record_piece_acquired(&username, &file_name, piece_id) {
                    warn!("[TCP] Ignoring piece report from {username}: {error}");
                    return Ok(());
                }
                self.credit_download(&peer_username);
                Ok(())
            }
            Request::NotifyFailed { username, file_name, peer_username } => {
                self.tracker.update_stats(StatsEvent::NotificationsHandled, 1);
                if !self.tracker.increment_failures(&peer_username) {
                    warn!("[TCP] {username} reported a failed download of {file_name} from unknown peer {peer_username}");
                }
                Ok(())
            }
            Request::IAmSeeder { username, file_name } => {
                self.tracker.update_stats(StatsEvent::NotificationsHandled, 1);
                if let Err(error) = self.tracker.mark_seeder(&username, &file_name) {
                    warn!("[TCP] Ignoring seeder report: {error}");
                }
                Ok(())
            }
            Request::AllPeers => {
                self.tracker.update_stats(StatsEvent::AllPeersHandled, 1);
                self.reply(stream, &Response::all_peers(self.tracker.get_peers())).await
            }
            request @ (Request::Inventory(_) | Request::CheckActiveTrackerToPeer) => {
                Err(ProtocolError::UnexpectedMessage(request.method().to_string()))
            }
        }
    }

    /// Drives a LOGIN exchange to `Established`. Leaving early after a token
    /// was issued revokes it.
    async fn handle_login(&self, stream: &mut TcpStream, mut state: LoginState) -> Result<(), ProtocolError>
    {
        loop {
            state = match state {
                LoginState::AwaitingCredentials { username, password } => {
                    if !self.tracker.authenticate(&username, &password) {
                        info!("[LOGIN] Rejected credentials for {username}");
                        self.tracker.update_stats(StatsEvent::LoginsFailed, 1);
                        return self.reply(stream, &Response::status(StatusCode::UnsuccessfulLogin)).await;
                    }
                    let token = match self.tracker.issue_token(&username) {
                        Ok(token) => token,
                        Err(error) => {
                            warn!("[LOGIN] {error}");
                            self.tracker.update_stats(StatsEvent::LoginsFailed, 1);
                            return self.reply(stream, &Response::status(StatusCode::UnsuccessfulLogin)).await;
                        }
                    };
                    if let Err(error) = self.reply(stream, &Response::login(token)).await {
                        self.abandon_login(&username, token);
                        return Err(error);
                    }
                    LoginState::AwaitingInitialInventory { username, token }
                }
                LoginState::AwaitingInitialInventory { username, token } => {
                    let inventory = match timeout(self.login_inventory_timeout, read_message::<Request, _>(stream, &self.encoding, self.max_frame_size)).await {
                        Ok(Ok(Request::Inventory(inventory))) => inventory,
                        Ok(Ok(request)) => {
                            self.abandon_login(&username, token);
                            return Err(ProtocolError::UnexpectedMessage(format!("{} while awaiting INVENTORY", request.method())));
                        }
                        Ok(Err(error)) => {
                            self.abandon_login(&username, token);
                            return Err(error);
                        }
                        Err(_) => {
                            self.abandon_login(&username, token);
                            return Err(ProtocolError::Timeout(self.login_inventory_timeout));
                        }
                    };
                    match self.tracker.apply_login_details(&username, token, inventory) {
                        Ok(_) => LoginState::Established { username, token },
                        Err(TrackerError::InvalidToken) => {
                            info!("[LOGIN] {username} logged in again before sending its inventory");
                            return Ok(());
                        }
                        Err(error) => {
                            self.abandon_login(&username, token);
                            warn!("[LOGIN] {error}");
                            return Ok(());
                        }
                    }
                }
                LoginState::Established { username, token } => {
                    info!("[LOGIN] {username} logged in with token {token}");
                    self.tracker.update_stats(StatsEvent::LoginsHandled, 1);
                    return Ok(());
                }
            };
        }
    }

    fn abandon_login(&self, username: &str, token: SessionToken)
    {
        if self.tracker.revoke_token(token) {
            info!("[LOGIN] Revoked token of {username}, login was not completed");
        }
        self.tracker.update_stats(StatsEvent::LoginsFailed, 1);
    }

    fn credit_download(&self, peer_username: &str)
    {
        if !self.tracker.increment_downloads(peer_username) {
            warn!("[TCP] Download credited to unknown peer {peer_username}");
        }
    }

    async fn reply(&self, stream: &mut TcpStream, response: &Response) -> Result<(), ProtocolError>
    {
        write_message(stream, &self.encoding, response, self.max_frame_size).await
    }
}
