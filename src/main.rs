use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use rendezvous_tracker::common::common::{read_file_list, setup_logging};
use rendezvous_tracker::config::structs::configuration::Configuration;
use rendezvous_tracker::stats::enums::stats_event::StatsEvent;
use rendezvous_tracker::structs::Cli;
use rendezvous_tracker::tcp::tcp::tcp_service;
use rendezvous_tracker::tracker::structs::peer_tracker::PeerTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    if let Some(file_list) = args.file_list {
        config.tracker_config.file_list_path = file_list;
    }
    let config = Arc::new(config);

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard = config.sentry_config.enabled.then(|| {
        sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }))
    });

    let file_catalog = match read_file_list(&config.tracker_config.file_list_path) {
        Ok(file_catalog) => file_catalog,
        Err(error) => {
            error!("[BOOT] {error}");
            exit(1);
        }
    };
    if file_catalog.is_empty() {
        warn!("[BOOT] {} lists no files, DETAILS will never find anything", config.tracker_config.file_list_path);
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(PeerTracker::new(config.clone(), file_catalog));

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let (tcp_tx, tcp_rx) = tokio::sync::watch::channel(false);
            let mut tcp_futures = Vec::new();
            for tcp_server_object in config.tcp_server.iter().filter(|server| server.enabled) {
                match tcp_service(tracker.clone(), tcp_server_object, tcp_rx.clone()).await {
                    Ok((_, handle)) => tcp_futures.push(handle),
                    Err(error) => {
                        error!("[TCP] Could not listen on {}: {error}", tcp_server_object.bind_address);
                        exit(1);
                    }
                }
            }
            if tcp_futures.is_empty() {
                warn!("[BOOT] No TCP server is enabled, nothing to serve");
            }

            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                let stats_handler = tokio_shutdown.clone();
                let tracker_spawn_stats = tracker.clone();
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp());
                                let stats = tracker_spawn_stats.get_stats();
                                info!(
                                    "[STATS] Files: {} - Accounts: {} - Sessions: {} - Evicted: {} | \
                                    Conn: {} - Reg: {} - Login: {} ({} failed) - Logout: {} - List: {} - All peers: {} - Details: {} - Notify: {} - Bad: {} | \
                                    Probes: {} ({} failed)",
                                    stats.files, stats.accounts, stats.sessions, stats.peers_evicted,
                                    stats.connections_handled, stats.registers_handled, stats.logins_handled, stats.logins_failed,
                                    stats.logouts_handled, stats.lists_handled, stats.all_peers_handled, stats.details_handled, stats.notifications_handled,
                                    stats.bad_requests, stats.probes, stats.probes_failed
                                );
                            }
                            _ = stats_handler.handle() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            let _ = tcp_tx.send(true);
            if let Err(error) = try_join_all(tcp_futures).await {
                sentry::capture_error(&error);
                error!("Errors happened on shutting down TCP listeners: {error}");
            }

            tokio_shutdown.handle().await;
            tokio::time::sleep(Duration::from_secs(1)).await;

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
