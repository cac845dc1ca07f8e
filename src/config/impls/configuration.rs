use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::wire_encoding::WireEncoding;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tcp_server_config::TcpServerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                file_list_path: String::from("fileDownloadList.txt"),
                login_inventory_timeout: 30,
                probe_connect_timeout: 5,
                probe_response_timeout: 5,
            },
            tcp_server: vec!(
                TcpServerConfig {
                    enabled: true,
                    bind_address: String::from("127.0.0.1:5000"),
                    request_timeout: 30,
                    max_frame_size: 4_194_304,
                    encoding: WireEncoding::msgpack,
                    reuse_address: true,
                    backlog: 1024,
                }
            ),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Unknown log level: \"{}\"", self.log_level)));
        }
        if self.tracker_config.file_list_path.is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] tracker_config.file_list_path is empty"));
        }
        for (name, value) in [
            ("login_inventory_timeout", self.tracker_config.login_inventory_timeout),
            ("probe_connect_timeout", self.tracker_config.probe_connect_timeout),
            ("probe_response_timeout", self.tracker_config.probe_response_timeout),
        ] {
            if value == 0 {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] tracker_config.{name} must be positive")));
            }
        }
        for tcp_server in &self.tcp_server {
            if tcp_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] Invalid bind address: \"{}\"", tcp_server.bind_address)));
            }
            if tcp_server.max_frame_size == 0 {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] max_frame_size of {} must be positive", tcp_server.bind_address)));
            }
            if tcp_server.request_timeout == 0 {
                return Err(CustomError::new(&format!("[VALIDATE CONFIG] request_timeout of {} must be positive", tcp_server.bind_address)));
            }
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
