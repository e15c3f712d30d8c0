use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "DWARF_LISTEN_ADDR";
pub const PORT_ENV: &str = "APP_PORT";
pub const BASE_URL_ENV: &str = "APP_BASE_URL";
pub const NOT_FOUND_URL_ENV: &str = "NOTFOUND_REDIRECT_URL";
pub const CHAR_FLOOR_ENV: &str = "CHAR_FLOOR";
pub const MAX_CODE_LENGTH_ENV: &str = "MAX_CODE_LENGTH";
pub const NAMESPACE_ENV: &str = "DWARF_NAMESPACE";
pub const STORAGE_BACKEND_ENV: &str = "DWARF_STORAGE_BACKEND";
pub const REDIS_SERVER_ENV: &str = "REDIS_SERVER";
pub const REDIS_PASS_ENV: &str = "REDIS_PASS";
pub const REDIS_DB_ENV: &str = "REDIS_DB";
pub const LOG_FORMAT_ENV: &str = "DWARF_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_BASE_URL: &str = "https://example.com";
pub const DEFAULT_NOT_FOUND_URL: &str = "https://google.com";
pub const DEFAULT_REDIS_SERVER: &str = "localhost:6379";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "dwarf", about = "A collision-free URL shortener")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Port to listen on, `8000` or `:8000`. Overrides the port of
    /// `--listen-addr` and keeps its ip.
    #[arg(long, env = PORT_ENV, value_parser = parse_port)]
    pub port: Option<u16>,

    /// Public origin short codes are appended to.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Redirect target for unknown codes and the bare root.
    #[arg(long, env = NOT_FOUND_URL_ENV, default_value = DEFAULT_NOT_FOUND_URL)]
    pub not_found_url: String,

    /// Length of freshly minted codes before any collision.
    #[arg(long, env = CHAR_FLOOR_ENV, default_value_t = dwarf_shortener::policy::DEFAULT_CHAR_FLOOR)]
    pub char_floor: usize,

    #[arg(long, env = MAX_CODE_LENGTH_ENV, default_value_t = dwarf_shortener::policy::DEFAULT_MAX_LENGTH)]
    pub max_code_length: usize,

    /// Key prefix in the backend. `dwarf:` reads and writes the
    /// `dwarf::code:` / `dwarf::url:` keys of earlier deployments.
    #[arg(long, env = NAMESPACE_ENV, default_value = dwarf_shortener::keys::DEFAULT_NAMESPACE)]
    pub namespace: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Redis
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_SERVER_ENV, default_value = DEFAULT_REDIS_SERVER)]
    pub redis_server: String,

    #[arg(long, env = REDIS_PASS_ENV, default_value = "", hide_env_values = true)]
    pub redis_pass: String,

    #[arg(long, env = REDIS_DB_ENV, default_value_t = 0)]
    pub redis_db: u32,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

fn parse_port(value: &str) -> Result<u16, String> {
    let digits = value.strip_prefix(':').unwrap_or(value);
    digits
        .parse()
        .map_err(|_| format!("invalid port `{value}`"))
}

impl Cli {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::new(self.listen_addr.ip(), port),
            None => self.listen_addr,
        }
    }

    /// Connection url for the configured Redis server.
    pub fn redis_url(&self) -> String {
        if self.redis_pass.is_empty() {
            format!("redis://{}/{}", self.redis_server, self.redis_db)
        } else {
            format!(
                "redis://:{}@{}/{}",
                self.redis_pass, self.redis_server, self.redis_db
            )
        }
    }
}
