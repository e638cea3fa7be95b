//! Server configuration types.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/tutorials";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Which Record Store implementation backs the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Schema holding the tutorials table. Must be a valid PostgreSQL identifier.
    pub schema: String,
    pub bind_addr: SocketAddr,
    /// The one origin granted CORS response headers.
    pub cors_allowed_origin: String,
    pub max_body_bytes: usize,
    pub store: StoreKind,
}
