//! Centralized configuration (environment variables + defaults).
//!
//! Binaries call `dotenv::dotenv()` first so a local `.env` file is honoured.

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILTER: &str = "info,grocery_list=debug";

/// Listen address of the API server (`GROCERY_BIND_ADDR`).
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = env_or("GROCERY_BIND_ADDR", DEFAULT_BIND_ADDR);
    raw.parse::<SocketAddr>()
        .with_context(|| format!("GROCERY_BIND_ADDR must be a socket address, got '{}'", raw))
}

/// Directory the static front-end assets are served from (`GROCERY_STATIC_DIR`).
pub fn static_dir() -> PathBuf {
    PathBuf::from(env_or("GROCERY_STATIC_DIR", DEFAULT_STATIC_DIR))
}

/// Whether the store starts with the three starter items (`GROCERY_SEED`, default true).
pub fn seed_store() -> anyhow::Result<bool> {
    let raw = env_or("GROCERY_SEED", "true");
    parse_bool(&raw).with_context(|| format!("GROCERY_SEED must be a boolean, got '{}'", raw))
}

/// Base URL the terminal client talks to (`GROCERY_API_URL`).
pub fn api_url() -> String {
    env_or("GROCERY_API_URL", DEFAULT_API_URL)
}

/// Resolved server settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub seed: bool,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr: bind_addr()?,
            static_dir: static_dir(),
            seed: seed_store()?,
        })
    }
}

pub fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "on" => Ok(true),
        "false" | "f" | "0" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected bool, got '{}'", other),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
