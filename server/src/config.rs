use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

/// Where `/api/word` gets its words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WordSource {
    Upstream,
    Local,
}

impl std::str::FromStr for WordSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upstream" => Ok(WordSource::Upstream),
            "local" => Ok(WordSource::Local),
            other => Err(anyhow::anyhow!(
                "Unknown word source {:?}, expected \"upstream\" or \"local\"",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) host: IpAddr,
    pub(crate) port: u16,
    pub(crate) upstream_url: String,
    pub(crate) upstream_timeout: Duration,
    pub(crate) word_source: WordSource,
    pub(crate) index_file: PathBuf,
    pub(crate) assets_dir: PathBuf,
    pub(crate) log_filter: String,
}

impl Config {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = match var("HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid HOST {:?}", host))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT {:?}", port))?,
            None => 3000,
        };
        let upstream_timeout = match var("UPSTREAM_TIMEOUT_MS") {
            Some(ms) => ms
                .parse::<u64>()
                .with_context(|| format!("Invalid UPSTREAM_TIMEOUT_MS {:?}", ms))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_MS,
        };
        let word_source = match var("WORD_SOURCE") {
            Some(source) => source.parse::<WordSource>()?,
            None => WordSource::Upstream,
        };

        Ok(Self {
            host,
            port,
            upstream_url: var("UPSTREAM_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_owned()),
            upstream_timeout: Duration::from_millis(upstream_timeout),
            word_source,
            index_file: var("INDEX_FILE").unwrap_or_else(|| "index.html".to_owned()).into(),
            assets_dir: var("ASSETS_DIR").unwrap_or_else(|| "assets".to_owned()).into(),
            log_filter: var("RUST_LOG").unwrap_or_else(|| "info,tower_http=debug".to_owned()),
        })
    }

    pub(crate) fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
