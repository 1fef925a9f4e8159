//! Minimal `/etc/resolv.conf` reader: only `nameserver` lines matter here.

use nsfinder_domain::config::ResolverConfig;
use nsfinder_domain::DomainError;
use std::net::IpAddr;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvConf {
    pub nameservers: Vec<IpAddr>,
}

impl ResolvConf {
    pub fn parse(contents: &str) -> Self {
        let mut nameservers = Vec::new();

        for line in contents.lines() {
            let line = match line.find(&['#', ';'][..]) {
                Some(pos) => &line[..pos],
                None => line,
            };
            let mut words = line.split_whitespace();
            if words.next() != Some("nameserver") {
                continue;
            }
            let Some(value) = words.next() else {
                continue;
            };
            // Link-local scope IDs ("fe80::1%eth0") are dropped.
            let value = value.split('%').next().unwrap_or(value);
            match value.parse::<IpAddr>() {
                Ok(ip) => nameservers.push(ip),
                Err(_) => debug!(value = %value, "Skipping unparsable nameserver entry"),
            }
        }

        Self { nameservers }
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::NoSystemResolver(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn first_server(&self) -> Option<IpAddr> {
        self.nameservers.first().copied()
    }
}

/// Server the first delegation query goes to: the configured override, or
/// the first `nameserver` of the system resolver configuration.
pub async fn bootstrap_server(config: &ResolverConfig) -> Result<String, DomainError> {
    if let Some(server) = &config.bootstrap_server {
        info!(server = %server, "Using configured bootstrap server");
        return Ok(server.clone());
    }

    let resolv_conf = ResolvConf::from_file(&config.resolv_conf_path).await?;
    let server = resolv_conf.first_server().ok_or_else(|| {
        DomainError::NoSystemResolver(format!(
            "no nameserver entry in {}",
            config.resolv_conf_path
        ))
    })?;

    info!(server = %server, source = %config.resolv_conf_path, "Using system resolver as bootstrap server");
    Ok(server.to_string())
}
