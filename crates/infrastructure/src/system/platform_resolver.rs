use async_trait::async_trait;
use nsfinder_application::ports::AddressResolver;
use nsfinder_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Forward lookups through the operating system resolver.
pub struct SystemAddressResolver {
    timeout: Duration,
}

impl SystemAddressResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl AddressResolver for SystemAddressResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        let name = host.trim_end_matches('.');
        if name.is_empty() {
            return Err(DomainError::AddressLookupFailed {
                host: host.to_string(),
                reason: "empty host name".to_string(),
            });
        }

        let resolved = tokio::time::timeout(self.timeout, tokio::net::lookup_host((name, 0)))
            .await
            .map_err(|_| DomainError::AddressLookupFailed {
                host: host.to_string(),
                reason: format!("timed out after {:?}", self.timeout),
            })?
            .map_err(|e| DomainError::AddressLookupFailed {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        // getaddrinfo repeats addresses once per socket type.
        let mut addresses: Vec<IpAddr> = Vec::new();
        for addr in resolved {
            let ip = addr.ip();
            if !addresses.contains(&ip) {
                addresses.push(ip);
            }
        }

        if addresses.is_empty() {
            return Err(DomainError::AddressLookupFailed {
                host: host.to_string(),
                reason: "no addresses".to_string(),
            });
        }

        debug!(host = %host, count = addresses.len(), "Host resolved");
        Ok(addresses)
    }
}
