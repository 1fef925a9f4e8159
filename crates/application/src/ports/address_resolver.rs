use async_trait::async_trait;
use nsfinder_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// All addresses of any family the platform resolver reports for `host`.
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;
}
