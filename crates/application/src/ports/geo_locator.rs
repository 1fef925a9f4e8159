use async_trait::async_trait;
use nsfinder_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Lowercase two-letter ISO country code for `ip`.
    async fn country_code(&self, ip: IpAddr) -> Result<String, DomainError>;
}
