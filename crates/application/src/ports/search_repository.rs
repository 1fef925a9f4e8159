use async_trait::async_trait;
use nsfinder_domain::{AddressRecord, DomainError, NameServerAddress};

/// Result store for domain searches.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Registers a search for `domain` and returns its identifier.
    async fn register_search(&self, domain: &str, crc: Option<i64>) -> Result<i64, DomainError>;

    async fn record_name_server_address(
        &self,
        search_id: i64,
        address: &NameServerAddress,
    ) -> Result<(), DomainError>;

    async fn record_domain_address(
        &self,
        search_id: i64,
        address: &AddressRecord,
    ) -> Result<(), DomainError>;
}
