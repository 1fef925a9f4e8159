use async_trait::async_trait;
use nsfinder_domain::{DelegationResponse, DomainError};

/// Sends one NS query for `zone` to `server` and returns the parsed answer.
///
/// `server` is an address or a host name. Implementations accept only
/// NOERROR and NXDOMAIN answers; every other status and any transport
/// failure is an error. They never retry.
#[async_trait]
pub trait DelegationClient: Send + Sync {
    async fn query_ns(&self, zone: &str, server: &str) -> Result<DelegationResponse, DomainError>;
}
