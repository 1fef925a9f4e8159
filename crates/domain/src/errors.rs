use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Query for {zone} timed out waiting for {server}")]
    QueryTimeout { zone: String, server: String },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("No name server to answer the question: {server} returned {rcode} for {zone}")]
    UnacceptableResponse {
        zone: String,
        server: String,
        rcode: String,
    },

    #[error("No nameservers found for {0}")]
    NoNameServers(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Address lookup failed for {host}: {reason}")]
    AddressLookupFailed { host: String, reason: String },

    #[error("Country database unavailable: {0}")]
    GeoDatabaseUnavailable(String),

    #[error("Country lookup failed for {ip}: {reason}")]
    GeoLookupFailed { ip: String, reason: String },

    #[error("No usable system resolver: {0}")]
    NoSystemResolver(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Input error: {0}")]
    InputError(String),
}

impl DomainError {
    /// Errors that end the delegation walk for the current domain.
    pub fn aborts_delegation(&self) -> bool {
        matches!(
            self,
            Self::QueryTimeout { .. }
                | Self::Transport { .. }
                | Self::UnacceptableResponse { .. }
                | Self::NoNameServers(_)
                | Self::InvalidDnsResponse(_)
        )
    }
}
