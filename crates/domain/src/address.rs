use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    V4,
    V6,
    Invalid,
}

impl AddressFamily {
    /// Classifies a textual address. Total: anything unparsable is `Invalid`.
    pub fn classify(text: &str) -> Self {
        match text.trim().parse::<IpAddr>() {
            Ok(ip) => Self::of(&ip),
            Err(_) => Self::Invalid,
        }
    }

    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }

    /// Stored `ip_type` column value.
    pub fn as_code(&self) -> i64 {
        match self {
            Self::V4 => 4,
            Self::V6 => 6,
            Self::Invalid => 0,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::V4 => "ipv4",
            Self::V6 => "ipv6",
            Self::Invalid => "invalid",
        }
    }
}

/// One resolved address with its classification and country.
///
/// `country_code` is `None` when geolocation failed; the failure reason
/// is kept in `geo_error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    pub ip: IpAddr,
    pub family: AddressFamily,
    pub country_code: Option<Arc<str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_error: Option<String>,
}

impl AddressRecord {
    pub fn new(ip: IpAddr) -> Self {
        Self {
            ip,
            family: AddressFamily::of(&ip),
            country_code: None,
            geo_error: None,
        }
    }

    pub fn with_country(mut self, code: impl Into<Arc<str>>) -> Self {
        self.country_code = Some(code.into());
        self.geo_error = None;
        self
    }

    pub fn with_geo_error(mut self, reason: impl Into<String>) -> Self {
        self.country_code = None;
        self.geo_error = Some(reason.into());
        self
    }
}

/// Address of a discovered nameserver host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameServerAddress {
    pub name_server: Arc<str>,
    #[serde(flatten)]
    pub address: AddressRecord,
}

impl NameServerAddress {
    pub fn new(name_server: impl Into<Arc<str>>, address: AddressRecord) -> Self {
        Self {
            name_server: name_server.into(),
            address,
        }
    }
}
