//! Country lookups against a MaxMind GeoLite2/GeoIP2 Country database.

use async_trait::async_trait;
use maxminddb::{geoip2, MaxMindDBError, Reader};
use nsfinder_application::ports::GeoLocator;
use nsfinder_domain::config::GeoIpConfig;
use nsfinder_domain::DomainError;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

type CountryReader = Reader<Vec<u8>>;

pub struct MaxMindCountryLocator {
    path: PathBuf,
    cache_handle: bool,
    reader: OnceCell<Arc<CountryReader>>,
}

impl MaxMindCountryLocator {
    pub fn new(path: impl Into<PathBuf>, cache_handle: bool) -> Self {
        Self {
            path: path.into(),
            cache_handle,
            reader: OnceCell::new(),
        }
    }

    pub fn from_config(config: &GeoIpConfig) -> Self {
        Self::new(&config.database_path, config.cache_handle)
    }

    /// A failed open is not cached; the next lookup tries again.
    async fn reader(&self) -> Result<Arc<CountryReader>, DomainError> {
        if !self.cache_handle {
            return Self::open(self.path.clone()).await;
        }

        self.reader
            .get_or_try_init(|| Self::open(self.path.clone()))
            .await
            .cloned()
    }

    /// Reads the whole database file on the blocking pool.
    async fn open(path: PathBuf) -> Result<Arc<CountryReader>, DomainError> {
        debug!(path = %path.display(), "Opening country database");
        let display = path.display().to_string();

        tokio::task::spawn_blocking(move || Reader::open_readfile(&path))
            .await
            .map_err(|e| DomainError::GeoDatabaseUnavailable(format!("{}: {}", display, e)))?
            .map(Arc::new)
            .map_err(|e| DomainError::GeoDatabaseUnavailable(format!("{}: {}", display, e)))
    }

    fn lookup_code(reader: &CountryReader, ip: IpAddr) -> Result<String, DomainError> {
        let country: geoip2::Country = reader.lookup(ip).map_err(|e| {
            let reason = match e {
                MaxMindDBError::AddressNotFoundError(_) => "address not in database".to_string(),
                other => other.to_string(),
            };
            DomainError::GeoLookupFailed {
                ip: ip.to_string(),
                reason,
            }
        })?;

        country
            .country
            .and_then(|c| c.iso_code)
            .map(|code| code.to_ascii_lowercase())
            .ok_or_else(|| DomainError::GeoLookupFailed {
                ip: ip.to_string(),
                reason: "no country ISO code for address".to_string(),
            })
    }
}

#[async_trait]
impl GeoLocator for MaxMindCountryLocator {
    async fn country_code(&self, ip: IpAddr) -> Result<String, DomainError> {
        let reader = self.reader().await?;
        Self::lookup_code(&reader, ip)
    }
}
