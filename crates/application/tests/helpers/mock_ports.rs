use async_trait::async_trait;
use nsfinder_application::ports::{
    AddressResolver, DelegationClient, GeoLocator, SearchRepository, TargetSource,
    UpstreamSelector,
};
use nsfinder_domain::{
    AddressRecord, DelegationResponse, DomainError, DomainTarget, NameServerAddress,
    NameServerSet, ResponseStatus,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex, RwLock};

pub fn ns_response<const N: usize>(names: [&str; N]) -> DelegationResponse {
    DelegationResponse::new(ResponseStatus::NoError).with_answers(names)
}

pub fn referral<const N: usize>(names: [&str; N]) -> DelegationResponse {
    DelegationResponse::new(ResponseStatus::NoError).with_authority(names)
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[derive(Clone, Default)]
pub struct MockDelegationClient {
    responses: Arc<RwLock<HashMap<String, Result<DelegationResponse, DomainError>>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockDelegationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, zone: &str, response: DelegationResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(zone.to_string(), Ok(response));
    }

    pub fn set_error(&self, zone: &str, error: DomainError) {
        self.responses
            .write()
            .unwrap()
            .insert(zone.to_string(), Err(error));
    }

    /// `(zone, server)` pairs in query order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn queried_zones(&self) -> Vec<String> {
        self.calls().into_iter().map(|(zone, _)| zone).collect()
    }
}

#[async_trait]
impl DelegationClient for MockDelegationClient {
    async fn query_ns(&self, zone: &str, server: &str) -> Result<DelegationResponse, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((zone.to_string(), server.to_string()));

        self.responses
            .read()
            .unwrap()
            .get(zone)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::Transport {
                    server: server.to_string(),
                    reason: format!("no mock response for {}", zone),
                })
            })
    }
}

#[derive(Clone, Default)]
pub struct MockAddressResolver {
    hosts: Arc<RwLock<HashMap<String, Vec<IpAddr>>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockAddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_host(&self, host: &str, addresses: &[&str]) {
        self.hosts.write().unwrap().insert(
            host.to_string(),
            addresses.iter().map(|a| ip(a)).collect(),
        );
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressResolver for MockAddressResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.lookups.lock().unwrap().push(host.to_string());

        self.hosts
            .read()
            .unwrap()
            .get(host)
            .cloned()
            .ok_or_else(|| DomainError::AddressLookupFailed {
                host: host.to_string(),
                reason: "no such host".to_string(),
            })
    }
}

#[derive(Clone, Default)]
pub struct MockGeoLocator {
    codes: Arc<RwLock<HashMap<IpAddr, String>>>,
    fallback: Arc<RwLock<Option<String>>>,
}

impl MockGeoLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every address resolves to `code` unless set explicitly.
    pub fn with_fallback(code: &str) -> Self {
        let locator = Self::default();
        *locator.fallback.write().unwrap() = Some(code.to_string());
        locator
    }

    pub fn set_code(&self, address: &str, code: &str) {
        self.codes
            .write()
            .unwrap()
            .insert(ip(address), code.to_string());
    }
}

#[async_trait]
impl GeoLocator for MockGeoLocator {
    async fn country_code(&self, ip: IpAddr) -> Result<String, DomainError> {
        if let Some(code) = self.codes.read().unwrap().get(&ip) {
            return Ok(code.clone());
        }

        self.fallback
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::GeoLookupFailed {
                ip: ip.to_string(),
                reason: "address not found in database".to_string(),
            })
    }
}

/// Picks the last nameserver, so tests can tell it apart from the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct LastUpstreamSelector;

impl UpstreamSelector for LastUpstreamSelector {
    fn select<'a>(&self, name_servers: &'a NameServerSet) -> &'a str {
        name_servers.names()[name_servers.len() - 1].as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSearch {
    pub id: i64,
    pub domain: String,
    pub crc: Option<i64>,
}

#[derive(Clone, Default)]
pub struct MockSearchRepository {
    searches: Arc<Mutex<Vec<StoredSearch>>>,
    name_server_addresses: Arc<Mutex<Vec<(i64, NameServerAddress)>>>,
    domain_addresses: Arc<Mutex<Vec<(i64, AddressRecord)>>>,
    fail_register: Arc<Mutex<bool>>,
}

impl MockSearchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_register(&self, fail: bool) {
        *self.fail_register.lock().unwrap() = fail;
    }

    pub fn searches(&self) -> Vec<StoredSearch> {
        self.searches.lock().unwrap().clone()
    }

    pub fn name_server_addresses(&self) -> Vec<(i64, NameServerAddress)> {
        self.name_server_addresses.lock().unwrap().clone()
    }

    pub fn domain_addresses(&self) -> Vec<(i64, AddressRecord)> {
        self.domain_addresses.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchRepository for MockSearchRepository {
    async fn register_search(&self, domain: &str, crc: Option<i64>) -> Result<i64, DomainError> {
        if *self.fail_register.lock().unwrap() {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }

        let mut searches = self.searches.lock().unwrap();
        let id = searches.len() as i64 + 1;
        searches.push(StoredSearch {
            id,
            domain: domain.to_string(),
            crc,
        });
        Ok(id)
    }

    async fn record_name_server_address(
        &self,
        search_id: i64,
        address: &NameServerAddress,
    ) -> Result<(), DomainError> {
        self.name_server_addresses
            .lock()
            .unwrap()
            .push((search_id, address.clone()));
        Ok(())
    }

    async fn record_domain_address(
        &self,
        search_id: i64,
        address: &AddressRecord,
    ) -> Result<(), DomainError> {
        self.domain_addresses
            .lock()
            .unwrap()
            .push((search_id, address.clone()));
        Ok(())
    }
}

pub struct MockTargetSource {
    targets: Result<Vec<DomainTarget>, DomainError>,
}

impl MockTargetSource {
    pub fn new(targets: Vec<DomainTarget>) -> Self {
        Self {
            targets: Ok(targets),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            targets: Err(error),
        }
    }
}

#[async_trait]
impl TargetSource for MockTargetSource {
    async fn load_targets(&self) -> Result<Vec<DomainTarget>, DomainError> {
        self.targets.clone()
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
