use crate::ports::{AddressResolver, GeoLocator};
use futures::future::join_all;
use nsfinder_domain::{AddressRecord, DomainError, NameServerAddress, NameServerSet};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves host names to addresses and tags every address with its
/// family and country.
///
/// Hosts that fail to resolve are skipped. Addresses whose country lookup
/// fails are kept with the failure recorded on the record.
pub struct ResolveAddressesUseCase {
    resolver: Arc<dyn AddressResolver>,
    geo: Arc<dyn GeoLocator>,
}

impl ResolveAddressesUseCase {
    pub fn new(resolver: Arc<dyn AddressResolver>, geo: Arc<dyn GeoLocator>) -> Self {
        Self { resolver, geo }
    }

    pub async fn name_server_addresses(&self, name_servers: &NameServerSet) -> Vec<NameServerAddress> {
        let mut resolved: Vec<(Arc<str>, IpAddr)> = Vec::new();

        for name_server in name_servers.names() {
            match self.resolver.lookup_host(name_server).await {
                Ok(ips) => {
                    debug!(name_server = %name_server, addresses = ips.len(), "Nameserver resolved");
                    resolved.extend(ips.into_iter().map(|ip| (Arc::clone(name_server), ip)));
                }
                Err(e) => {
                    warn!(name_server = %name_server, error = %e, "Skipping nameserver without addresses");
                }
            }
        }

        let records = join_all(resolved.iter().map(|(_, ip)| self.locate(*ip))).await;

        resolved
            .into_iter()
            .zip(records)
            .map(|((name_server, _), record)| NameServerAddress::new(name_server, record))
            .collect()
    }

    pub async fn host_addresses(&self, host: &str) -> Result<Vec<AddressRecord>, DomainError> {
        let ips = self.resolver.lookup_host(host).await?;
        Ok(join_all(ips.into_iter().map(|ip| self.locate(ip))).await)
    }

    async fn locate(&self, ip: IpAddr) -> AddressRecord {
        match self.geo.country_code(ip).await {
            Ok(code) => {
                let record = AddressRecord::new(ip).with_country(code);
                debug!(ip = %ip, family = record.family.to_str(), country = ?record.country_code, "Address located");
                record
            }
            Err(e) => {
                warn!(ip = %ip, error = %e, "Country lookup failed");
                AddressRecord::new(ip).with_geo_error(e.to_string())
            }
        }
    }
}
