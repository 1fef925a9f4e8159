use nsfinder_application::ports::{AddressResolver, DelegationClient, GeoLocator, UpstreamSelector};
use nsfinder_domain::Config;
use nsfinder_infrastructure::dns::{RandomUpstreamSelector, UdpDelegationClient};
use nsfinder_infrastructure::geoip::MaxMindCountryLocator;
use nsfinder_infrastructure::system::SystemAddressResolver;
use std::sync::Arc;

pub struct Adapters {
    pub resolver: Arc<dyn AddressResolver>,
    pub delegation_client: Arc<dyn DelegationClient>,
    pub selector: Arc<dyn UpstreamSelector>,
    pub geo: Arc<dyn GeoLocator>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        let resolver: Arc<dyn AddressResolver> =
            Arc::new(SystemAddressResolver::new(config.resolver.lookup_timeout()));

        Self {
            delegation_client: Arc::new(UdpDelegationClient::new(
                resolver.clone(),
                &config.resolver,
            )),
            resolver,
            selector: Arc::new(RandomUpstreamSelector),
            geo: Arc::new(MaxMindCountryLocator::from_config(&config.geoip)),
        }
    }
}
