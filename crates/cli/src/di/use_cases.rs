use super::Adapters;
use nsfinder_application::use_cases::{
    FindNameServersUseCase, ResolveAddressesUseCase, WalkDelegationUseCase,
};
use nsfinder_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub find_name_servers: Arc<FindNameServersUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters, bootstrap_server: String) -> Self {
        let walk = WalkDelegationUseCase::new(
            adapters.delegation_client.clone(),
            adapters.selector.clone(),
            config.resolver.max_zone_depth,
        );
        let addresses = ResolveAddressesUseCase::new(
            adapters.resolver.clone(),
            adapters.geo.clone(),
        );

        Self {
            find_name_servers: Arc::new(FindNameServersUseCase::new(
                walk,
                addresses,
                bootstrap_server,
            )),
        }
    }
}
