use crate::ports::{DelegationClient, UpstreamSelector};
use nsfinder_domain::domain_name::is_root;
use nsfinder_domain::{
    extract_name_servers, fqdn, DelegationStep, DelegationWalk, DomainError, ZoneChain,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Walks the delegation chain of a domain, one zone at a time.
///
/// Starting at the root with the bootstrap server, each zone is queried
/// for NS records at the server picked from the previous zone's
/// nameservers. Descent stops after `max_depth` hops below the root or
/// at the domain itself, whichever comes first. Any failed step aborts
/// the walk; no partial nameserver list is returned.
pub struct WalkDelegationUseCase {
    client: Arc<dyn DelegationClient>,
    selector: Arc<dyn UpstreamSelector>,
    max_depth: usize,
}

impl WalkDelegationUseCase {
    pub fn new(
        client: Arc<dyn DelegationClient>,
        selector: Arc<dyn UpstreamSelector>,
        max_depth: usize,
    ) -> Self {
        Self {
            client,
            selector,
            max_depth,
        }
    }

    pub async fn execute(
        &self,
        domain: &str,
        bootstrap_server: &str,
    ) -> Result<DelegationWalk, DomainError> {
        let domain = fqdn(domain);
        let chain = ZoneChain::from_fqdn(&domain);

        let mut steps = Vec::with_capacity(chain.len().min(self.max_depth.saturating_add(1)));
        let mut server: Arc<str> = Arc::from(bootstrap_server);

        for zone in chain.capped(self.max_depth) {
            if !is_root(zone) {
                info!(zone = %zone, server = %server, "Finding nameservers for zone using parent nameserver");
            }

            let response = self.client.query_ns(zone, &server).await.map_err(|e| {
                warn!(zone = %zone, server = %server, error = %e, "Query failed");
                e
            })?;

            let name_servers = extract_name_servers(&response, zone).map_err(|e| {
                warn!(zone = %zone, server = %server, status = %response.status.as_str(), "No nameservers in response");
                e
            })?;

            let next: Arc<str> = Arc::from(self.selector.select(&name_servers));
            debug!(
                zone = %zone,
                name_servers = name_servers.len(),
                next = %next,
                "Picked nameserver for the next zone"
            );

            steps.push(DelegationStep {
                zone: Arc::from(zone),
                server,
                name_servers,
            });
            server = next;
        }

        Ok(DelegationWalk {
            domain: Arc::from(domain.as_str()),
            steps,
        })
    }
}
