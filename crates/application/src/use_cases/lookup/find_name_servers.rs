use crate::use_cases::{ResolveAddressesUseCase, WalkDelegationUseCase};
use nsfinder_domain::{
    check_records, normalize_target, DomainError, DomainReport, DomainTarget, MembershipResult,
    MembershipVerdict,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Full pipeline for one domain: delegation walk, address resolution and
/// geolocation, then the membership check for the candidate address.
pub struct FindNameServersUseCase {
    walk: WalkDelegationUseCase,
    addresses: ResolveAddressesUseCase,
    bootstrap_server: Arc<str>,
}

impl FindNameServersUseCase {
    pub fn new(
        walk: WalkDelegationUseCase,
        addresses: ResolveAddressesUseCase,
        bootstrap_server: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            walk,
            addresses,
            bootstrap_server: bootstrap_server.into(),
        }
    }

    pub async fn execute(&self, target: &DomainTarget) -> Result<DomainReport, DomainError> {
        let domain = normalize_target(&target.domain)?;

        let walk = self.walk.execute(&domain, &self.bootstrap_server).await?;
        let name_servers = walk
            .name_servers()
            .cloned()
            .ok_or_else(|| DomainError::NoNameServers(domain.clone()))?;

        info!(
            domain = %domain,
            zone = walk.final_zone().unwrap_or("."),
            name_servers = ?name_servers.names(),
            "Nameserver list"
        );

        let name_server_addresses = self.addresses.name_server_addresses(&name_servers).await;

        let domain_addresses = match self.addresses.host_addresses(&domain).await {
            Ok(records) => records,
            Err(e) => {
                warn!(domain = %domain, error = %e, "Domain has no resolvable addresses");
                Vec::new()
            }
        };

        let membership = target.candidate_ip.as_ref().map(|candidate| {
            let verdict = match candidate.trim().parse::<IpAddr>() {
                Ok(ip) => check_records(&name_server_addresses, &domain_addresses, &ip),
                Err(_) => {
                    let error = DomainError::InvalidIpAddress(candidate.to_string());
                    warn!(domain = %domain, error = %error, "Candidate counted as not found");
                    MembershipVerdict::NotFound
                }
            };
            MembershipResult {
                candidate_ip: Arc::clone(candidate),
                verdict,
            }
        });

        let report = DomainReport {
            domain: Arc::from(domain.as_str()),
            search_id: None,
            walk,
            name_server_addresses,
            domain_addresses,
            membership,
        };

        let failures = report.geolocation_failures();
        if failures > 0 {
            warn!(domain = %domain, failures, "Addresses without country");
        }

        Ok(report)
    }
}
