use crate::address::{AddressRecord, NameServerAddress};
use crate::membership::MembershipVerdict;
use crate::name_servers::NameServerSet;
use serde::Serialize;
use std::sync::Arc;

/// One query of the delegation walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegationStep {
    pub zone: Arc<str>,
    pub server: Arc<str>,
    pub name_servers: NameServerSet,
}

/// Result of walking the delegation chain for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelegationWalk {
    pub domain: Arc<str>,
    pub steps: Vec<DelegationStep>,
}

impl DelegationWalk {
    /// Nameservers of the last step, which is the walk's output.
    pub fn name_servers(&self) -> Option<&NameServerSet> {
        self.steps.last().map(|s| &s.name_servers)
    }

    pub fn final_zone(&self) -> Option<&str> {
        self.steps.last().map(|s| s.zone.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipResult {
    pub candidate_ip: Arc<str>,
    pub verdict: MembershipVerdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    pub domain: Arc<str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_id: Option<i64>,
    pub walk: DelegationWalk,
    pub name_server_addresses: Vec<NameServerAddress>,
    pub domain_addresses: Vec<AddressRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<MembershipResult>,
}

impl DomainReport {
    pub fn name_servers(&self) -> Option<&NameServerSet> {
        self.walk.name_servers()
    }

    pub fn geolocation_failures(&self) -> usize {
        self.name_server_addresses
            .iter()
            .map(|a| &a.address)
            .chain(self.domain_addresses.iter())
            .filter(|a| a.geo_error.is_some())
            .count()
    }
}
