use crate::address::{AddressRecord, NameServerAddress};
use serde::Serialize;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipVerdict {
    NotFound,
    NameServerAddress,
    DomainAddress,
}

impl MembershipVerdict {
    /// Report code: 0 not found, 1 nameserver address, 2 domain address.
    pub fn as_code(&self) -> u8 {
        match self {
            Self::NotFound => 0,
            Self::NameServerAddress => 1,
            Self::DomainAddress => 2,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Which address set holds `candidate`. The nameserver set is checked first.
///
/// IPv4-mapped IPv6 addresses compare equal to their IPv4 form.
pub fn check_membership(
    name_server_ips: &[IpAddr],
    domain_ips: &[IpAddr],
    candidate: &IpAddr,
) -> MembershipVerdict {
    let candidate = candidate.to_canonical();
    let holds = |ips: &[IpAddr]| ips.iter().any(|ip| ip.to_canonical() == candidate);

    if holds(name_server_ips) {
        MembershipVerdict::NameServerAddress
    } else if holds(domain_ips) {
        MembershipVerdict::DomainAddress
    } else {
        MembershipVerdict::NotFound
    }
}

/// Same as [`check_membership`] over the report record types.
pub fn check_records(
    name_server_addresses: &[NameServerAddress],
    domain_addresses: &[AddressRecord],
    candidate: &IpAddr,
) -> MembershipVerdict {
    let ns_ips: Vec<IpAddr> = name_server_addresses.iter().map(|a| a.address.ip).collect();
    let domain_ips: Vec<IpAddr> = domain_addresses.iter().map(|a| a.ip).collect();
    check_membership(&ns_ips, &domain_ips, candidate)
}
