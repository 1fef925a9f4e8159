//! nsfinder domain layer
pub mod address;
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod membership;
pub mod name_servers;
pub mod report;
pub mod target;
pub mod zone_chain;

pub use address::{AddressFamily, AddressRecord, NameServerAddress};
pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::{fqdn, normalize_target};
pub use errors::DomainError;
pub use membership::{check_membership, check_records, MembershipVerdict};
pub use name_servers::{extract_name_servers, DelegationResponse, NameServerSet, ResponseStatus};
pub use report::{DelegationStep, DelegationWalk, DomainReport, MembershipResult};
pub use target::DomainTarget;
pub use zone_chain::ZoneChain;
