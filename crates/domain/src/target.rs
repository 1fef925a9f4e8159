use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One batch entry: a domain, an optional checksum carried through to
/// storage, and an optional address to test for membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTarget {
    pub domain: Arc<str>,
    pub crc: Option<i64>,
    pub candidate_ip: Option<Arc<str>>,
}

impl DomainTarget {
    pub fn new(domain: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            crc: None,
            candidate_ip: None,
        }
    }

    pub fn with_crc(mut self, crc: i64) -> Self {
        self.crc = Some(crc);
        self
    }

    pub fn with_candidate(mut self, ip: impl Into<Arc<str>>) -> Self {
        self.candidate_ip = Some(ip.into());
        self
    }
}
