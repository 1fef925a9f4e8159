use crate::DomainError;
use serde::Serialize;
use std::sync::Arc;

/// Status of a delegation answer as far as the walk cares about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    NoError,
    NxDomain,
    Other(String),
}

impl ResponseStatus {
    pub fn is_acceptable(&self) -> bool {
        matches!(self, Self::NoError | Self::NxDomain)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::NoError => "NOERROR",
            Self::NxDomain => "NXDOMAIN",
            Self::Other(code) => code,
        }
    }
}

/// NS targets found in one response, split by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationResponse {
    pub status: ResponseStatus,
    pub answer_ns: Vec<Arc<str>>,
    pub authority_ns: Vec<Arc<str>>,
}

impl DelegationResponse {
    pub fn new(status: ResponseStatus) -> Self {
        Self {
            status,
            answer_ns: Vec::new(),
            authority_ns: Vec::new(),
        }
    }

    pub fn with_answers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.answer_ns
            .extend(names.into_iter().map(|n| Arc::from(n.as_ref())));
        self
    }

    pub fn with_authority<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.authority_ns
            .extend(names.into_iter().map(|n| Arc::from(n.as_ref())));
        self
    }
}

/// Non-empty, sorted set of nameserver host names for one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameServerSet {
    names: Vec<Arc<str>>,
}

impl NameServerSet {
    /// Sorts and deduplicates `names`; `None` when nothing is left.
    pub fn new(mut names: Vec<Arc<str>>) -> Option<Self> {
        names.sort();
        names.dedup();
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    pub fn names(&self) -> &[Arc<str>] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.as_ref() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_ref())
    }
}

/// Nameservers a response asserts for `zone`.
///
/// Answer-section NS records win; the authority section is only consulted
/// when the answer carries none (a referral).
pub fn extract_name_servers(
    response: &DelegationResponse,
    zone: &str,
) -> Result<NameServerSet, DomainError> {
    let source = if response.answer_ns.is_empty() {
        &response.authority_ns
    } else {
        &response.answer_ns
    };

    NameServerSet::new(source.clone()).ok_or_else(|| DomainError::NoNameServers(zone.to_string()))
}
