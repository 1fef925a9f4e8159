use crate::domain_name::split_labels;
use std::sync::Arc;

/// Zones from the root down to a fully-qualified domain.
///
/// For `a.b.example.com.` the chain is
/// `[".", "com.", "example.com.", "b.example.com.", "a.b.example.com."]`.
/// The input must already carry its trailing root label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneChain {
    zones: Vec<Arc<str>>,
}

impl ZoneChain {
    pub fn from_fqdn(domain: &str) -> Self {
        let labels = split_labels(domain);
        let mut zones: Vec<Arc<str>> = Vec::with_capacity(labels.len() + 1);
        zones.push(Arc::from("."));

        let mut assembled = String::new();
        for label in labels.iter().rev() {
            assembled = format!("{}.{}", label, assembled);
            zones.push(Arc::from(assembled.as_str()));
        }

        Self { zones }
    }

    pub fn zones(&self) -> &[Arc<str>] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn target(&self) -> &str {
        self.zones.last().map(|z| z.as_ref()).unwrap_or(".")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|z| z.as_ref())
    }

    /// Zones that may be queried when descent stops after `max_depth`
    /// delegation hops below the root.
    pub fn capped(&self, max_depth: usize) -> impl Iterator<Item = &str> {
        self.iter().take(max_depth.saturating_add(1))
    }
}
