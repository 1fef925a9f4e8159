use nsfinder_domain::NameServerSet;

/// Picks the server used for the next zone of a delegation walk.
pub trait UpstreamSelector: Send + Sync {
    fn select<'a>(&self, name_servers: &'a NameServerSet) -> &'a str;
}

/// Always takes the first (lowest sorted) nameserver.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstUpstreamSelector;

impl UpstreamSelector for FirstUpstreamSelector {
    fn select<'a>(&self, name_servers: &'a NameServerSet) -> &'a str {
        name_servers.names()[0].as_ref()
    }
}
