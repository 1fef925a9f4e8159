use nsfinder_application::ports::UpstreamSelector;
use nsfinder_domain::NameServerSet;

/// Uniformly random pick among the nameservers of the last step.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUpstreamSelector;

impl UpstreamSelector for RandomUpstreamSelector {
    fn select<'a>(&self, name_servers: &'a NameServerSet) -> &'a str {
        let index = fastrand::usize(..name_servers.len());
        name_servers.names()[index].as_ref()
    }
}
