mod address_resolver;
mod delegation_client;
mod geo_locator;
mod search_repository;
mod target_source;
mod upstream_selector;

pub use address_resolver::AddressResolver;
pub use delegation_client::DelegationClient;
pub use geo_locator::GeoLocator;
pub use search_repository::SearchRepository;
pub use target_source::TargetSource;
pub use upstream_selector::{FirstUpstreamSelector, UpstreamSelector};
