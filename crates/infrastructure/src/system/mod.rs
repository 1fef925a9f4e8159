pub mod platform_resolver;
pub mod resolv_conf;

pub use platform_resolver::SystemAddressResolver;
pub use resolv_conf::{bootstrap_server, ResolvConf};
