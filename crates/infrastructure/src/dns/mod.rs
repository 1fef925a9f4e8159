pub mod delegation_client;
pub mod message_builder;
pub mod response_parser;
pub mod selection;

pub use delegation_client::UdpDelegationClient;
pub use message_builder::MessageBuilder;
pub use response_parser::ResponseParser;
pub use selection::RandomUpstreamSelector;
