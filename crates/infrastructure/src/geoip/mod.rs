pub mod maxmind;

pub use maxmind::MaxMindCountryLocator;
