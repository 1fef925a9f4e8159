//! Adapters for the nsfinder ports: UDP delegation queries, the system
//! resolver, MaxMind country lookups, SQLite persistence and target input.
pub mod database;
pub mod dns;
pub mod geoip;
pub mod input;
pub mod repositories;
pub mod system;
