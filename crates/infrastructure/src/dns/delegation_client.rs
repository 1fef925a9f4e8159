//! NS queries over UDP to a single server (RFC 1035 §4.2.1).
//!
//! One query, one datagram, no retry and no TCP fallback. A truncated
//! answer is parsed as received.

use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use async_trait::async_trait;
use nsfinder_application::ports::{AddressResolver, DelegationClient};
use nsfinder_domain::config::ResolverConfig;
use nsfinder_domain::{DelegationResponse, DomainError};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub struct UdpDelegationClient {
    host_resolver: Arc<dyn AddressResolver>,
    port: u16,
    timeout: Duration,
    payload_size: u16,
}

impl UdpDelegationClient {
    /// `host_resolver` turns host-name servers into addresses before dialing.
    pub fn new(host_resolver: Arc<dyn AddressResolver>, config: &ResolverConfig) -> Self {
        Self {
            host_resolver,
            port: config.port,
            timeout: config.query_timeout(),
            payload_size: config.udp_payload_size,
        }
    }

    async fn server_addr(&self, zone: &str, server: &str) -> Result<SocketAddr, DomainError> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let addresses = self
            .host_resolver
            .lookup_host(server)
            .await
            .map_err(|e| DomainError::Transport {
                server: server.to_string(),
                reason: format!("cannot resolve server for zone {}: {}", zone, e),
            })?;

        // Prefer IPv4: IPv6 routes to remote servers are often missing.
        let ip = addresses
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addresses.first())
            .copied()
            .ok_or_else(|| DomainError::Transport {
                server: server.to_string(),
                reason: "server name has no addresses".to_string(),
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }

    async fn exchange(
        &self,
        zone: &str,
        server: &str,
        server_addr: SocketAddr,
        query: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let bind_addr = if server_addr.is_ipv4() {
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
        } else {
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
        };

        let transport_err = |reason: String| DomainError::Transport {
            server: server.to_string(),
            reason,
        };
        let timeout_err = || DomainError::QueryTimeout {
            zone: zone.to_string(),
            server: server.to_string(),
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| transport_err(format!("failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send_to(query, server_addr))
            .await
            .map_err(|_| timeout_err())?
            .map_err(|e| transport_err(format!("failed to send to {}: {}", server_addr, e)))?;

        debug!(server = %server_addr, zone = %zone, bytes_sent, "NS query sent");

        let mut recv_buf = vec![0u8; usize::from(self.payload_size)];
        let deadline = tokio::time::Instant::now() + self.timeout;

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| timeout_err())?
                    .map_err(|e| {
                        transport_err(format!("failed to receive from {}: {}", server_addr, e))
                    })?;

            if from_addr.ip() != server_addr.ip() {
                warn!(
                    expected = %server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source, ignoring"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(server = %server_addr, bytes_received, "NS response received");
            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl DelegationClient for UdpDelegationClient {
    async fn query_ns(&self, zone: &str, server: &str) -> Result<DelegationResponse, DomainError> {
        let server_addr = self.server_addr(zone, server).await?;
        let (query_id, query) = MessageBuilder::build_ns_query(zone, self.payload_size)?;

        let response_bytes = self.exchange(zone, server, server_addr, &query).await?;
        let message = ResponseParser::parse(&response_bytes)?;

        if message.id() != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {} from {}",
                message.id(),
                query_id,
                server
            )));
        }

        let response = ResponseParser::to_delegation(&message);
        if !response.status.is_acceptable() {
            return Err(DomainError::UnacceptableResponse {
                zone: zone.to_string(),
                server: server.to_string(),
                rcode: response.status.as_str().to_string(),
            });
        }

        Ok(response)
    }
}
