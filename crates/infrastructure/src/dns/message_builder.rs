//! NS query construction in wire format using `hickory-proto`.

use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nsfinder_domain::config::resolver::LEGACY_UDP_PAYLOAD;
use nsfinder_domain::DomainError;
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds an NS query for `zone` and returns its ID with the wire bytes.
    ///
    /// The RD flag is set even though the query goes straight to a
    /// specific server. A `payload_size` above 512 is advertised through an
    /// EDNS(0) OPT record.
    pub fn build_ns_query(zone: &str, payload_size: u16) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(zone).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid zone '{}': {}", zone, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::NS);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        if payload_size > LEGACY_UDP_PAYLOAD {
            let mut edns = Edns::new();
            edns.set_max_payload(payload_size);
            message.set_edns(edns);
        }

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
