use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use nsfinder_domain::{DelegationResponse, DomainError, ResponseStatus};
use std::sync::Arc;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })
    }

    /// NS targets of the answer and authority sections, lowercased.
    pub fn to_delegation(message: &Message) -> DelegationResponse {
        let status = Self::status(message.response_code());
        let answer_ns = Self::ns_targets(message.answers());
        let authority_ns = Self::ns_targets(message.name_servers());

        debug!(
            rcode = %status.as_str(),
            answer_ns = answer_ns.len(),
            authority_ns = authority_ns.len(),
            truncated = message.truncated(),
            "Delegation response parsed"
        );

        DelegationResponse {
            status,
            answer_ns,
            authority_ns,
        }
    }

    pub fn status(rcode: ResponseCode) -> ResponseStatus {
        match rcode {
            ResponseCode::NoError => ResponseStatus::NoError,
            ResponseCode::NXDomain => ResponseStatus::NxDomain,
            other => ResponseStatus::Other(Self::rcode_to_status(other)),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> String {
        match rcode {
            ResponseCode::NoError => "NOERROR".to_string(),
            ResponseCode::NXDomain => "NXDOMAIN".to_string(),
            ResponseCode::ServFail => "SERVFAIL".to_string(),
            ResponseCode::Refused => "REFUSED".to_string(),
            ResponseCode::NotImp => "NOTIMP".to_string(),
            ResponseCode::FormErr => "FORMERR".to_string(),
            other => format!("RCODE{}", u16::from(other)),
        }
    }

    fn ns_targets(records: &[Record]) -> Vec<Arc<str>> {
        records
            .iter()
            .filter_map(|record| match record.data() {
                RData::NS(ns) => Some(Arc::from(ns.0.to_utf8().to_ascii_lowercase().as_str())),
                _ => None,
            })
            .collect()
    }
}
