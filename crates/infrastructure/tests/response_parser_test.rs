use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use nsfinder_domain::{extract_name_servers, ResponseStatus};
use nsfinder_infrastructure::dns::ResponseParser;
use std::net::Ipv4Addr;
use std::str::FromStr;

fn ns(owner: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_str(owner).unwrap(),
        172800,
        RData::NS(NS(Name::from_str(target).unwrap())),
    )
}

fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

#[test]
fn test_referral_with_glue() {
    let mut message = Message::new(7, MessageType::Response, OpCode::Query);
    message.set_response_code(ResponseCode::NoError);
    message.add_name_server(ns("example.com.", "NS2.Example.com."));
    message.add_name_server(ns("example.com.", "ns1.example.com."));
    message.add_additional(Record::from_rdata(
        Name::from_str("ns1.example.com.").unwrap(),
        172800,
        RData::A(A(Ipv4Addr::new(192, 0, 2, 1))),
    ));

    let parsed = ResponseParser::parse(&encode(&message)).unwrap();
    let response = ResponseParser::to_delegation(&parsed);

    assert_eq!(response.status, ResponseStatus::NoError);
    assert!(response.answer_ns.is_empty());

    let set = extract_name_servers(&response, "example.com.").unwrap();
    assert_eq!(set.names().len(), 2);
    assert_eq!(set.names()[0].as_ref(), "ns1.example.com.");
    assert_eq!(set.names()[1].as_ref(), "ns2.example.com.");
}

#[test]
fn test_non_ns_answers_ignored() {
    let mut message = Message::new(9, MessageType::Response, OpCode::Query);
    message.add_answer(Record::from_rdata(
        Name::from_str("example.com.").unwrap(),
        300,
        RData::A(A(Ipv4Addr::new(198, 51, 100, 10))),
    ));

    let response = ResponseParser::to_delegation(&message);

    assert!(response.answer_ns.is_empty());
    assert!(response.authority_ns.is_empty());
}

#[test]
fn test_status_mapping() {
    assert_eq!(ResponseParser::status(ResponseCode::NoError), ResponseStatus::NoError);
    assert_eq!(ResponseParser::status(ResponseCode::NXDomain), ResponseStatus::NxDomain);
    assert_eq!(
        ResponseParser::status(ResponseCode::Refused),
        ResponseStatus::Other("REFUSED".to_string())
    );
    assert!(!ResponseParser::status(ResponseCode::ServFail).is_acceptable());
}

#[test]
fn test_garbage_is_rejected() {
    assert!(ResponseParser::parse(&[0x00, 0x01, 0x02]).is_err());
}
