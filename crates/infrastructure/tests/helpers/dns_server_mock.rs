use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::NS;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock answers NS queries for one zone.
#[derive(Clone, Debug)]
pub enum MockZone {
    Answer(Vec<&'static str>),
    Authority(Vec<&'static str>),
    Rcode(ResponseCode),
    /// Never replies.
    Silent,
    /// Replies with a mismatched message ID.
    WrongId,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds to an ephemeral loopback port.
    pub async fn start(zones: Vec<(&'static str, MockZone)>) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let zones: Arc<HashMap<String, MockZone>> = Arc::new(
            zones
                .into_iter()
                .map(|(zone, behaviour)| (zone.to_string(), behaviour))
                .collect(),
        );

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&buf[..len], &zones) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(query: &[u8], zones: &HashMap<String, MockZone>) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();
        let zone = question.name().to_utf8();

        let behaviour = zones
            .get(&zone)
            .cloned()
            .unwrap_or(MockZone::Rcode(ResponseCode::Refused));
        let id = match behaviour {
            MockZone::WrongId => request.id().wrapping_add(1),
            _ => request.id(),
        };

        let mut response = Message::new(id, MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.add_query(question.clone());

        match behaviour {
            MockZone::Answer(names) => {
                response.set_response_code(ResponseCode::NoError);
                for name in names {
                    response.add_answer(Self::ns_record(question.name(), name));
                }
            }
            MockZone::Authority(names) => {
                response.set_response_code(ResponseCode::NoError);
                for name in names {
                    response.add_name_server(Self::ns_record(question.name(), name));
                }
            }
            MockZone::Rcode(code) => {
                response.set_response_code(code);
            }
            MockZone::Silent => return None,
            MockZone::WrongId => {
                response.set_response_code(ResponseCode::NoError);
            }
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        response.emit(&mut encoder).ok()?;
        Some(buf)
    }

    fn ns_record(owner: &Name, target: &str) -> Record {
        let target = Name::from_str(target).expect("valid NS target");
        Record::from_rdata(owner.clone(), 3600, RData::NS(NS(target)))
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
