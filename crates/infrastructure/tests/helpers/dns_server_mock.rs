#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const MOCK_TTL: u32 = 60;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with one A record per address, in the given order.
    Answers(Vec<Ipv4Addr>),
    /// UDP replies with TC set and no answers; TCP replies with the addresses.
    Truncated(Vec<Ipv4Addr>),
    NxDomain,
    /// Reply with a transaction id that does not match the query.
    WrongId,
    /// Never reply.
    Silent,
}

/// UDP + TCP DNS server on 127.0.0.1 serving canned replies.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = Arc::clone(&udp_queries);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::udp_response(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = Self::tcp_response(&behavior, &query) {
                                    let len = (response.len() as u16).to_be_bytes();
                                    let _ = stream.write_all(&len).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    fn udp_response(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        match behavior {
            MockBehavior::Answers(addrs) => build_response(query, [0x81, 0x80], addrs),
            MockBehavior::Truncated(_) => build_response(query, [0x83, 0x80], &[]),
            MockBehavior::NxDomain => build_response(query, [0x81, 0x83], &[]),
            MockBehavior::WrongId => {
                let mut response = build_response(query, [0x81, 0x80], &[])?;
                response[0] ^= 0xff;
                Some(response)
            }
            MockBehavior::Silent => None,
        }
    }

    fn tcp_response(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        match behavior {
            MockBehavior::Truncated(addrs) => build_response(query, [0x81, 0x80], addrs),
            MockBehavior::Silent => None,
            other => Self::udp_response(other, query),
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Echoes the question and appends one compressed A record per address.
pub fn build_response(query: &[u8], flags: [u8; 2], addrs: &[Ipv4Addr]) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.extend_from_slice(&flags);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(addrs.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    for addr in addrs {
        response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&MOCK_TTL.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(&addr.octets());
    }

    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_response_builder() {
        let query = vec![
            0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let response = build_response(&query, [0x81, 0x80], &[Ipv4Addr::new(192, 0, 2, 1)])
            .unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[2], 0x81);
        assert_eq!(response[6..8], [0x00, 0x01]);
        assert_eq!(response[response.len() - 4..], [192, 0, 2, 1]);
    }
}
