use super::forwarding::{MessageBuilder, ParsedResponse, ResponseParser};
use super::transport::{DnsTransport, TcpTransport, UdpTransport};
use async_trait::async_trait;
use ferrous_lookup_application::ports::DnsResolver;
use ferrous_lookup_domain::config::UpstreamConfig;
use ferrous_lookup_domain::{DnsQuery, DnsResolution, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, instrument};

/// Resolver bound to a single upstream server.
///
/// Sends the question over UDP and repeats it over TCP when the reply comes
/// back truncated. The whole exchange, both legs included, is bounded by
/// `timeout`. Holds no mutable state, so one instance serves any number of
/// concurrent lookups.
pub struct UpstreamResolver {
    server: SocketAddr,
    timeout: Duration,
    udp: UdpTransport,
    tcp: TcpTransport,
}

impl UpstreamResolver {
    pub fn new(server: SocketAddr, timeout: Duration) -> Self {
        Self {
            server,
            timeout,
            udp: UdpTransport::new(server),
            tcp: TcpTransport::new(server),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(config.address, config.timeout())
    }

    async fn exchange(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query_with_id(query)?;

        let (parsed, protocol_used) = self
            .send_and_parse(&self.udp, &request_bytes, id)
            .await?;

        let (parsed, protocol_used) = if parsed.truncated {
            debug!(
                domain = %query.domain,
                server = %self.server,
                "Truncated UDP response, retrying over TCP"
            );
            self.send_and_parse(&self.tcp, &request_bytes, id).await?
        } else {
            (parsed, protocol_used)
        };

        Ok(DnsResolution {
            answers: parsed.answers,
            response_code: parsed.response_code,
            protocol_used,
            upstream_server: self.server.to_string(),
        })
    }

    async fn send_and_parse(
        &self,
        transport: &dyn DnsTransport,
        request_bytes: &[u8],
        id: u16,
    ) -> Result<(ParsedResponse, &'static str), DomainError> {
        debug!(
            server = %self.server,
            protocol = transport.protocol_name(),
            id = id,
            "Sending DNS query"
        );
        let response = transport.send(request_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, id)?;
        Ok((parsed, response.protocol_used))
    }
}

#[async_trait]
impl DnsResolver for UpstreamResolver {
    #[instrument(
        skip(self, query),
        fields(domain = %query.domain, record_type = %query.record_type)
    )]
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        tokio::time::timeout(self.timeout, self.exchange(query))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server.to_string(),
            })?
    }

    fn upstream(&self) -> String {
        self.server.to_string()
    }
}
