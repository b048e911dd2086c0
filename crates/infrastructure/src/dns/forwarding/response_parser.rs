use super::record_type_map::RecordTypeMapper;
use ferrous_lookup_domain::{AnswerRecord, DomainError};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use std::fmt::Write;
use tracing::debug;

const HEADER_LEN: usize = 12;
const FLAG_QR: u8 = 0x80;
const FLAG_TC: u8 = 0x02;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    pub truncated: bool,

    pub response_code: &'static str,

    /// ANSWER section in wire order.
    pub answers: Vec<AnswerRecord>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes an upstream reply to the query identified by `expected_id`.
    ///
    /// A truncated reply whose body cannot be decoded is still reported
    /// (with no answers) so the caller can retry over TCP.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<ParsedResponse, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "message too short: {} bytes",
                response_bytes.len()
            )));
        }

        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);
        if id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "id mismatch: expected {}, got {}",
                expected_id, id
            )));
        }

        let flags = response_bytes[2];
        if flags & FLAG_QR == 0 {
            return Err(DomainError::InvalidDnsResponse(
                "message is not a response".to_string(),
            ));
        }
        let truncated = flags & FLAG_TC != 0;

        let message = match Message::from_vec(response_bytes) {
            Ok(message) => message,
            Err(e) if truncated => {
                debug!(error = %e, "Truncated response body not decodable");
                return Ok(ParsedResponse {
                    truncated,
                    response_code: "NOERROR",
                    answers: Vec::new(),
                });
            }
            Err(e) => {
                return Err(DomainError::InvalidDnsResponse(e.to_string()));
            }
        };

        let response_code = Self::rcode_to_status(message.response_code());
        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_answer).collect();

        debug!(
            rcode = response_code,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(ParsedResponse {
            truncated,
            response_code,
            answers,
        })
    }

    /// Reduces a record to its presentation fields.
    pub fn to_answer(record: &Record) -> AnswerRecord {
        let record_type = record.record_type();
        if RecordTypeMapper::from_hickory(record_type).is_none() {
            debug!(code = u16::from(record_type), "Answer with unregistered type");
        }

        AnswerRecord::new(
            record.name().to_string(),
            record.ttl(),
            record.dns_class().to_string(),
            u16::from(record_type),
            Self::presentation_rdata(record.data()),
        )
    }

    /// Zone-file text of a record's data. Character-strings are quoted and
    /// opaque data uses the RFC 3597 generic form; everything else relies on
    /// hickory's `Display`.
    pub fn presentation_rdata(data: &RData) -> String {
        match data {
            RData::TXT(txt) => txt
                .txt_data()
                .iter()
                .map(|s| quote_character_string(s))
                .collect::<Vec<_>>()
                .join(" "),
            RData::NULL(null) | RData::Unknown { rdata: null, .. } => {
                generic_rdata(null.anything())
            }
            other => other.to_string(),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

fn quote_character_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(char::from(b));
            }
            0x20..=0x7e => out.push(char::from(b)),
            _ => {
                let _ = write!(out, "\\{:03}", b);
            }
        }
    }
    out.push('"');
    out
}

fn generic_rdata(bytes: &[u8]) -> String {
    let mut out = format!("\\# {}", bytes.len());
    if !bytes.is_empty() {
        out.push(' ');
        for b in bytes {
            let _ = write!(out, "{:02x}", b);
        }
    }
    out
}
