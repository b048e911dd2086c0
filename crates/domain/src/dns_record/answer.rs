use super::RecordType;
use std::fmt;

/// One resource record from the ANSWER section, already reduced to its
/// presentation fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,

    pub ttl: u32,

    pub class: String,

    /// Raw type code as received; may be a code outside the known table.
    pub record_type: u16,

    pub data: String,
}

impl AnswerRecord {
    pub fn new(
        name: impl Into<String>,
        ttl: u32,
        class: impl Into<String>,
        record_type: u16,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ttl,
            class: class.into(),
            record_type,
            data: data.into(),
        }
    }

    pub fn known_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.record_type)
    }
}

/// Zone file presentation line: `name TTL class type rdata`, tab separated.
impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.class,
            RecordType::presentation(self.record_type),
            self.data
        )
    }
}

/// Outcome of a single upstream exchange.
#[derive(Debug, Clone)]
pub struct DnsResolution {
    /// Answer records in the order the upstream returned them.
    pub answers: Vec<AnswerRecord>,

    pub response_code: &'static str,

    pub protocol_used: &'static str,

    pub upstream_server: String,
}

impl DnsResolution {
    pub fn new(answers: Vec<AnswerRecord>) -> Self {
        Self {
            answers,
            response_code: "NOERROR",
            protocol_used: "UDP",
            upstream_server: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// One presentation line per answer, each terminated by a newline.
    pub fn render(&self) -> String {
        let mut body = String::new();
        for answer in &self.answers {
            body.push_str(&answer.to_string());
            body.push('\n');
        }
        body
    }
}
