mod answer;
mod record_type;

pub use answer::{AnswerRecord, DnsResolution};
pub use record_type::RecordType;
