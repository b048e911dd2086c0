//! Mapping between `ferrous_lookup_domain::RecordType` and `hickory_proto::rr::RecordType`
//!
//! Goes through the numeric code, so every entry of the domain table maps,
//! including types hickory only knows as `Unknown(code)`.

use ferrous_lookup_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Convert hickory RecordType → domain RecordType
    ///
    /// Returns `None` for codes outside the registered table.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
