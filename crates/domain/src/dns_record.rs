mod record;
mod record_class;
mod record_type;

pub use record::{
    check_domain_name, encoded_name_len, DnsRecord, RecordData, DEFAULT_TTL, MAX_LABEL_LEN,
    MAX_NAME_LEN,
};
pub use record_class::RecordClass;
pub use record_type::RecordType;
