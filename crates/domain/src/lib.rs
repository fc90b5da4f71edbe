//! Chicken DNS Domain Layer
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod response_code;

pub use config::{
    AuthorityConfig, CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, ServerConfig,
};
pub use dns_question::DnsQuestion;
pub use dns_record::{
    check_domain_name, encoded_name_len, DnsRecord, RecordClass, RecordData, RecordType,
    DEFAULT_TTL, MAX_LABEL_LEN, MAX_NAME_LEN,
};
pub use errors::DomainError;
pub use response_code::ResponseCode;
