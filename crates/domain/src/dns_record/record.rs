use super::{RecordClass, RecordType};
use crate::DomainError;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Answers are never cached downstream.
pub const DEFAULT_TTL: u32 = 0;

/// RFC 1035 section 2.3.4.
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Ns(Arc<str>),
    /// RFC 7553 section 4.5. `target` is written between literal `"` bytes.
    Uri {
        priority: u16,
        weight: u16,
        target: Arc<str>,
    },
}

impl RecordData {
    /// RDLENGTH of this data once encoded.
    pub fn wire_len(&self) -> usize {
        match self {
            RecordData::A(_) => 4,
            RecordData::Ns(name) => encoded_name_len(name),
            RecordData::Uri { target, .. } => 4 + target.len() + 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub class: RecordClass,

    pub ttl: u32,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn a(name: impl Into<Arc<str>>, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            class: RecordClass::In,
            ttl: DEFAULT_TTL,
            data: RecordData::A(address),
        }
    }

    pub fn ns(name: impl Into<Arc<str>>, name_server: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::NS,
            class: RecordClass::In,
            ttl: DEFAULT_TTL,
            data: RecordData::Ns(name_server.into()),
        }
    }

    pub fn uri(
        name: impl Into<Arc<str>>,
        priority: u16,
        weight: u16,
        target: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::URI,
            class: RecordClass::Uri,
            ttl: DEFAULT_TTL,
            data: RecordData::Uri {
                priority,
                weight,
                target: target.into(),
            },
        }
    }

    pub fn rd_length(&self) -> usize {
        self.data.wire_len()
    }
}

/// Length of `name` in uncompressed label form, terminator included.
/// A single trailing dot is ignored; the root name (`""`) encodes to one byte.
pub fn encoded_name_len(name: &str) -> usize {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() {
        return 1;
    }
    name.split('.').map(|label| label.len() + 1).sum::<usize>() + 1
}

/// Checks that `name` can be written as a sequence of labels: no empty
/// interior labels, none longer than 63 bytes, at most 255 bytes encoded.
pub fn check_domain_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Ok(());
    }

    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
    }

    if encoded_name_len(trimmed) > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} bytes when encoded",
            name, MAX_NAME_LEN
        )));
    }

    Ok(())
}
