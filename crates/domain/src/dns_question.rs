use super::RecordType;
use std::sync::Arc;

/// One entry of a query's question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub name: Arc<str>,
    pub qtype: u16,
    pub qclass: u16,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    /// `None` when QTYPE is a code this server does not know by name.
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}
