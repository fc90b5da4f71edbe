use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    In,
    Any,
    /// Class value carried by URI answers. Not an IANA-assigned class; it is
    /// what common resolvers emit alongside RFC 7553 records.
    Uri,
}

impl RecordClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::In => 1,
            RecordClass::Any => 255,
            RecordClass::Uri => 256,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordClass::In),
            255 => Some(RecordClass::Any),
            256 => Some(RecordClass::Uri),
            _ => None,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::In => write!(f, "IN"),
            RecordClass::Any => write!(f, "ANY"),
            RecordClass::Uri => write!(f, "CLASS256"),
        }
    }
}
