use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Read of {width} bits at bit offset {bit_offset} is outside message length {len}")]
    OutOfRange {
        bit_offset: usize,
        width: usize,
        len: usize,
    },

    #[error("Write needs {required} bytes but message capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("Invalid label type 0x{0:02x}")]
    InvalidLabelType(u8),

    #[error("Compression pointer to offset {offset} is outside message length {len}")]
    InvalidLabelOffset { offset: usize, len: usize },

    #[error("Compression pointers loop after {steps} steps")]
    CompressionLoop { steps: usize },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Host address unavailable: {0}")]
    AddressUnavailable(String),
}
