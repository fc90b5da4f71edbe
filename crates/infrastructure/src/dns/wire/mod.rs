//! RFC 1035 wire format over a fixed-capacity buffer.

mod buffer;
mod header;
mod label;
mod message;
mod reader;

pub use buffer::{MessageBuffer, MAX_MESSAGE_LEN};
pub use header::{HeaderField, HEADER_BITS, HEADER_LEN};
pub use label::{decode_name, decode_wire_name, encode_name, WireName};
pub use message::DnsMessage;
pub use reader::{MessageReader, ParsedRecord, WireQuestion};
