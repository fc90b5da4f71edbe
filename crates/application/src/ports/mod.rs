mod host_address;
mod transport;

pub use host_address::HostAddressProvider;
pub use transport::{Datagram, DatagramTransport, ReceiveCallback, SendCompletion};
