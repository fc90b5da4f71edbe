pub mod responder;
pub mod server;
pub mod transport;
pub mod wire;

pub use responder::DnsResponder;
pub use server::DnsServerHandler;
pub use transport::UdpTransport;
