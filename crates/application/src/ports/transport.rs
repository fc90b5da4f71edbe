use bytes::Bytes;
use chicken_dns_domain::DomainError;
use futures::future::BoxFuture;
use std::net::SocketAddr;
use std::sync::Arc;

/// A raw datagram and the remote end it came from or goes to.
#[derive(Debug, Clone)]
pub struct Datagram {
    pub payload: Bytes,
    pub peer: SocketAddr,
}

impl Datagram {
    pub fn new(payload: impl Into<Bytes>, peer: SocketAddr) -> Self {
        Self {
            payload: payload.into(),
            peer,
        }
    }
}

/// Invoked once per received datagram, or with the receive error. The
/// transport awaits the returned future before receiving the next datagram.
pub type ReceiveCallback = Arc<
    dyn Fn(Result<Datagram, DomainError>) -> BoxFuture<'static, Result<(), DomainError>>
        + Send
        + Sync,
>;

/// Advisory notification once a send finished; carries the bytes written.
pub type SendCompletion = Box<dyn FnOnce(Result<usize, DomainError>) + Send>;

pub trait DatagramTransport: Send + Sync {
    /// Registers the receive continuation. A transport holds at most one;
    /// registering again replaces it.
    fn on_receive(&self, callback: ReceiveCallback) -> Result<(), DomainError>;

    /// Queues `datagram` for sending. Never retried.
    fn send(&self, datagram: Datagram, completion: SendCompletion);

    fn local_addr(&self) -> Result<SocketAddr, DomainError>;

    /// Stops receiving. Sends already queued may still complete.
    fn close(&self);
}
