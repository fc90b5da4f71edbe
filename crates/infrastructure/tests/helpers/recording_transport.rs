#![allow(dead_code)]

use chicken_dns_application::ports::{
    Datagram, DatagramTransport, ReceiveCallback, SendCompletion,
};
use chicken_dns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory transport: datagrams are delivered by the test and sends are
/// recorded instead of hitting the network.
pub struct RecordingTransport {
    local: SocketAddr,
    callback: Mutex<Option<ReceiveCallback>>,
    sent: Mutex<Vec<Datagram>>,
    closed: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            local: "127.0.0.1:5353".parse().unwrap(),
            callback: Mutex::new(None),
            sent: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// The registered continuation, still callable after the owner is gone.
    pub fn callback(&self) -> Option<ReceiveCallback> {
        self.callback.lock().unwrap().clone()
    }

    pub async fn deliver(&self, payload: Vec<u8>, peer: SocketAddr) -> Result<(), DomainError> {
        let callback = self.callback().expect("no receive callback registered");
        callback(Ok(Datagram::new(payload, peer))).await
    }

    pub async fn deliver_error(&self, error: DomainError) -> Result<(), DomainError> {
        let callback = self.callback().expect("no receive callback registered");
        callback(Err(error)).await
    }

    pub fn sent(&self) -> Vec<Datagram> {
        self.sent.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl DatagramTransport for RecordingTransport {
    fn on_receive(&self, callback: ReceiveCallback) -> Result<(), DomainError> {
        *self.callback.lock().unwrap() = Some(callback);
        Ok(())
    }

    fn send(&self, datagram: Datagram, completion: SendCompletion) {
        let len = datagram.payload.len();
        self.sent.lock().unwrap().push(datagram);
        completion(Ok(len));
    }

    fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        Ok(self.local)
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
