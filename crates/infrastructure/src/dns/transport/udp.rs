//! UDP transport for the responder (RFC 1035 §4.2.1).
//!
//! One receive loop per transport. Each datagram is handed to the registered
//! callback and the callback's future is awaited before the next receive.
//! Sends are spawned and never awaited by the loop.

use bytes::Bytes;
use chicken_dns_application::ports::{
    Datagram, DatagramTransport, ReceiveCallback, SendCompletion,
};
use chicken_dns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Larger than any accepted message so oversized datagrams arrive whole and
/// can be rejected instead of silently truncated.
const RECV_BUFFER_LEN: usize = 4096;

const SOCKET_BUFFER_SIZE: usize = 256 * 1024;

struct Registration {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

pub struct UdpTransport {
    socket: Arc<UdpSocket>,
    shutdown: CancellationToken,
    registration: Mutex<Option<Registration>>,
}

impl UdpTransport {
    /// Binds a non-blocking socket on `addr`. Must be called from within a
    /// tokio runtime.
    pub fn bind(addr: SocketAddr) -> Result<Self, DomainError> {
        let socket = create_udp_socket(addr).map_err(|e| {
            DomainError::TransportError(format!("Failed to bind UDP socket on {}: {}", addr, e))
        })?;
        Ok(Self::from_socket(socket))
    }

    pub fn from_socket(socket: UdpSocket) -> Self {
        Self {
            socket: Arc::new(socket),
            shutdown: CancellationToken::new(),
            registration: Mutex::new(None),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl DatagramTransport for UdpTransport {
    fn on_receive(&self, callback: ReceiveCallback) -> Result<(), DomainError> {
        if self.is_closed() {
            return Err(DomainError::TransportError("transport closed".to_string()));
        }

        let mut registration = self
            .registration
            .lock()
            .map_err(|_| DomainError::TransportError("registration lock poisoned".to_string()))?;

        if let Some(previous) = registration.take() {
            previous.cancel.cancel();
        }

        let cancel = self.shutdown.child_token();
        let task = tokio::spawn(receive_loop(
            Arc::clone(&self.socket),
            callback,
            cancel.clone(),
        ));
        *registration = Some(Registration { cancel, task });

        Ok(())
    }

    fn send(&self, datagram: Datagram, completion: SendCompletion) {
        let socket = Arc::clone(&self.socket);
        tokio::spawn(async move {
            let result = socket
                .send_to(&datagram.payload, datagram.peer)
                .await
                .map_err(|e| {
                    DomainError::TransportError(format!(
                        "Failed to send to {}: {}",
                        datagram.peer, e
                    ))
                });
            completion(result);
        });
    }

    fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::TransportError(e.to_string()))
    }

    fn close(&self) {
        if !self.shutdown.is_cancelled() {
            debug!("Closing UDP transport");
            self.shutdown.cancel();
        }
    }
}

impl Drop for UdpTransport {
    fn drop(&mut self) {
        self.shutdown.cancel();
        if let Ok(mut registration) = self.registration.lock() {
            if let Some(registration) = registration.take() {
                registration.task.abort();
            }
        }
    }
}

async fn receive_loop(
    socket: Arc<UdpSocket>,
    callback: ReceiveCallback,
    cancel: CancellationToken,
) {
    let mut recv_buf = vec![0u8; RECV_BUFFER_LEN];

    loop {
        let received = tokio::select! {
            _ = cancel.cancelled() => break,
            received = socket.recv_from(&mut recv_buf) => received,
        };

        let datagram = match received {
            Ok((n, peer)) => Ok(Datagram::new(Bytes::copy_from_slice(&recv_buf[..n]), peer)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => Err(DomainError::TransportError(format!("UDP recv error: {}", e))),
        };

        tokio::select! {
            _ = cancel.cancelled() => break,
            handled = callback(datagram) => {
                if let Err(e) = handled {
                    warn!(error = %e, "Datagram handling failed");
                }
            }
        }
    }

    info!("UDP receive loop stopped");
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
