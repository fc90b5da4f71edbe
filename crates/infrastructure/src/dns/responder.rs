use crate::dns::server::DnsServerHandler;
use chicken_dns_application::ports::{Datagram, DatagramTransport, ReceiveCallback};
use chicken_dns_domain::DomainError;
use futures::FutureExt;
use std::net::SocketAddr;
use std::sync::{Arc, Weak};
use tracing::{debug, info, warn};

/// Connects a [`DnsServerHandler`] to a datagram transport.
///
/// The responder owns the transport. The receive continuation registered on
/// the transport only holds a weak reference back, so dropping the responder
/// releases the transport and any datagram still in flight is skipped.
pub struct DnsResponder {
    handler: Arc<DnsServerHandler>,
    transport: Arc<dyn DatagramTransport>,
}

impl DnsResponder {
    pub fn start(
        handler: Arc<DnsServerHandler>,
        transport: Arc<dyn DatagramTransport>,
    ) -> Result<Arc<Self>, DomainError> {
        let responder = Arc::new(Self {
            handler,
            transport: Arc::clone(&transport),
        });

        transport.on_receive(receive_callback(Arc::downgrade(&responder)))?;

        match transport.local_addr() {
            Ok(addr) => info!(local_addr = %addr, "DNS responder started"),
            Err(_) => info!("DNS responder started"),
        }

        Ok(responder)
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.transport.local_addr()
    }

    pub fn close(&self) {
        self.transport.close();
    }

    async fn on_datagram(
        &self,
        received: Result<Datagram, DomainError>,
    ) -> Result<(), DomainError> {
        let datagram = match received {
            Ok(datagram) => datagram,
            Err(e) => {
                warn!(error = %e, "Receive failed");
                return Ok(());
            }
        };

        let Some(reply) = self.handler.handle_datagram(&datagram.payload).await else {
            return Ok(());
        };

        let peer = datagram.peer;
        self.transport.send(
            Datagram::new(reply.into_bytes(), peer),
            Box::new(move |sent| match sent {
                Ok(bytes) => debug!(peer = %peer, bytes, "Reply sent"),
                Err(e) => warn!(peer = %peer, error = %e, "Reply send failed"),
            }),
        );

        Ok(())
    }
}

impl Drop for DnsResponder {
    fn drop(&mut self) {
        self.transport.close();
    }
}

fn receive_callback(responder: Weak<DnsResponder>) -> ReceiveCallback {
    Arc::new(move |received: Result<Datagram, DomainError>| {
        let responder = responder.clone();
        async move {
            match responder.upgrade() {
                Some(responder) => responder.on_datagram(received).await,
                None => {
                    debug!("Responder gone, skipping datagram");
                    Ok(())
                }
            }
        }
        .boxed()
    })
}
