use chicken_dns_infrastructure::dns::{DnsResponder, DnsServerHandler, UdpTransport};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub fn start_dns_server(
    socket_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
) -> anyhow::Result<Arc<DnsResponder>> {
    info!(bind_address = %socket_addr, "Starting DNS server");

    let transport = Arc::new(UdpTransport::bind(socket_addr)?);
    let responder = DnsResponder::start(handler, transport)?;

    info!("DNS server ready on {}", responder.local_addr()?);
    Ok(responder)
}
