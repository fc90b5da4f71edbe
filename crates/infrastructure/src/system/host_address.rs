use async_trait::async_trait;
use chicken_dns_application::ports::HostAddressProvider;
use chicken_dns_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tracing::debug;

/// Any routable address works; nothing is sent to it.
const DEFAULT_PROBE: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)), 53);

/// Answers with a fixed address taken from configuration.
pub struct StaticAddressProvider {
    address: Ipv4Addr,
}

impl StaticAddressProvider {
    pub fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }
}

#[async_trait]
impl HostAddressProvider for StaticAddressProvider {
    async fn ipv4_address(&self) -> Result<Ipv4Addr, DomainError> {
        Ok(self.address)
    }
}

/// Reports the local IPv4 address the kernel would route through towards
/// `probe`, looked up on every call so address changes are picked up.
pub struct RouteAddressProvider {
    probe: SocketAddr,
}

impl RouteAddressProvider {
    pub fn new(probe: SocketAddr) -> Self {
        Self { probe }
    }
}

impl Default for RouteAddressProvider {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE)
    }
}

#[async_trait]
impl HostAddressProvider for RouteAddressProvider {
    async fn ipv4_address(&self) -> Result<Ipv4Addr, DomainError> {
        let unavailable = |reason: String| DomainError::AddressUnavailable(reason);

        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(|e| unavailable(format!("bind failed: {}", e)))?;
        socket
            .connect(self.probe)
            .await
            .map_err(|e| unavailable(format!("no route to {}: {}", self.probe, e)))?;
        let local = socket
            .local_addr()
            .map_err(|e| unavailable(e.to_string()))?;

        match local.ip() {
            IpAddr::V4(address) if !address.is_unspecified() => {
                debug!(address = %address, probe = %self.probe, "Resolved host address");
                Ok(address)
            }
            other => Err(unavailable(format!("no usable IPv4 address (got {})", other))),
        }
    }
}
