use async_trait::async_trait;
use chicken_dns_domain::DomainError;
use std::net::Ipv4Addr;

/// Source of the address the device answers A queries with.
#[async_trait]
pub trait HostAddressProvider: Send + Sync {
    async fn ipv4_address(&self) -> Result<Ipv4Addr, DomainError>;
}
