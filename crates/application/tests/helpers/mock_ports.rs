#![allow(dead_code)]

use async_trait::async_trait;
use chicken_dns_application::ports::HostAddressProvider;
use chicken_dns_domain::DomainError;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockHostAddressProvider {
    address: Arc<RwLock<Option<Ipv4Addr>>>,
    calls: Arc<AtomicUsize>,
}

impl MockHostAddressProvider {
    pub fn new(address: Ipv4Addr) -> Self {
        Self {
            address: Arc::new(RwLock::new(Some(address))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            address: Arc::new(RwLock::new(None)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_address(&self, address: Ipv4Addr) {
        *self.address.write().await = Some(address);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostAddressProvider for MockHostAddressProvider {
    async fn ipv4_address(&self) -> Result<Ipv4Addr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.address
            .read()
            .await
            .ok_or_else(|| DomainError::AddressUnavailable("mock has no address".to_string()))
    }
}
