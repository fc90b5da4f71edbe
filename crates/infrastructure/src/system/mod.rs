pub mod host_address;

pub use host_address::{RouteAddressProvider, StaticAddressProvider};
