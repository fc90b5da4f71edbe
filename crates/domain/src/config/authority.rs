use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The single zone this server speaks for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorityConfig {
    /// Advertised as the URI target, quoted.
    #[serde(default = "default_domain_name")]
    pub domain_name: String,

    /// Name returned in NS answers.
    #[serde(default = "default_name_server")]
    pub name_server: String,

    /// Address returned in A answers. When absent the address of the
    /// outbound interface is looked up per query.
    #[serde(default)]
    pub address: Option<Ipv4Addr>,

    #[serde(default = "default_uri_priority")]
    pub uri_priority: u16,

    #[serde(default = "default_uri_weight")]
    pub uri_weight: u16,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            domain_name: default_domain_name(),
            name_server: default_name_server(),
            address: None,
            uri_priority: default_uri_priority(),
            uri_weight: default_uri_weight(),
        }
    }
}

fn default_domain_name() -> String {
    "chicken.local".to_string()
}

fn default_name_server() -> String {
    "ns".to_string()
}

fn default_uri_priority() -> u16 {
    10
}

fn default_uri_weight() -> u16 {
    1
}
