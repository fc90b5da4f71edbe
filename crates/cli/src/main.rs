use chicken_dns_domain::CliOverrides;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "chicken-dns")]
#[command(version)]
#[command(about = "Chicken DNS - Authoritative responder for a single device")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Domain name returned as the URI target
    #[arg(long)]
    domain: Option<String>,

    /// Fixed IPv4 address for A answers (detected when omitted)
    #[arg(long)]
    address: Option<Ipv4Addr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dns_port: self.dns_port,
            bind_address: self.bind.clone(),
            domain_name: self.domain.clone(),
            address: self.address,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting Chicken DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config);

    let bind_ip: IpAddr = config.server.bind_address.parse().map_err(|e| {
        error!(bind_address = %config.server.bind_address, "Invalid bind address");
        anyhow::anyhow!("invalid bind address '{}': {}", config.server.bind_address, e)
    })?;
    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);

    let responder = server::start_dns_server(dns_addr, dns_services.handler)?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    responder.close();
    drop(responder);

    info!("Server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags_become_overrides() {
        let cli = Cli::parse_from([
            "chicken-dns",
            "-d",
            "5353",
            "-b",
            "127.0.0.1",
            "--domain",
            "coop.local",
            "--address",
            "10.0.0.7",
            "--log-level",
            "debug",
        ]);

        let overrides = cli.overrides();
        assert_eq!(overrides.dns_port, Some(5353));
        assert_eq!(overrides.bind_address.as_deref(), Some("127.0.0.1"));
        assert_eq!(overrides.domain_name.as_deref(), Some("coop.local"));
        assert_eq!(overrides.address, Some(Ipv4Addr::new(10, 0, 0, 7)));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_flag_is_optional() {
        let cli = Cli::parse_from(["chicken-dns", "--config", "/tmp/chicken.toml"]);
        assert_eq!(cli.config.as_deref(), Some("/tmp/chicken.toml"));
        assert!(cli.overrides().dns_port.is_none());
    }
}
