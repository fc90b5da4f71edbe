use chicken_dns_application::ports::HostAddressProvider;
use chicken_dns_application::use_cases::AnswerQuestionUseCase;
use chicken_dns_domain::Config;
use chicken_dns_infrastructure::dns::DnsServerHandler;
use chicken_dns_infrastructure::system::{RouteAddressProvider, StaticAddressProvider};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let address_provider = Self::setup_address_provider(config);

        let answer_use_case = Arc::new(AnswerQuestionUseCase::new(
            address_provider,
            &config.authority,
        ));
        let handler = Arc::new(DnsServerHandler::new(Arc::clone(&answer_use_case)));

        info!(
            domain = %answer_use_case.domain_name(),
            name_server = %config.authority.name_server,
            "DNS services initialized"
        );

        Self { handler }
    }

    fn setup_address_provider(config: &Config) -> Arc<dyn HostAddressProvider> {
        match config.authority.address {
            Some(address) => {
                info!(address = %address, "Answering A queries with configured address");
                Arc::new(StaticAddressProvider::new(address))
            }
            None => {
                info!("Answering A queries with the detected interface address");
                Arc::new(RouteAddressProvider::default())
            }
        }
    }
}
