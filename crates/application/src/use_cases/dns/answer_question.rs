use crate::ports::HostAddressProvider;
use chicken_dns_domain::{AuthorityConfig, DnsQuestion, DnsRecord, DomainError, RecordType};
use std::sync::Arc;
use tracing::debug;

/// Decides which record, if any, answers a single question.
pub struct AnswerQuestionUseCase {
    address_provider: Arc<dyn HostAddressProvider>,
    domain_name: Arc<str>,
    name_server: Arc<str>,
    uri_priority: u16,
    uri_weight: u16,
}

impl AnswerQuestionUseCase {
    pub fn new(
        address_provider: Arc<dyn HostAddressProvider>,
        authority: &AuthorityConfig,
    ) -> Self {
        Self {
            address_provider,
            domain_name: authority.domain_name.trim_end_matches('.').into(),
            name_server: authority.name_server.as_str().into(),
            uri_priority: authority.uri_priority,
            uri_weight: authority.uri_weight,
        }
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// `Ok(None)` leaves the question unanswered; that is not an error.
    pub async fn execute(&self, question: &DnsQuestion) -> Result<Option<DnsRecord>, DomainError> {
        let record = match question.record_type() {
            Some(RecordType::A) => {
                let address = self.address_provider.ipv4_address().await?;
                DnsRecord::a(Arc::clone(&question.name), address)
            }
            Some(RecordType::NS) => {
                DnsRecord::ns(Arc::clone(&question.name), Arc::clone(&self.name_server))
            }
            Some(RecordType::URI) => DnsRecord::uri(
                Arc::clone(&question.name),
                self.uri_priority,
                self.uri_weight,
                Arc::clone(&self.domain_name),
            ),
            _ => {
                debug!(
                    name = %question.name,
                    qtype = question.qtype,
                    "Unhandled query type"
                );
                return Ok(None);
            }
        };

        Ok(Some(record))
    }
}
