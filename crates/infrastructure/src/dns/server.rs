use crate::dns::wire::{DnsMessage, MessageReader};
use chicken_dns_application::use_cases::AnswerQuestionUseCase;
use chicken_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one query message into one reply message.
///
/// Holds no per-request state; every datagram is handled on its own.
pub struct DnsServerHandler {
    use_case: Arc<AnswerQuestionUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<AnswerQuestionUseCase>) -> Self {
        Self { use_case }
    }

    /// Builds the reply to a validated `request`.
    ///
    /// All questions are decoded before anything is written, so the reply can
    /// be seeded with the request's header and question section verbatim.
    /// Each answer's NAME carries its question's labels byte for byte,
    /// with any compression pointer expanded.
    pub async fn handle_message(&self, request: &DnsMessage) -> Result<DnsMessage, DomainError> {
        request.validate()?;

        let mut reader = MessageReader::new(request);
        let questions = reader.read_wire_questions(request.qd_count()?)?;
        let question_end = reader.position_bytes();

        let mut reply = DnsMessage::reply_to(request, question_end)?;

        for entry in &questions {
            let question = &entry.question;
            debug!(
                name = %question.name,
                qtype = question.qtype,
                qclass = question.qclass,
                "Question received"
            );

            if let Some(record) = self.use_case.execute(question).await? {
                reply.append_answer(&entry.name, &record)?;
            }
        }

        Ok(reply)
    }

    /// Raw bytes in, raw reply out. `None` means the datagram is dropped.
    pub async fn handle_datagram(&self, bytes: &[u8]) -> Option<DnsMessage> {
        let request = match DnsMessage::from_bytes(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, len = bytes.len(), "Dropping datagram");
                return None;
            }
        };

        match self.handle_message(&request).await {
            Ok(reply) => Some(reply),
            Err(DomainError::MalformedMessage(reason)) => {
                debug!(reason = %reason, "Dropping invalid query");
                None
            }
            Err(e) => {
                warn!(
                    error = %e,
                    id = request.id().unwrap_or_default(),
                    "Failed to answer query"
                );
                None
            }
        }
    }
}
