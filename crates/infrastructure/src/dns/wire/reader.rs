use super::header::{HEADER_BITS, HEADER_LEN};
use super::label::{decode_name, decode_wire_name, WireName};
use super::message::DnsMessage;
use chicken_dns_domain::{DnsQuestion, DomainError};

/// A resource record as it appears on the wire, RDATA left undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub name: String,
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

/// Shortest possible question: the root name, QTYPE and QCLASS.
const MIN_QUESTION_LEN: usize = 5;

/// A question together with its QNAME as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireQuestion {
    pub name: WireName,
    pub question: DnsQuestion,
}

/// Sequential reader over the sections that follow the header.
pub struct MessageReader<'a> {
    message: &'a DnsMessage,
    cursor_bits: usize,
}

impl<'a> MessageReader<'a> {
    /// Positioned at the first question.
    pub fn new(message: &'a DnsMessage) -> Self {
        Self {
            message,
            cursor_bits: HEADER_BITS,
        }
    }

    /// Byte offset of the next unread octet.
    pub fn position_bytes(&self) -> usize {
        self.cursor_bits.div_ceil(8)
    }

    pub fn read_name(&mut self) -> Result<String, DomainError> {
        decode_name(self.message.buffer(), &mut self.cursor_bits)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let value = self.message.buffer().read_u16(self.cursor_bits)?;
        self.cursor_bits += 16;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let value = self.message.buffer().read_u32(self.cursor_bits)?;
        self.cursor_bits += 32;
        Ok(value)
    }

    /// QNAME, QTYPE, QCLASS.
    pub fn read_question(&mut self) -> Result<DnsQuestion, DomainError> {
        self.read_wire_question().map(|entry| entry.question)
    }

    pub fn read_wire_question(&mut self) -> Result<WireQuestion, DomainError> {
        let name = decode_wire_name(self.message.buffer(), &mut self.cursor_bits)?;
        let qtype = self.read_u16()?;
        let qclass = self.read_u16()?;
        let question = DnsQuestion::new(name.to_dotted(), qtype, qclass);
        Ok(WireQuestion { name, question })
    }

    /// Reads `count` questions. Stops at the first one that fails to decode.
    pub fn read_questions(&mut self, count: u16) -> Result<Vec<DnsQuestion>, DomainError> {
        let questions = self.read_wire_questions(count)?;
        Ok(questions.into_iter().map(|entry| entry.question).collect())
    }

    pub fn read_wire_questions(&mut self, count: u16) -> Result<Vec<WireQuestion>, DomainError> {
        let mut questions = Vec::with_capacity(self.question_capacity(count));
        for _ in 0..count {
            questions.push(self.read_wire_question()?);
        }
        Ok(questions)
    }

    /// QDCOUNT bounded by how many questions the message could hold.
    fn question_capacity(&self, count: u16) -> usize {
        let body = self.message.len().saturating_sub(HEADER_LEN);
        usize::from(count).min(body / MIN_QUESTION_LEN)
    }

    pub fn read_record(&mut self) -> Result<ParsedRecord, DomainError> {
        let name = self.read_name()?;
        let record_type = self.read_u16()?;
        let class = self.read_u16()?;
        let ttl = self.read_u32()?;
        let rd_length = usize::from(self.read_u16()?);

        let start = self.position_bytes();
        let rdata = self.message.buffer().slice(start, rd_length)?.to_vec();
        self.cursor_bits = (start + rd_length) * 8;

        Ok(ParsedRecord {
            name,
            record_type,
            class,
            ttl,
            rdata,
        })
    }
}
