use super::buffer::{MessageBuffer, MAX_MESSAGE_LEN};
use super::header::{HeaderField, HEADER_LEN};
use super::label::{self, WireName};
use bytes::Bytes;
use chicken_dns_domain::{DnsRecord, DomainError, RecordData, ResponseCode, DEFAULT_TTL};
use tracing::debug;

/// How a record's NAME is written.
enum Owner<'a> {
    Text(&'a str),
    Wire(&'a WireName),
}

/// A complete wire-format DNS message: header, then questions and records.
#[derive(Debug, Clone, Default)]
pub struct DnsMessage {
    buffer: MessageBuffer,
}

impl DnsMessage {
    /// An empty message (length 0, no header yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// A zeroed header carrying `id`, ready for questions to be appended.
    pub fn with_id(id: u16) -> Result<Self, DomainError> {
        let mut buffer = MessageBuffer::new();
        buffer.ensure_length(HEADER_LEN)?;
        let mut message = Self { buffer };
        message.set_id(id)?;
        Ok(message)
    }

    /// Wraps received bytes. Datagrams larger than the message capacity
    /// cannot be represented and are reported as malformed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.len() > MAX_MESSAGE_LEN {
            return Err(DomainError::MalformedMessage(format!(
                "length {} exceeds {}",
                bytes.len(),
                MAX_MESSAGE_LEN
            )));
        }
        Ok(Self {
            buffer: MessageBuffer::from_slice(bytes)?,
        })
    }

    /// Starts a response to `request`, copying its header and the first
    /// `question_end` bytes (header plus question section). QR is set and
    /// the answer, authority and additional counts are cleared.
    pub fn reply_to(request: &DnsMessage, question_end: usize) -> Result<Self, DomainError> {
        let mut reply = Self {
            buffer: MessageBuffer::from_prefix(&request.buffer, question_end.max(HEADER_LEN))?,
        };
        reply.set_response(true)?;
        reply.set_truncated(false)?;
        reply.set_response_code(ResponseCode::NoError)?;
        reply.set_an_count(0)?;
        reply.set_ns_count(0)?;
        reply.set_ar_count(0)?;
        Ok(reply)
    }

    pub fn buffer(&self) -> &MessageBuffer {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn into_bytes(self) -> Bytes {
        Bytes::copy_from_slice(self.buffer.as_bytes())
    }

    // ── header ─────────────────────────────────────────────────────────────

    pub fn header(&self, field: HeaderField) -> Result<u32, DomainError> {
        self.buffer.read_bits(field.bit_offset(), field.width())
    }

    pub fn set_header(&mut self, field: HeaderField, value: u32) -> Result<(), DomainError> {
        self.buffer
            .write_bits(field.bit_offset(), field.width(), value)
    }

    pub fn id(&self) -> Result<u16, DomainError> {
        Ok(self.header(HeaderField::Id)? as u16)
    }

    pub fn set_id(&mut self, id: u16) -> Result<(), DomainError> {
        self.set_header(HeaderField::Id, u32::from(id))
    }

    pub fn is_response(&self) -> Result<bool, DomainError> {
        self.buffer.read_bit(HeaderField::Qr.bit_offset())
    }

    pub fn set_response(&mut self, response: bool) -> Result<(), DomainError> {
        self.buffer.set_bit(HeaderField::Qr.bit_offset(), response)
    }

    pub fn opcode(&self) -> Result<u8, DomainError> {
        Ok(self.header(HeaderField::Opcode)? as u8)
    }

    pub fn is_truncated(&self) -> Result<bool, DomainError> {
        self.buffer.read_bit(HeaderField::Tc.bit_offset())
    }

    pub fn set_truncated(&mut self, truncated: bool) -> Result<(), DomainError> {
        self.buffer.set_bit(HeaderField::Tc.bit_offset(), truncated)
    }

    pub fn recursion_desired(&self) -> Result<bool, DomainError> {
        self.buffer.read_bit(HeaderField::Rd.bit_offset())
    }

    pub fn recursion_available(&self) -> Result<bool, DomainError> {
        self.buffer.read_bit(HeaderField::Ra.bit_offset())
    }

    /// `None` for the reserved RCODE values 6 to 15.
    pub fn response_code(&self) -> Result<Option<ResponseCode>, DomainError> {
        Ok(ResponseCode::from_u8(self.header(HeaderField::Rcode)? as u8))
    }

    pub fn set_response_code(&mut self, code: ResponseCode) -> Result<(), DomainError> {
        self.set_header(HeaderField::Rcode, u32::from(code.to_u8()))
    }

    pub fn qd_count(&self) -> Result<u16, DomainError> {
        Ok(self.header(HeaderField::QdCount)? as u16)
    }

    pub fn an_count(&self) -> Result<u16, DomainError> {
        Ok(self.header(HeaderField::AnCount)? as u16)
    }

    pub fn set_an_count(&mut self, count: u16) -> Result<(), DomainError> {
        self.set_header(HeaderField::AnCount, u32::from(count))
    }

    pub fn ns_count(&self) -> Result<u16, DomainError> {
        Ok(self.header(HeaderField::NsCount)? as u16)
    }

    pub fn set_ns_count(&mut self, count: u16) -> Result<(), DomainError> {
        self.set_header(HeaderField::NsCount, u32::from(count))
    }

    pub fn ar_count(&self) -> Result<u16, DomainError> {
        Ok(self.header(HeaderField::ArCount)? as u16)
    }

    pub fn set_ar_count(&mut self, count: u16) -> Result<(), DomainError> {
        self.set_header(HeaderField::ArCount, u32::from(count))
    }

    // ── validation ─────────────────────────────────────────────────────────

    /// Accepts plain queries only: a complete header, nothing in the answer,
    /// authority or additional sections, and TC clear.
    pub fn validate(&self) -> Result<(), DomainError> {
        let len = self.len();

        if len == 0 {
            return Err(DomainError::MalformedMessage("empty message".to_string()));
        }

        if !(HEADER_LEN..=MAX_MESSAGE_LEN).contains(&len) {
            return Err(DomainError::MalformedMessage(format!(
                "incorrect length {}",
                len
            )));
        }

        if self.an_count()? != 0 || self.ns_count()? != 0 || self.ar_count()? != 0 {
            return Err(DomainError::MalformedMessage(
                "answer, authority or additional records present".to_string(),
            ));
        }

        if self.is_truncated()? {
            return Err(DomainError::MalformedMessage(
                "truncated message".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Rejecting message");
                false
            }
        }
    }

    // ── appends ────────────────────────────────────────────────────────────

    /// See [`label::encode_name`]. The length is unchanged on failure.
    pub fn encode_name(&mut self, name: &str) -> Result<usize, DomainError> {
        label::encode_name(&mut self.buffer, name)
    }

    /// Appends `value` followed by a NUL. The NUL must fit but is not
    /// counted in the length, so the next append overwrites it.
    pub fn append_string(&mut self, value: &str) -> Result<(), DomainError> {
        let start = self.buffer.len();
        let end = start + value.len();
        let required = end + 1;
        if required > self.buffer.capacity() {
            return Err(DomainError::CapacityExceeded {
                required,
                capacity: self.buffer.capacity(),
            });
        }

        let data = self.buffer.data_mut();
        data[start..end].copy_from_slice(value.as_bytes());
        data[end] = 0;
        self.buffer.ensure_length(end)
    }

    /// Appends NAME, TYPE, CLASS, TTL (0) and RDLENGTH, then bumps ANCOUNT.
    ///
    /// On failure nothing is appended and ANCOUNT is untouched; the caller
    /// must not go on to write RDATA.
    pub fn append_resource_record(
        &mut self,
        name: &str,
        record_type: u16,
        class: u16,
        rd_length: u16,
    ) -> Result<(), DomainError> {
        self.append_record_header(
            Owner::Text(name),
            record_type,
            class,
            DEFAULT_TTL,
            rd_length,
        )
    }

    /// Appends a complete record, RDATA included. Either the whole record is
    /// written and counted or the message is left as it was.
    pub fn append_record(&mut self, record: &DnsRecord) -> Result<(), DomainError> {
        self.append_owned_record(Owner::Text(&record.name), record)
    }

    /// Like [`append_record`](Self::append_record), but NAME is written as
    /// the given wire bytes instead of `record.name`. An answer built this
    /// way names exactly what the question named.
    pub fn append_answer(
        &mut self,
        owner: &WireName,
        record: &DnsRecord,
    ) -> Result<(), DomainError> {
        self.append_owned_record(Owner::Wire(owner), record)
    }

    fn append_owned_record(
        &mut self,
        owner: Owner<'_>,
        record: &DnsRecord,
    ) -> Result<(), DomainError> {
        let mark = self.len();
        let an_count = self.an_count()?;

        let rd_length = u16::try_from(record.rd_length()).map_err(|_| {
            DomainError::CapacityExceeded {
                required: record.rd_length(),
                capacity: self.buffer.capacity(),
            }
        })?;

        self.append_record_header(
            owner,
            record.record_type.to_u16(),
            record.class.to_u16(),
            record.ttl,
            rd_length,
        )?;

        if let Err(e) = self.append_rdata(&record.data) {
            self.buffer.rollback(mark);
            self.set_an_count(an_count)?;
            return Err(e);
        }

        Ok(())
    }

    fn append_record_header(
        &mut self,
        owner: Owner<'_>,
        record_type: u16,
        class: u16,
        ttl: u32,
        rd_length: u16,
    ) -> Result<(), DomainError> {
        let mark = self.len();
        let an_count = self.an_count()?;

        let name_written = match owner {
            Owner::Text(name) => self.encode_name(name).map(|_| ()),
            Owner::Wire(name) => self.buffer.append_slice(name.as_bytes()),
        };

        let written = name_written.and_then(|_| {
            self.buffer.append_u16(record_type)?;
            self.buffer.append_u16(class)?;
            self.buffer.append_u32(ttl)?;
            self.buffer.append_u16(rd_length)
        });

        if let Err(e) = written {
            self.buffer.rollback(mark);
            return Err(e);
        }

        self.set_an_count(an_count.saturating_add(1))
    }

    fn append_rdata(&mut self, data: &RecordData) -> Result<(), DomainError> {
        match data {
            RecordData::A(address) => self.buffer.append_slice(&address.octets()),
            RecordData::Ns(name_server) => self.encode_name(name_server).map(|_| ()),
            RecordData::Uri {
                priority,
                weight,
                target,
            } => {
                self.buffer.append_u16(*priority)?;
                self.buffer.append_u16(*weight)?;
                self.buffer.append_u8(b'"')?;
                self.append_string(target)?;
                self.buffer.append_u8(b'"')
            }
        }
    }
}
