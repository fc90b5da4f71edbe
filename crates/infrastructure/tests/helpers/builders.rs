#![allow(dead_code)]

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_MX: u16 = 15;
pub const TYPE_URI: u16 = 256;

const CLASS_IN: u16 = 1;

/// Raw query bytes assembled by hand, independent of the codec under test.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(String, u16, u16)>,
    an_count: u16,
    ns_count: u16,
    ar_count: u16,
    pad_to: Option<usize>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            questions: Vec::new(),
            an_count: 0,
            ns_count: 0,
            ar_count: 0,
            pad_to: None,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn question(self, name: &str, qtype: u16) -> Self {
        self.question_with_class(name, qtype, CLASS_IN)
    }

    pub fn question_with_class(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.push((name.to_string(), qtype, qclass));
        self
    }

    pub fn truncated(mut self) -> Self {
        self.flags |= 0x0200;
        self
    }

    pub fn an_count(mut self, count: u16) -> Self {
        self.an_count = count;
        self
    }

    pub fn ns_count(mut self, count: u16) -> Self {
        self.ns_count = count;
        self
    }

    pub fn ar_count(mut self, count: u16) -> Self {
        self.ar_count = count;
        self
    }

    /// Zero-pads the message to `len` bytes.
    pub fn padded_to(mut self, len: usize) -> Self {
        self.pad_to = Some(len);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(512);
        bytes.extend_from_slice(&self.id.to_be_bytes());
        bytes.extend_from_slice(&self.flags.to_be_bytes());
        bytes.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        bytes.extend_from_slice(&self.an_count.to_be_bytes());
        bytes.extend_from_slice(&self.ns_count.to_be_bytes());
        bytes.extend_from_slice(&self.ar_count.to_be_bytes());

        for (name, qtype, qclass) in &self.questions {
            bytes.extend_from_slice(&encode_labels(name));
            bytes.extend_from_slice(&qtype.to_be_bytes());
            bytes.extend_from_slice(&qclass.to_be_bytes());
        }

        if let Some(len) = self.pad_to {
            bytes.resize(len, 0);
        }
        bytes
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn encode_labels(name: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        bytes.push(label.len() as u8);
        bytes.extend_from_slice(label.as_bytes());
    }
    bytes.push(0);
    bytes
}
