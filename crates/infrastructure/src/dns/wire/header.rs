/// Fixed header size (RFC 1035 section 4.1.1).
pub const HEADER_LEN: usize = 12;
pub const HEADER_BITS: usize = HEADER_LEN * 8;

/// Header fields, addressed by bit offset from the start of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Id,
    Qr,
    Opcode,
    Aa,
    Tc,
    Rd,
    Ra,
    Z,
    Rcode,
    QdCount,
    AnCount,
    NsCount,
    ArCount,
}

impl HeaderField {
    pub const fn bit_offset(self) -> usize {
        match self {
            HeaderField::Id => 0,
            HeaderField::Qr => 16,
            HeaderField::Opcode => 17,
            HeaderField::Aa => 21,
            HeaderField::Tc => 22,
            HeaderField::Rd => 23,
            HeaderField::Ra => 24,
            HeaderField::Z => 25,
            HeaderField::Rcode => 28,
            HeaderField::QdCount => 32,
            HeaderField::AnCount => 48,
            HeaderField::NsCount => 64,
            HeaderField::ArCount => 80,
        }
    }

    pub const fn width(self) -> usize {
        match self {
            HeaderField::Qr
            | HeaderField::Aa
            | HeaderField::Tc
            | HeaderField::Rd
            | HeaderField::Ra => 1,
            HeaderField::Z => 3,
            HeaderField::Opcode | HeaderField::Rcode => 4,
            HeaderField::Id
            | HeaderField::QdCount
            | HeaderField::AnCount
            | HeaderField::NsCount
            | HeaderField::ArCount => 16,
        }
    }
}
