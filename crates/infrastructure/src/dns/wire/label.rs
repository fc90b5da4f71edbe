use super::buffer::MessageBuffer;
use chicken_dns_domain::{check_domain_name, encoded_name_len, DomainError, MAX_NAME_LEN};

// RFC 1035 section 4.1.4: the top two bits of a length octet select the label type.
const LABEL_TYPE_MASK: u8 = 0xC0;
const LABEL_TYPE_STRING: u8 = 0x00;
const LABEL_TYPE_POINTER: u8 = 0xC0;

/// A name in uncompressed wire form: length-prefixed labels and the zero
/// octet, with label bytes exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireName(Vec<u8>);

impl WireName {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Dotted text form. Bytes that are not UTF-8 are replaced and a `.`
    /// inside a label is not escaped, so this is for display and matching
    /// only, never for re-encoding.
    pub fn to_dotted(&self) -> String {
        let mut name = String::new();
        let mut pos = 0;
        while let Some(&label_len) = self.0.get(pos) {
            if label_len == 0 {
                break;
            }
            let label_len = usize::from(label_len);
            let Some(label) = self.0.get(pos + 1..pos + 1 + label_len) else {
                break;
            };
            if pos > 0 {
                name.push('.');
            }
            name.push_str(&String::from_utf8_lossy(label));
            pos += 1 + label_len;
        }
        name
    }
}

/// Decodes the name starting at `*cursor_bits` and moves the cursor past it.
///
/// A name is a sequence of labels ending either in a zero octet or in a
/// compression pointer. After the first pointer the cursor is fixed two bytes
/// past that pointer, whatever the target contains. Each label or pointer
/// visited costs one step and the walk gives up after as many steps as the
/// message has bytes, so pointer cycles fail instead of spinning.
///
/// Pointers are resolved: the result never contains one.
pub fn decode_wire_name(
    buffer: &MessageBuffer,
    cursor_bits: &mut usize,
) -> Result<WireName, DomainError> {
    let len = buffer.len();
    let mut pos = *cursor_bits / 8;
    let mut resume_at: Option<usize> = None;
    let mut name = Vec::new();
    let mut steps = 0usize;

    loop {
        steps += 1;
        if steps > len {
            return Err(DomainError::CompressionLoop { steps: len });
        }

        let length_octet = buffer.read_u8(pos * 8)?;

        match length_octet & LABEL_TYPE_MASK {
            LABEL_TYPE_POINTER => {
                let low = buffer.read_u8((pos + 1) * 8)?;
                let high = usize::from(length_octet & !LABEL_TYPE_MASK);
                let offset = (high << 8) | usize::from(low);

                if resume_at.is_none() {
                    resume_at = Some(pos + 2);
                }

                if offset >= len {
                    return Err(DomainError::InvalidLabelOffset { offset, len });
                }

                pos = offset;
            }
            LABEL_TYPE_STRING => {
                let label_len = usize::from(length_octet);
                if label_len == 0 {
                    name.push(0);
                    *cursor_bits = resume_at.unwrap_or(pos + 1) * 8;
                    return Ok(WireName(name));
                }

                // room for this label and the terminator
                if name.len() + 1 + label_len + 1 > MAX_NAME_LEN {
                    return Err(DomainError::InvalidDomainName(format!(
                        "encoded name exceeds {} bytes",
                        MAX_NAME_LEN
                    )));
                }

                name.push(length_octet);
                name.extend_from_slice(buffer.slice(pos + 1, label_len)?);
                pos += 1 + label_len;
            }
            other => return Err(DomainError::InvalidLabelType(other)),
        }
    }
}

/// [`decode_wire_name`] rendered as dotted text.
pub fn decode_name(
    buffer: &MessageBuffer,
    cursor_bits: &mut usize,
) -> Result<String, DomainError> {
    decode_wire_name(buffer, cursor_bits).map(|name| name.to_dotted())
}

/// Appends `name` as uncompressed labels plus the terminating zero octet.
///
/// Returns the number of bytes written. On failure the buffer keeps the
/// length it had before the call.
pub fn encode_name(buffer: &mut MessageBuffer, name: &str) -> Result<usize, DomainError> {
    check_domain_name(name)?;
    let name = name.strip_suffix('.').unwrap_or(name);

    let start = buffer.len();
    let required = start + encoded_name_len(name);
    if required > buffer.capacity() {
        return Err(DomainError::CapacityExceeded {
            required,
            capacity: buffer.capacity(),
        });
    }

    if let Err(e) = write_labels(buffer, name) {
        buffer.rollback(start);
        return Err(e);
    }

    Ok(buffer.len() - start)
}

fn write_labels(buffer: &mut MessageBuffer, name: &str) -> Result<(), DomainError> {
    if !name.is_empty() {
        for label in name.split('.') {
            buffer.append_u8(label.len() as u8)?;
            buffer.append_slice(label.as_bytes())?;
        }
    }
    buffer.append_u8(0)
}
