use chicken_dns_domain::DomainError;
use chicken_dns_infrastructure::dns::wire::{decode_name, encode_name, MessageBuffer};

fn decode_at(buffer: &MessageBuffer, byte_offset: usize) -> (Result<String, DomainError>, usize) {
    let mut cursor = byte_offset * 8;
    let result = decode_name(buffer, &mut cursor);
    (result, cursor)
}

#[test]
fn test_encode_then_decode_round_trip() {
    for name in ["foo.local", "chicken.local", "a.b.c.d", "x"] {
        let mut buffer = MessageBuffer::new();
        buffer.append_u16(0xFFFF).unwrap();
        let written = encode_name(&mut buffer, name).unwrap();

        let (decoded, cursor) = decode_at(&buffer, 2);
        assert_eq!(decoded.unwrap(), name);
        assert_eq!(cursor, (2 + written) * 8);
    }
}

#[test]
fn test_encode_writes_length_prefixed_labels() {
    let mut buffer = MessageBuffer::new();
    let written = encode_name(&mut buffer, "foo.local").unwrap();

    assert_eq!(written, 11);
    assert_eq!(buffer.as_bytes(), b"\x03foo\x05local\x00");
}

#[test]
fn test_encode_accepts_single_trailing_dot() {
    let mut buffer = MessageBuffer::new();
    encode_name(&mut buffer, "foo.local.").unwrap();
    assert_eq!(buffer.as_bytes(), b"\x03foo\x05local\x00");
}

#[test]
fn test_encode_rejects_empty_label() {
    let mut buffer = MessageBuffer::new();
    let result = encode_name(&mut buffer, "foo..local");
    assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
    assert_eq!(buffer.len(), 0);
}

#[test]
fn test_encode_rejects_label_over_63_bytes() {
    let mut buffer = MessageBuffer::new();
    let name = format!("{}.local", "a".repeat(64));
    assert!(matches!(
        encode_name(&mut buffer, &name),
        Err(DomainError::InvalidDomainName(_))
    ));

    let name = format!("{}.local", "a".repeat(63));
    assert_eq!(encode_name(&mut buffer, &name).unwrap(), 1 + 63 + 1 + 5 + 1);
}

#[test]
fn test_encode_overflow_leaves_length_unchanged() {
    let mut buffer = MessageBuffer::new();
    buffer.ensure_length(500).unwrap();

    let result = encode_name(&mut buffer, "chicken.local");

    assert!(matches!(
        result,
        Err(DomainError::CapacityExceeded { capacity: 512, .. })
    ));
    assert_eq!(buffer.len(), 500);
}

#[test]
fn test_pointer_resolves_to_earlier_name() {
    let mut buffer = MessageBuffer::new();
    buffer.ensure_length(12).unwrap();
    encode_name(&mut buffer, "chicken.local").unwrap();
    let pointer_at = buffer.len();
    buffer.append_slice(&[0xC0, 12]).unwrap();
    buffer.append_u16(0x0001).unwrap();

    let (direct, _) = decode_at(&buffer, 12);
    let (via_pointer, cursor) = decode_at(&buffer, pointer_at);

    assert_eq!(direct.unwrap(), "chicken.local");
    assert_eq!(via_pointer.unwrap(), "chicken.local");
    assert_eq!(cursor, (pointer_at + 2) * 8);
}

#[test]
fn test_labels_followed_by_pointer() {
    let mut buffer = MessageBuffer::new();
    encode_name(&mut buffer, "local").unwrap();
    let start = buffer.len();
    buffer.append_slice(b"\x03foo\xC0\x00").unwrap();

    let (decoded, cursor) = decode_at(&buffer, start);

    assert_eq!(decoded.unwrap(), "foo.local");
    assert_eq!(cursor, buffer.len() * 8);
}

#[test]
fn test_cursor_resumes_after_first_pointer_only() {
    // "b" at 0, pointer to it at 3, pointer to that pointer at 5
    let buffer = MessageBuffer::from_slice(b"\x01b\x00\xC0\x00\xC0\x03").unwrap();

    let (decoded, cursor) = decode_at(&buffer, 5);

    assert_eq!(decoded.unwrap(), "b");
    assert_eq!(cursor, 7 * 8);
}

#[test]
fn test_self_referencing_pointer_fails() {
    let buffer = MessageBuffer::from_slice(&[0xC0, 0x00]).unwrap();
    let (result, _) = decode_at(&buffer, 0);
    assert_eq!(result, Err(DomainError::CompressionLoop { steps: 2 }));
}

#[test]
fn test_two_pointer_cycle_fails() {
    let mut bytes = vec![0u8; 12];
    bytes.extend_from_slice(&[0xC0, 14, 0xC0, 12]);
    let buffer = MessageBuffer::from_slice(&bytes).unwrap();

    let (result, _) = decode_at(&buffer, 12);
    assert!(matches!(result, Err(DomainError::CompressionLoop { .. })));
}

#[test]
fn test_label_cycle_through_pointer_fails() {
    let buffer = MessageBuffer::from_slice(b"\x01a\xC0\x00").unwrap();
    let (result, _) = decode_at(&buffer, 0);
    assert!(matches!(result, Err(DomainError::CompressionLoop { .. })));
}

#[test]
fn test_pointer_past_end_fails() {
    let buffer = MessageBuffer::from_slice(&[0xC0, 0x10]).unwrap();
    let (result, _) = decode_at(&buffer, 0);
    assert_eq!(
        result,
        Err(DomainError::InvalidLabelOffset { offset: 16, len: 2 })
    );
}

#[test]
fn test_truncated_label_fails_out_of_range() {
    let buffer = MessageBuffer::from_slice(b"\x05ab").unwrap();
    let (result, _) = decode_at(&buffer, 0);
    assert!(matches!(result, Err(DomainError::OutOfRange { .. })));
}

#[test]
fn test_missing_terminator_fails_out_of_range() {
    let buffer = MessageBuffer::from_slice(b"\x03foo").unwrap();
    let (result, _) = decode_at(&buffer, 0);
    assert!(matches!(result, Err(DomainError::OutOfRange { .. })));
}

#[test]
fn test_root_name_decodes_empty() {
    let buffer = MessageBuffer::from_slice(&[0]).unwrap();
    let (result, cursor) = decode_at(&buffer, 0);
    assert_eq!(result.unwrap(), "");
    assert_eq!(cursor, 8);
}
