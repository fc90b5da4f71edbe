use chicken_dns_domain::{
    check_domain_name, encoded_name_len, DnsQuestion, DnsRecord, DomainError, RecordClass,
    RecordData, RecordType, ResponseCode,
};
use std::net::Ipv4Addr;
use std::str::FromStr;

#[test]
fn test_a_record_creation() {
    let record = DnsRecord::a("foo.local", Ipv4Addr::new(192, 168, 4, 1));

    assert_eq!(&*record.name, "foo.local");
    assert_eq!(record.record_type, RecordType::A);
    assert_eq!(record.class, RecordClass::In);
    assert_eq!(record.ttl, 0);
    assert_eq!(record.rd_length(), 4);
}

#[test]
fn test_ns_record_rd_length_is_encoded_name_length() {
    let record = DnsRecord::ns("chicken.local", "ns");
    assert_eq!(record.rd_length(), 4);

    let record = DnsRecord::ns("chicken.local", "ns.chicken.local");
    assert_eq!(record.rd_length(), 18);
}

#[test]
fn test_uri_record_rd_length_includes_quotes() {
    let record = DnsRecord::uri("chicken.local", 10, 1, "chicken.local");

    assert_eq!(record.class, RecordClass::Uri);
    assert_eq!(record.rd_length(), 4 + 13 + 2);
    assert!(matches!(
        record.data,
        RecordData::Uri {
            priority: 10,
            weight: 1,
            ..
        }
    ));
}

#[test]
fn test_encoded_name_len() {
    assert_eq!(encoded_name_len(""), 1);
    assert_eq!(encoded_name_len("."), 1);
    assert_eq!(encoded_name_len("local"), 7);
    assert_eq!(encoded_name_len("foo.local"), 11);
    assert_eq!(encoded_name_len("foo.local."), 11);
}

#[test]
fn test_check_domain_name_accepts_valid_names() {
    assert!(check_domain_name("").is_ok());
    assert!(check_domain_name("chicken.local").is_ok());
    assert!(check_domain_name("chicken.local.").is_ok());
    assert!(check_domain_name(&"a".repeat(63)).is_ok());
}

#[test]
fn test_check_domain_name_rejects_long_label() {
    let result = check_domain_name(&format!("{}.local", "a".repeat(64)));
    assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
}

#[test]
fn test_check_domain_name_rejects_empty_label() {
    assert!(check_domain_name("foo..local").is_err());
    assert!(check_domain_name(".local").is_err());
}

#[test]
fn test_check_domain_name_rejects_long_name() {
    let label = "a".repeat(63);
    let name = [label.as_str(); 4].join(".");
    assert_eq!(encoded_name_len(&name), 257);
    assert!(check_domain_name(&name).is_err());
}

#[test]
fn test_record_type_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::NS.to_u16(), 2);
    assert_eq!(RecordType::MX.to_u16(), 15);
    assert_eq!(RecordType::URI.to_u16(), 256);
    assert_eq!(RecordType::from_u16(256), Some(RecordType::URI));
    assert_eq!(RecordType::from_u16(999), None);
}

#[test]
fn test_record_type_from_str() {
    assert_eq!(RecordType::from_str("uri").unwrap(), RecordType::URI);
    assert_eq!(RecordType::from_str("A").unwrap(), RecordType::A);
    assert!(RecordType::from_str("BOGUS").is_err());
    assert_eq!(RecordType::NS.to_string(), "NS");
}

#[test]
fn test_only_a_ns_uri_are_answerable() {
    assert!(RecordType::A.is_answerable());
    assert!(RecordType::NS.is_answerable());
    assert!(RecordType::URI.is_answerable());
    assert!(!RecordType::MX.is_answerable());
    assert!(!RecordType::AAAA.is_answerable());
}

#[test]
fn test_record_class_codes() {
    assert_eq!(RecordClass::In.to_u16(), 1);
    assert_eq!(RecordClass::Uri.to_u16(), 256);
    assert_eq!(RecordClass::from_u16(255), Some(RecordClass::Any));
    assert_eq!(RecordClass::from_u16(3), None);
}

#[test]
fn test_question_record_type() {
    let question = DnsQuestion::new("foo.local", 1, 1);
    assert_eq!(question.record_type(), Some(RecordType::A));

    let question = DnsQuestion::new("foo.local", 4242, 1);
    assert_eq!(question.record_type(), None);
}

#[test]
fn test_response_code_round_trip_low_bits() {
    assert_eq!(ResponseCode::from_u8(0x13), Some(ResponseCode::NxDomain));
    assert_eq!(ResponseCode::from_u8(9), None);
    assert_eq!(ResponseCode::Refused.to_u8(), 5);
    assert_eq!(ResponseCode::NotImp.to_string(), "NOTIMP");
}
