use problem_rail::option::{custom, status, title, type_uri};
use problem_rail::{CodecError, Problem, Value};

#[test]
fn encodes_root_with_default_namespace() {
    let p = Problem::new([status(404)]);
    assert_eq!(
        p.xml_string().unwrap(),
        r#"<problem xmlns="urn:ietf:rfc:7807"><status>404</status></problem>"#
    );
}

#[test]
fn round_trip() {
    let p = Problem::new([status(500), title("StrangeXML")]);
    let xml = p.to_xml().unwrap();
    assert_eq!(
        xml,
        br#"<problem xmlns="urn:ietf:rfc:7807"><status>500</status><title>StrangeXML</title></problem>"#
    );

    let decoded = Problem::from_xml(&xml).unwrap();
    assert_eq!(decoded.json_string(), r#"{"status":500,"title":"StrangeXML"}"#);
    assert!(decoded.is(&p));
}

#[test]
fn round_trip_coerces_custom_values_to_strings() {
    let p = Problem::new([status(403), custom("balance", 30), type_uri("https://example.com/credit")]);
    let decoded = Problem::from_xml(&p.to_xml().unwrap()).unwrap();

    assert_eq!(decoded.get("status"), Some(&Value::Int(403)));
    assert_eq!(decoded.get("balance"), Some(&Value::String("30".to_string())));
    assert_eq!(decoded.type_uri(), Some("https://example.com/credit"));
}

#[test]
fn special_characters_are_escaped() {
    let p = Problem::new([title("a < b & \"c\"")]);
    let xml = p.xml_string().unwrap();
    assert!(!xml.contains("a < b"));

    let decoded = Problem::from_xml(xml.as_bytes()).unwrap();
    assert_eq!(decoded.title(), Some("a < b & \"c\""));
}

#[test]
fn foreign_namespace_is_rejected() {
    let xml = br#"<problem xmlns="unknown"><status>123</status><title>xxx</title></problem>"#;
    let err = Problem::from_xml(xml).unwrap_err();
    assert!(matches!(err, CodecError::Namespace { ref found } if found == "unknown"));
}

#[test]
fn missing_namespace_is_rejected() {
    let xml = br#"<problem><status>123</status></problem>"#;
    assert!(matches!(Problem::from_xml(xml), Err(CodecError::Namespace { .. })));
}

#[test]
fn child_in_other_namespace_is_rejected() {
    let xml = br#"<problem xmlns="urn:ietf:rfc:7807"><x:title xmlns:x="urn:other">t</x:title></problem>"#;
    assert!(matches!(Problem::from_xml(xml), Err(CodecError::Namespace { .. })));
}

#[test]
fn prefixed_problem_namespace_is_accepted() {
    let xml = br#"<p:problem xmlns:p="urn:ietf:rfc:7807"><p:status>410</p:status></p:problem>"#;
    let decoded = Problem::from_xml(xml).unwrap();
    assert_eq!(decoded.status(), Some(410));
}

#[test]
fn non_integer_status_is_rejected() {
    let xml = br#"<problem xmlns="urn:ietf:rfc:7807"><status>abc</status><title>StrangeXML</title></problem>"#;
    let err = Problem::from_xml(xml).unwrap_err();
    assert!(matches!(err, CodecError::InvalidStatus { ref text, .. } if text == "abc"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn malformed_markup_is_rejected() {
    let xml = br#"<problem xmlns="urn:ietf:rfc:7807"><status>404</title></problem>"#;
    assert!(matches!(Problem::from_xml(xml), Err(CodecError::Xml(_))));
}

#[test]
fn empty_elements_set_nothing() {
    let xml = br#"<problem xmlns="urn:ietf:rfc:7807"><detail/><title></title><status>404</status></problem>"#;
    let decoded = Problem::from_xml(xml).unwrap();
    assert_eq!(decoded.json_string(), r#"{"status":404}"#);
}

#[test]
fn text_before_the_envelope_is_ignored() {
    let xml = br#"junk<problem xmlns="urn:ietf:rfc:7807"><status>404</status></problem>trailing"#;
    let decoded = Problem::from_xml(xml).unwrap();
    assert_eq!(decoded.json_string(), r#"{"status":404}"#);
}

#[test]
fn non_ascii_keys_are_rejected_on_encode() {
    let p = Problem::new([custom("größe", 3)]);
    assert!(matches!(p.to_xml(), Err(CodecError::InvalidElementName(ref k)) if k == "größe"));
}

#[test]
fn unknown_elements_become_string_fields() {
    let xml = br#"<?xml version="1.0"?><problem xmlns="urn:ietf:rfc:7807"><balance>30</balance></problem>"#;
    let decoded = Problem::from_xml(xml).unwrap();
    assert_eq!(decoded.get("balance"), Some(&Value::String("30".to_string())));
    assert!(decoded.cause().is_none());
}
