use outcome_rail::{ContractViolation, Error, ExtensionValue, RESERVED_KEYS};
use std::collections::BTreeMap;

#[test]
fn extended_error_stores_typed_properties() {
    let err = Error::extended("quota exceeded")
        .with_extension("limit", 100)
        .with_extension("retryable", true)
        .with_extension("tenant", "acme")
        .with_extension("regions", vec!["eu", "us"])
        .with_extension("owner", None::<String>);

    assert_eq!(err.title(), "ExtendedError");
    assert_eq!(err.try_get::<i64>("limit"), Some(100));
    assert_eq!(err.try_get::<bool>("retryable"), Some(true));
    assert_eq!(err.try_get::<String>("tenant").as_deref(), Some("acme"));
    assert_eq!(
        err.try_get::<Vec<String>>("regions"),
        Some(vec!["eu".to_string(), "us".to_string()])
    );
    assert_eq!(err.try_get::<ExtensionValue>("owner"), Some(ExtensionValue::Null));
}

#[test]
fn try_get_returns_none_on_type_mismatch() {
    let err = Error::extended("bad").with_extension("limit", 100);

    assert_eq!(err.try_get::<String>("limit"), None);
    assert_eq!(err.try_get::<bool>("limit"), None);
}

#[test]
fn try_get_i32_rejects_out_of_range_integers() {
    let err = Error::extended("big").with_extension("size", i64::MAX);

    assert_eq!(err.try_get::<i32>("size"), None);
    assert_eq!(err.try_get::<i64>("size"), Some(i64::MAX));
}

#[test]
fn reserved_keys_are_never_stored_as_extensions() {
    let err = RESERVED_KEYS
        .iter()
        .fold(Error::extended("real message"), |err, key| err.with_extension(*key, "shadowed"));

    assert!(err.extensions().is_empty());
    assert_eq!(err.message(), "real message");
    assert_eq!(err.try_get::<String>("message").as_deref(), Some("real message"));
}

#[test]
fn try_with_extension_rejects_reserved_keys() {
    let violation = Error::extended("x").try_with_extension("innerError", 1).unwrap_err();
    assert!(matches!(violation, ContractViolation::ArgumentOutOfRange { argument: "key", .. }));

    let err = Error::extended("x").try_with_extension("details", "kept").unwrap();
    assert_eq!(err.try_get::<String>("details").as_deref(), Some("kept"));
}

#[test]
fn floats_and_objects_are_stored_and_read_back() {
    let mut meta = BTreeMap::new();
    meta.insert("shard".to_string(), 7_i64);
    let err = Error::extended("slow").with_extension("ratio", 0.5).with_extension("meta", meta);

    assert_eq!(err.try_get::<f64>("ratio"), Some(0.5));
    assert_eq!(err.try_get::<BTreeMap<String, i64>>("meta").unwrap()["shard"], 7);
    assert_eq!(err.try_get::<i64>("ratio"), None);
}

#[test]
fn float_equality_is_bitwise() {
    assert_eq!(ExtensionValue::Float(f64::NAN), ExtensionValue::Float(f64::NAN));
    assert_ne!(ExtensionValue::Float(0.0), ExtensionValue::Float(-0.0));
    assert_ne!(ExtensionValue::Float(1.0), ExtensionValue::Integer(1));
}

#[test]
fn extension_value_display_renders_lists() {
    let value = ExtensionValue::from(vec![1, 2, 3]);
    assert_eq!(value.to_string(), "[1, 2, 3]");
    assert_eq!(ExtensionValue::Null.to_string(), "null");

    let mut entries = BTreeMap::new();
    entries.insert("a".to_string(), ExtensionValue::Float(1.5));
    entries.insert("b".to_string(), ExtensionValue::Bool(false));
    assert_eq!(ExtensionValue::Object(entries).to_string(), "{a: 1.5, b: false}");
}
