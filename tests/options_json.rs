//! JSON document round-trip tests
//!
//! Exercises the from-JSON constructors, the document shape produced by
//! `to_json`, and the equality/hash agreement of documents parsed twice.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;
use serde_json::json;

use amqp_bridge_options::{BridgeConnectionOptions, OptionsError, ProxyType};

fn hash_of(options: &BridgeConnectionOptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    options.hash(&mut hasher);
    hasher.finish()
}

#[test]
#[allow(deprecated)]
fn bridge_fields_from_document() {
    let options = BridgeConnectionOptions::from_json(json!({
        "containerId": "c1",
        "replyHandlingSupport": false,
    }))
    .unwrap();

    assert_eq!(options.container_id(), Some("c1"));
    assert!(!options.reply_handling_support());
    assert_eq!(options.vhost(), None);
}

#[test]
fn absent_keys_keep_defaults() {
    let options = BridgeConnectionOptions::from_json(json!({})).unwrap();
    assert_eq!(options, BridgeConnectionOptions::new());
    assert!(options.reply_handling_support());
    assert_eq!(options.transport().connect_timeout(), 60_000);
}

#[test]
fn unknown_keys_are_ignored() {
    let options = BridgeConnectionOptions::from_json(json!({
        "containerId": "c1",
        "somethingNobodyKnows": {"nested": true},
        "anotherStray": 42,
    }))
    .unwrap();

    assert_eq!(options.container_id(), Some("c1"));
}

#[test]
fn transport_keys_live_in_the_same_flat_document() {
    let options = BridgeConnectionOptions::from_json(json!({
        "containerId": "c1",
        "ssl": true,
        "connectTimeout": 5000,
        "heartbeat": 30000,
        "virtualHost": "broker.internal",
        "enabledSaslMechanisms": ["PLAIN", "ANONYMOUS"],
        "proxyOptions": {"host": "proxy.internal", "port": 1080, "proxyType": "socks5"},
    }))
    .unwrap();

    let transport = options.transport();
    assert!(transport.ssl());
    assert_eq!(transport.connect_timeout(), 5_000);
    assert_eq!(transport.heartbeat(), Some(30_000));
    assert_eq!(options.virtual_host(), Some("broker.internal"));
    assert_eq!(
        transport.enabled_sasl_mechanisms(),
        ["PLAIN", "ANONYMOUS"]
    );
    let proxy = transport.proxy_options().unwrap();
    assert_eq!(proxy.proxy_type, ProxyType::Socks5);
    assert_eq!(proxy.port, 1080);
}

#[test]
fn same_document_parses_equal_with_equal_hash() {
    let document = json!({
        "containerId": "c1",
        "vhost": "legacy",
        "replyHandlingSupport": false,
        "ssl": true,
        "idleTimeout": 30,
        "reconnectAttempts": 3,
    });

    let a = BridgeConnectionOptions::from_json(document.clone()).unwrap();
    let b = BridgeConnectionOptions::from_json(document).unwrap();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn document_round_trip() {
    let mut options = BridgeConnectionOptions::new();
    options
        .set_container_id(Some("round-trip".to_string()))
        .set_reply_handling_support(false)
        .set_ssl(true)
        .set_virtual_host(Some("broker.internal".to_string()))
        .set_max_frame_size(65_536)
        .add_enabled_sasl_mechanism("EXTERNAL")
        .add_crl_path("/etc/pki/crl.pem");

    let document = options.to_json().unwrap();
    let reparsed = BridgeConnectionOptions::from_json(document).unwrap();

    assert_eq!(options, reparsed);
    assert_eq!(hash_of(&options), hash_of(&reparsed));
}

#[test]
fn document_uses_camel_case_keys() {
    let mut options = BridgeConnectionOptions::new();
    options
        .set_container_id(Some("c1".to_string()))
        .set_connect_timeout(5_000);

    let document = options.to_json().unwrap();
    let object = document.as_object().unwrap();
    assert_eq!(object["containerId"], json!("c1"));
    assert_eq!(object["replyHandlingSupport"], json!(true));
    assert_eq!(object["connectTimeout"], json!(5000));
}

#[test]
fn document_enabling_alpn_is_rejected() {
    let result = BridgeConnectionOptions::from_json(json!({"useAlpn": true}));
    assert!(matches!(result, Err(OptionsError::UnsupportedOperation(_))));

    let result = BridgeConnectionOptions::from_json_str(r#"{"useAlpn": true}"#);
    assert!(matches!(result, Err(OptionsError::UnsupportedOperation(_))));

    // disabled is the default and stays accepted
    let options = BridgeConnectionOptions::from_json(json!({"useAlpn": false})).unwrap();
    assert!(!options.transport().use_alpn());
}

#[test]
fn unset_optional_fields_are_omitted_from_document() {
    let document = BridgeConnectionOptions::new().to_json().unwrap();
    let object = document.as_object().unwrap();

    assert!(!object.contains_key("containerId"));
    assert!(!object.contains_key("vhost"));
    assert!(!object.contains_key("virtualHost"));
    assert!(!object.contains_key("heartbeat"));
    assert!(!object.contains_key("proxyOptions"));

    // non-optional keys still serialize
    assert_eq!(object["replyHandlingSupport"], json!(true));
    assert_eq!(object["connectTimeout"], json!(60_000));
}

#[test]
fn malformed_text_surfaces_json_error() {
    let result = BridgeConnectionOptions::from_json_str("{not json");
    assert!(matches!(result, Err(OptionsError::Json(_))));
}

#[test]
fn mistyped_field_surfaces_json_error() {
    let result = BridgeConnectionOptions::from_json(json!({"containerId": 5}));
    assert!(matches!(result, Err(OptionsError::Json(_))));

    let result = BridgeConnectionOptions::from_json(json!({"replyHandlingSupport": "yes"}));
    assert!(matches!(result, Err(OptionsError::Json(_))));
}

#[test]
#[allow(deprecated)]
fn legacy_vhost_key_is_distinct_from_virtual_host() {
    let options = BridgeConnectionOptions::from_json(json!({
        "vhost": "legacy",
        "virtualHost": "canonical",
    }))
    .unwrap();

    assert_eq!(options.vhost(), Some("legacy"));
    assert_eq!(options.virtual_host(), Some("canonical"));
}
