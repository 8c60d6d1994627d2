//! Connection options for bridging a generic messaging API onto AMQP 1.0.
//!
//! A composable, JSON-round-trippable configuration model: transport-level
//! client settings plus the handful of bridge-specific fields, all mutable
//! through one fluent surface. Connection establishment, frame codecs and
//! reconnect logic live in the bridge runtime and its protocol client, which
//! consume this configuration; nothing here performs I/O.

pub mod options;

pub use options::transport::{
    JksOptions, KeyCertConfig, PemKeyCertOptions, PemTrustOptions, PfxOptions, ProxyOptions,
    ProxyType, TransportClientOptions, TrustConfig,
};
pub use options::{BridgeConnectionOptions, OptionsError};
