//! Bridge connection options.
//!
//! [`BridgeConnectionOptions`] carries every setting needed to open a bridged
//! AMQP connection: the transport-level client settings (embedded
//! [`TransportClientOptions`]) plus the bridge-specific fields layered on
//! top. The object is inert data; the bridge runtime and its protocol client
//! consume it when the connection is actually opened.
//!
//! Every mutator is fluent and returns `&mut Self`, so transport-level and
//! bridge-level calls chain freely on one instance:
//!
//! ```
//! use amqp_bridge_options::BridgeConnectionOptions;
//!
//! let mut options = BridgeConnectionOptions::new();
//! options
//!     .set_container_id(Some("client-1".to_string()))
//!     .set_reply_handling_support(false)
//!     .set_heartbeat(30_000);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use transport::{
    JksOptions, KeyCertConfig, PemKeyCertOptions, PemTrustOptions, PfxOptions, ProxyOptions,
    ProxyType, TransportClientOptions, TrustConfig,
};

use bytes::Bytes;

pub mod transport;


/// Options error types
#[derive(Debug)]
pub enum OptionsError {
    /// JSON document did not match the expected shape
    Json(serde_json::Error),
    /// Capability permanently disabled for bridged connections
    UnsupportedOperation(&'static str),
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::Json(e) => write!(f, "JSON error: {}", e),
            OptionsError::UnsupportedOperation(what) => {
                write!(f, "Unsupported operation: {}", what)
            }
        }
    }
}

impl std::error::Error for OptionsError {}

impl From<serde_json::Error> for OptionsError {
    fn from(e: serde_json::Error) -> Self {
        OptionsError::Json(e)
    }
}

fn default_true() -> bool {
    true
}

const ALPN_UNSUPPORTED: &str = "ALPN cannot be enabled on a bridged connection";

/// Options for configuring a bridged AMQP connection.
///
/// Structural equality and hashing cover the embedded transport settings and
/// the bridge-specific fields. Two instances built from the same JSON
/// document compare equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConnectionOptions {
    #[serde(flatten)]
    transport: TransportClientOptions,
    #[serde(default = "default_true")]
    reply_handling_support: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    container_id: Option<String>,
    /// Legacy alias for the virtual host, kept as its own field. Compared
    /// independently of the canonical value on the transport settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    vhost: Option<String>,
}

impl Default for BridgeConnectionOptions {
    fn default() -> Self {
        Self {
            transport: TransportClientOptions::default(),
            reply_handling_support: true,
            container_id: None,
            vhost: None,
        }
    }
}

impl BridgeConnectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a JSON document. Recognized keys populate their
    /// fields, unknown keys are ignored, absent keys keep their defaults.
    /// A document enabling ALPN is rejected, the same as calling
    /// [`Self::set_use_alpn`].
    pub fn from_json(document: serde_json::Value) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_value(document)?;
        options.reject_enabled_alpn()
    }

    /// Builds options from JSON text. Same key handling as [`Self::from_json`].
    pub fn from_json_str(document: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(document)?;
        options.reject_enabled_alpn()
    }

    fn reject_enabled_alpn(self) -> Result<Self, OptionsError> {
        if self.transport.use_alpn() {
            return Err(OptionsError::UnsupportedOperation(ALPN_UNSUPPORTED));
        }
        Ok(self)
    }

    /// Serializes the options back to a JSON document.
    pub fn to_json(&self) -> Result<serde_json::Value, OptionsError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Read access to the embedded transport-level settings. Mutation goes
    /// through the delegating setters on this type.
    pub fn transport(&self) -> &TransportClientOptions {
        &self.transport
    }

    /// The container-id advertised on connection open. `None` means the
    /// bridge generates one when the underlying connection is made.
    pub fn container_id(&self) -> Option<&str> {
        self.container_id.as_deref()
    }

    /// Sets the container-id advertised on connection open. Some servers and
    /// clients use this as a 'client ID'. `None` (the default) lets the
    /// bridge generate one.
    pub fn set_container_id(&mut self, container_id: Option<String>) -> &mut Self {
        self.container_id = container_id;
        self
    }

    /// Legacy virtual-host value. `None` means the connection hostname is
    /// used.
    #[deprecated(since = "0.1.0", note = "use `virtual_host` instead")]
    pub fn vhost(&self) -> Option<&str> {
        self.vhost.as_deref()
    }

    /// Sets the legacy virtual-host value.
    #[deprecated(since = "0.1.0", note = "use `set_virtual_host` instead")]
    pub fn set_vhost(&mut self, vhost: Option<String>) -> &mut Self {
        warn!("the `vhost` option is deprecated, use the virtual host option instead");
        self.vhost = vhost;
        self
    }

    /// The virtual host advertised on connection open. `None` means the
    /// connection hostname is used.
    pub fn virtual_host(&self) -> Option<&str> {
        self.transport.virtual_host()
    }

    pub fn set_virtual_host(&mut self, virtual_host: Option<String>) -> &mut Self {
        self.transport.set_virtual_host(virtual_host);
        self
    }

    /// Whether the bridge should try to enable sending messages with a reply
    /// handler set and replying through the message reply methods. Defaults
    /// to true. If the server does not advertise anonymous-sender support the
    /// bridge won't support reply handling regardless of this setting.
    pub fn reply_handling_support(&self) -> bool {
        self.reply_handling_support
    }

    pub fn set_reply_handling_support(&mut self, reply_handling_support: bool) -> &mut Self {
        self.reply_handling_support = reply_handling_support;
        self
    }

    /// ALPN is permanently disabled for bridged connections; this fails for
    /// any requested value.
    pub fn set_use_alpn(&mut self, _use_alpn: bool) -> Result<&mut Self, OptionsError> {
        Err(OptionsError::UnsupportedOperation(ALPN_UNSUPPORTED))
    }

    pub fn set_ssl(&mut self, ssl: bool) -> &mut Self {
        self.transport.set_ssl(ssl);
        self
    }

    pub fn set_key_store_options(&mut self, options: JksOptions) -> &mut Self {
        self.transport.set_key_store_options(options);
        self
    }

    pub fn set_pfx_key_cert_options(&mut self, options: PfxOptions) -> &mut Self {
        self.transport.set_pfx_key_cert_options(options);
        self
    }

    pub fn set_pem_key_cert_options(&mut self, options: PemKeyCertOptions) -> &mut Self {
        self.transport.set_pem_key_cert_options(options);
        self
    }

    pub fn set_key_cert_config(&mut self, config: Option<KeyCertConfig>) -> &mut Self {
        self.transport.set_key_cert_config(config);
        self
    }

    pub fn set_trust_store_options(&mut self, options: JksOptions) -> &mut Self {
        self.transport.set_trust_store_options(options);
        self
    }

    pub fn set_pfx_trust_options(&mut self, options: PfxOptions) -> &mut Self {
        self.transport.set_pfx_trust_options(options);
        self
    }

    pub fn set_pem_trust_options(&mut self, options: PemTrustOptions) -> &mut Self {
        self.transport.set_pem_trust_options(options);
        self
    }

    pub fn set_trust_config(&mut self, config: Option<TrustConfig>) -> &mut Self {
        self.transport.set_trust_config(config);
        self
    }

    pub fn set_trust_all(&mut self, trust_all: bool) -> &mut Self {
        self.transport.set_trust_all(trust_all);
        self
    }

    pub fn add_enabled_cipher_suite(&mut self, suite: impl Into<String>) -> &mut Self {
        self.transport.add_enabled_cipher_suite(suite);
        self
    }

    pub fn add_enabled_secure_transport_protocol(
        &mut self,
        protocol: impl Into<String>,
    ) -> &mut Self {
        self.transport.add_enabled_secure_transport_protocol(protocol);
        self
    }

    pub fn add_crl_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.transport.add_crl_path(path);
        self
    }

    pub fn add_crl_value(&mut self, value: Bytes) -> &mut Self {
        self.transport.add_crl_value(value);
        self
    }

    pub fn set_hostname_verification_algorithm(
        &mut self,
        algorithm: Option<String>,
    ) -> &mut Self {
        self.transport.set_hostname_verification_algorithm(algorithm);
        self
    }

    pub fn set_sni_server_name(&mut self, server_name: Option<String>) -> &mut Self {
        self.transport.set_sni_server_name(server_name);
        self
    }

    pub fn set_proxy_options(&mut self, options: Option<ProxyOptions>) -> &mut Self {
        self.transport.set_proxy_options(options);
        self
    }

    pub fn set_send_buffer_size(&mut self, size: usize) -> &mut Self {
        self.transport.set_send_buffer_size(size);
        self
    }

    pub fn set_receive_buffer_size(&mut self, size: usize) -> &mut Self {
        self.transport.set_receive_buffer_size(size);
        self
    }

    pub fn set_reuse_address(&mut self, reuse_address: bool) -> &mut Self {
        self.transport.set_reuse_address(reuse_address);
        self
    }

    pub fn set_reuse_port(&mut self, reuse_port: bool) -> &mut Self {
        self.transport.set_reuse_port(reuse_port);
        self
    }

    pub fn set_traffic_class(&mut self, traffic_class: u8) -> &mut Self {
        self.transport.set_traffic_class(traffic_class);
        self
    }

    pub fn set_tcp_no_delay(&mut self, tcp_no_delay: bool) -> &mut Self {
        self.transport.set_tcp_no_delay(tcp_no_delay);
        self
    }

    pub fn set_tcp_keep_alive(&mut self, tcp_keep_alive: bool) -> &mut Self {
        self.transport.set_tcp_keep_alive(tcp_keep_alive);
        self
    }

    pub fn set_tcp_cork(&mut self, tcp_cork: bool) -> &mut Self {
        self.transport.set_tcp_cork(tcp_cork);
        self
    }

    pub fn set_tcp_fast_open(&mut self, tcp_fast_open: bool) -> &mut Self {
        self.transport.set_tcp_fast_open(tcp_fast_open);
        self
    }

    pub fn set_tcp_quick_ack(&mut self, tcp_quick_ack: bool) -> &mut Self {
        self.transport.set_tcp_quick_ack(tcp_quick_ack);
        self
    }

    pub fn set_so_linger(&mut self, so_linger: u32) -> &mut Self {
        self.transport.set_so_linger(so_linger);
        self
    }

    pub fn set_idle_timeout(&mut self, idle_timeout: u32) -> &mut Self {
        self.transport.set_idle_timeout(idle_timeout);
        self
    }

    pub fn set_connect_timeout(&mut self, connect_timeout: u64) -> &mut Self {
        self.transport.set_connect_timeout(connect_timeout);
        self
    }

    pub fn set_heartbeat(&mut self, heartbeat: u32) -> &mut Self {
        self.transport.set_heartbeat(heartbeat);
        self
    }

    pub fn set_max_frame_size(&mut self, max_frame_size: u32) -> &mut Self {
        self.transport.set_max_frame_size(max_frame_size);
        self
    }

    pub fn add_enabled_sasl_mechanism(&mut self, mechanism: impl Into<String>) -> &mut Self {
        self.transport.add_enabled_sasl_mechanism(mechanism);
        self
    }

    pub fn set_reconnect_attempts(&mut self, attempts: u32) -> &mut Self {
        self.transport.set_reconnect_attempts(attempts);
        self
    }

    pub fn set_reconnect_interval(&mut self, interval: u64) -> &mut Self {
        self.transport.set_reconnect_interval(interval);
        self
    }

    pub fn set_metrics_name(&mut self, metrics_name: Option<String>) -> &mut Self {
        self.transport.set_metrics_name(metrics_name);
        self
    }

    pub fn set_log_activity(&mut self, log_activity: bool) -> &mut Self {
        self.transport.set_log_activity(log_activity);
        self
    }

    pub fn set_local_address(&mut self, local_address: Option<String>) -> &mut Self {
        self.transport.set_local_address(local_address);
        self
    }
}
