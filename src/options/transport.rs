//! Transport-level client options.
//!
//! Everything the underlying protocol client needs to open its socket:
//! TCP tuning, TLS credential material, SASL mechanisms, proxying and
//! reconnect policy. These settings are pass-through data for the protocol
//! client; nothing here is validated beyond its type.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Java-keystore-style credential store (path + store password).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JksOptions {
    /// Path to the keystore file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Store password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// PKCS#12 credential store (path + store password).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PfxOptions {
    /// Path to the PKCS#12 file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Store password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// PEM certificate + private key pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PemKeyCertOptions {
    /// Path to the certificate file (PEM format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_path: Option<String>,
    /// Path to the private key file (PEM format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
}

/// PEM trust anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PemTrustOptions {
    /// Paths to CA certificate files (PEM format)
    pub cert_paths: Vec<String>,
}

/// Source of the client key/certificate material. At most one source is
/// configured at a time; setting a new one replaces the previous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyCertConfig {
    /// Java keystore
    Jks(JksOptions),
    /// PKCS#12 store
    Pfx(PfxOptions),
    /// PEM certificate/key pair
    Pem(PemKeyCertOptions),
}

/// Source of the trust anchors used to verify the peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrustConfig {
    /// Java truststore
    Jks(JksOptions),
    /// PKCS#12 store
    Pfx(PfxOptions),
    /// PEM trust anchors
    Pem(PemTrustOptions),
}

/// Proxy protocol used to reach the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    /// HTTP CONNECT proxy
    #[default]
    Http,
    /// SOCKS4 proxy
    Socks4,
    /// SOCKS5 proxy
    Socks5,
}

/// Proxy configuration for the outbound connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyOptions {
    /// Proxy host
    pub host: String,
    /// Proxy port
    pub port: u16,
    /// Proxy protocol
    pub proxy_type: ProxyType,
    /// Username for proxy authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password for proxy authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for ProxyOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3128,
            proxy_type: ProxyType::default(),
            username: None,
            password: None,
        }
    }
}

fn default_tcp_no_delay() -> bool {
    true
}

fn default_connect_timeout() -> u64 {
    60_000
}

fn default_reconnect_interval() -> u64 {
    1_000
}

/// Base configuration for the protocol client that carries the bridged
/// connection. A plain value holder: every setter stores its argument
/// unchanged and returns `&mut Self` so calls chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportClientOptions {
    ssl: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_cert: Option<KeyCertConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trust: Option<TrustConfig>,
    trust_all: bool,
    enabled_cipher_suites: Vec<String>,
    enabled_secure_transport_protocols: Vec<String>,
    crl_paths: Vec<String>,
    crl_values: Vec<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname_verification_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sni_server_name: Option<String>,
    use_alpn: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    proxy_options: Option<ProxyOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    send_buffer_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    receive_buffer_size: Option<usize>,
    reuse_address: bool,
    reuse_port: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    traffic_class: Option<u8>,
    tcp_no_delay: bool,
    tcp_keep_alive: bool,
    tcp_cork: bool,
    tcp_fast_open: bool,
    tcp_quick_ack: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    so_linger: Option<u32>,
    /// Seconds of inactivity before the connection is considered idle (0 = never)
    idle_timeout: u32,
    /// Connection establishment timeout in milliseconds
    connect_timeout: u64,
    /// Transport heartbeat interval in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    heartbeat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_frame_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    virtual_host: Option<String>,
    enabled_sasl_mechanisms: Vec<String>,
    reconnect_attempts: u32,
    /// Delay between reconnect attempts in milliseconds
    reconnect_interval: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics_name: Option<String>,
    log_activity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    local_address: Option<String>,
}

impl Default for TransportClientOptions {
    fn default() -> Self {
        Self {
            ssl: false,
            key_cert: None,
            trust: None,
            trust_all: false,
            enabled_cipher_suites: Vec::new(),
            enabled_secure_transport_protocols: Vec::new(),
            crl_paths: Vec::new(),
            crl_values: Vec::new(),
            hostname_verification_algorithm: None,
            sni_server_name: None,
            use_alpn: false,
            proxy_options: None,
            send_buffer_size: None,
            receive_buffer_size: None,
            reuse_address: false,
            reuse_port: false,
            traffic_class: None,
            tcp_no_delay: default_tcp_no_delay(),
            tcp_keep_alive: false,
            tcp_cork: false,
            tcp_fast_open: false,
            tcp_quick_ack: false,
            so_linger: None,
            idle_timeout: 0,
            connect_timeout: default_connect_timeout(),
            heartbeat: None,
            max_frame_size: None,
            virtual_host: None,
            enabled_sasl_mechanisms: Vec::new(),
            reconnect_attempts: 0,
            reconnect_interval: default_reconnect_interval(),
            metrics_name: None,
            log_activity: false,
            local_address: None,
        }
    }
}

impl TransportClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ssl(&self) -> bool {
        self.ssl
    }

    pub fn set_ssl(&mut self, ssl: bool) -> &mut Self {
        self.ssl = ssl;
        self
    }

    pub fn key_cert_config(&self) -> Option<&KeyCertConfig> {
        self.key_cert.as_ref()
    }

    /// Replaces the key/cert source with a Java keystore.
    pub fn set_key_store_options(&mut self, options: JksOptions) -> &mut Self {
        self.key_cert = Some(KeyCertConfig::Jks(options));
        self
    }

    /// Replaces the key/cert source with a PKCS#12 store.
    pub fn set_pfx_key_cert_options(&mut self, options: PfxOptions) -> &mut Self {
        self.key_cert = Some(KeyCertConfig::Pfx(options));
        self
    }

    /// Replaces the key/cert source with a PEM certificate/key pair.
    pub fn set_pem_key_cert_options(&mut self, options: PemKeyCertOptions) -> &mut Self {
        self.key_cert = Some(KeyCertConfig::Pem(options));
        self
    }

    pub fn set_key_cert_config(&mut self, config: Option<KeyCertConfig>) -> &mut Self {
        self.key_cert = config;
        self
    }

    pub fn trust_config(&self) -> Option<&TrustConfig> {
        self.trust.as_ref()
    }

    /// Replaces the trust source with a Java truststore.
    pub fn set_trust_store_options(&mut self, options: JksOptions) -> &mut Self {
        self.trust = Some(TrustConfig::Jks(options));
        self
    }

    /// Replaces the trust source with a PKCS#12 store.
    pub fn set_pfx_trust_options(&mut self, options: PfxOptions) -> &mut Self {
        self.trust = Some(TrustConfig::Pfx(options));
        self
    }

    /// Replaces the trust source with PEM trust anchors.
    pub fn set_pem_trust_options(&mut self, options: PemTrustOptions) -> &mut Self {
        self.trust = Some(TrustConfig::Pem(options));
        self
    }

    pub fn set_trust_config(&mut self, config: Option<TrustConfig>) -> &mut Self {
        self.trust = config;
        self
    }

    /// Whether all server certificates are accepted without verification.
    pub fn trust_all(&self) -> bool {
        self.trust_all
    }

    pub fn set_trust_all(&mut self, trust_all: bool) -> &mut Self {
        self.trust_all = trust_all;
        self
    }

    pub fn enabled_cipher_suites(&self) -> &[String] {
        &self.enabled_cipher_suites
    }

    pub fn add_enabled_cipher_suite(&mut self, suite: impl Into<String>) -> &mut Self {
        self.enabled_cipher_suites.push(suite.into());
        self
    }

    pub fn enabled_secure_transport_protocols(&self) -> &[String] {
        &self.enabled_secure_transport_protocols
    }

    pub fn add_enabled_secure_transport_protocol(
        &mut self,
        protocol: impl Into<String>,
    ) -> &mut Self {
        self.enabled_secure_transport_protocols.push(protocol.into());
        self
    }

    pub fn crl_paths(&self) -> &[String] {
        &self.crl_paths
    }

    pub fn add_crl_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.crl_paths.push(path.into());
        self
    }

    pub fn crl_values(&self) -> &[Bytes] {
        &self.crl_values
    }

    pub fn add_crl_value(&mut self, value: Bytes) -> &mut Self {
        self.crl_values.push(value);
        self
    }

    pub fn hostname_verification_algorithm(&self) -> Option<&str> {
        self.hostname_verification_algorithm.as_deref()
    }

    pub fn set_hostname_verification_algorithm(
        &mut self,
        algorithm: Option<String>,
    ) -> &mut Self {
        self.hostname_verification_algorithm = algorithm;
        self
    }

    pub fn sni_server_name(&self) -> Option<&str> {
        self.sni_server_name.as_deref()
    }

    pub fn set_sni_server_name(&mut self, server_name: Option<String>) -> &mut Self {
        self.sni_server_name = server_name;
        self
    }

    pub fn use_alpn(&self) -> bool {
        self.use_alpn
    }

    pub fn set_use_alpn(&mut self, use_alpn: bool) -> &mut Self {
        self.use_alpn = use_alpn;
        self
    }

    pub fn proxy_options(&self) -> Option<&ProxyOptions> {
        self.proxy_options.as_ref()
    }

    pub fn set_proxy_options(&mut self, options: Option<ProxyOptions>) -> &mut Self {
        self.proxy_options = options;
        self
    }

    pub fn send_buffer_size(&self) -> Option<usize> {
        self.send_buffer_size
    }

    pub fn set_send_buffer_size(&mut self, size: usize) -> &mut Self {
        self.send_buffer_size = Some(size);
        self
    }

    pub fn receive_buffer_size(&self) -> Option<usize> {
        self.receive_buffer_size
    }

    pub fn set_receive_buffer_size(&mut self, size: usize) -> &mut Self {
        self.receive_buffer_size = Some(size);
        self
    }

    pub fn reuse_address(&self) -> bool {
        self.reuse_address
    }

    pub fn set_reuse_address(&mut self, reuse_address: bool) -> &mut Self {
        self.reuse_address = reuse_address;
        self
    }

    pub fn reuse_port(&self) -> bool {
        self.reuse_port
    }

    pub fn set_reuse_port(&mut self, reuse_port: bool) -> &mut Self {
        self.reuse_port = reuse_port;
        self
    }

    pub fn traffic_class(&self) -> Option<u8> {
        self.traffic_class
    }

    pub fn set_traffic_class(&mut self, traffic_class: u8) -> &mut Self {
        self.traffic_class = Some(traffic_class);
        self
    }

    pub fn tcp_no_delay(&self) -> bool {
        self.tcp_no_delay
    }

    pub fn set_tcp_no_delay(&mut self, tcp_no_delay: bool) -> &mut Self {
        self.tcp_no_delay = tcp_no_delay;
        self
    }

    pub fn tcp_keep_alive(&self) -> bool {
        self.tcp_keep_alive
    }

    pub fn set_tcp_keep_alive(&mut self, tcp_keep_alive: bool) -> &mut Self {
        self.tcp_keep_alive = tcp_keep_alive;
        self
    }

    pub fn tcp_cork(&self) -> bool {
        self.tcp_cork
    }

    pub fn set_tcp_cork(&mut self, tcp_cork: bool) -> &mut Self {
        self.tcp_cork = tcp_cork;
        self
    }

    pub fn tcp_fast_open(&self) -> bool {
        self.tcp_fast_open
    }

    pub fn set_tcp_fast_open(&mut self, tcp_fast_open: bool) -> &mut Self {
        self.tcp_fast_open = tcp_fast_open;
        self
    }

    pub fn tcp_quick_ack(&self) -> bool {
        self.tcp_quick_ack
    }

    pub fn set_tcp_quick_ack(&mut self, tcp_quick_ack: bool) -> &mut Self {
        self.tcp_quick_ack = tcp_quick_ack;
        self
    }

    pub fn so_linger(&self) -> Option<u32> {
        self.so_linger
    }

    pub fn set_so_linger(&mut self, so_linger: u32) -> &mut Self {
        self.so_linger = Some(so_linger);
        self
    }

    /// Idle timeout in seconds (0 = never idle out).
    pub fn idle_timeout(&self) -> u32 {
        self.idle_timeout
    }

    pub fn set_idle_timeout(&mut self, idle_timeout: u32) -> &mut Self {
        self.idle_timeout = idle_timeout;
        self
    }

    /// Connection establishment timeout in milliseconds.
    pub fn connect_timeout(&self) -> u64 {
        self.connect_timeout
    }

    pub fn set_connect_timeout(&mut self, connect_timeout: u64) -> &mut Self {
        self.connect_timeout = connect_timeout;
        self
    }

    /// Heartbeat interval in milliseconds, if one is configured.
    pub fn heartbeat(&self) -> Option<u32> {
        self.heartbeat
    }

    pub fn set_heartbeat(&mut self, heartbeat: u32) -> &mut Self {
        self.heartbeat = Some(heartbeat);
        self
    }

    pub fn max_frame_size(&self) -> Option<u32> {
        self.max_frame_size
    }

    pub fn set_max_frame_size(&mut self, max_frame_size: u32) -> &mut Self {
        self.max_frame_size = Some(max_frame_size);
        self
    }

    /// Virtual host advertised on connection open. `None` means the TCP
    /// connection hostname is used.
    pub fn virtual_host(&self) -> Option<&str> {
        self.virtual_host.as_deref()
    }

    pub fn set_virtual_host(&mut self, virtual_host: Option<String>) -> &mut Self {
        self.virtual_host = virtual_host;
        self
    }

    pub fn enabled_sasl_mechanisms(&self) -> &[String] {
        &self.enabled_sasl_mechanisms
    }

    pub fn add_enabled_sasl_mechanism(&mut self, mechanism: impl Into<String>) -> &mut Self {
        self.enabled_sasl_mechanisms.push(mechanism.into());
        self
    }

    pub fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    pub fn set_reconnect_attempts(&mut self, attempts: u32) -> &mut Self {
        self.reconnect_attempts = attempts;
        self
    }

    /// Delay between reconnect attempts in milliseconds.
    pub fn reconnect_interval(&self) -> u64 {
        self.reconnect_interval
    }

    pub fn set_reconnect_interval(&mut self, interval: u64) -> &mut Self {
        self.reconnect_interval = interval;
        self
    }

    pub fn metrics_name(&self) -> Option<&str> {
        self.metrics_name.as_deref()
    }

    pub fn set_metrics_name(&mut self, metrics_name: Option<String>) -> &mut Self {
        self.metrics_name = metrics_name;
        self
    }

    pub fn log_activity(&self) -> bool {
        self.log_activity
    }

    pub fn set_log_activity(&mut self, log_activity: bool) -> &mut Self {
        self.log_activity = log_activity;
        self
    }

    /// Local address the socket binds to before connecting.
    pub fn local_address(&self) -> Option<&str> {
        self.local_address.as_deref()
    }

    pub fn set_local_address(&mut self, local_address: Option<String>) -> &mut Self {
        self.local_address = local_address;
        self
    }
}
