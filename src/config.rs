use crate::constants::VERSION;

pub struct Config {
    // MQTT base topic; telemetry publishes under <base>/<channel>
    pub mqtt_base_topic: &'static str,

    // MQTT client identifier, must be unique per broker
    pub mqtt_client_id: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_hostname: &'static str,

    // MQTT password for authentication
    pub mqtt_password: &'static str,

    // MQTT port (usually 1883 or 8883 for TLS)
    pub mqtt_port: u16,

    // MQTT status topic, derived from the base topic at build time
    pub mqtt_status_topic: &'static str,

    // MQTT username for authentication
    pub mqtt_username: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,
}

impl Config {
    /// Log a one-line summary of the active configuration at startup.
    pub fn log_summary(&self) {
        log::info!("active configuration (v{}): {}", VERSION, self);
    }
}

// No Debug derive: a derived dump would print the PSK and broker password
// verbatim. Display masks both.
impl core::fmt::Display for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ssid {:?}, broker {}:{}, user {:?}, client id {:?}, base topic {:?}",
            self.wifi_ssid,
            self.mqtt_hostname,
            self.mqtt_port,
            self.mqtt_username,
            self.mqtt_client_id,
            self.mqtt_base_topic
        )
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

#[cfg(test)]
mod tests {
    use super::CONFIG;
    use crate::constants::{MAX_CLIENT_ID_LEN, STATUS_TOPIC_SUFFIX};

    #[test]
    fn status_topic_is_derived_from_base_topic() {
        let expected = format!("{}{}", CONFIG.mqtt_base_topic, STATUS_TOPIC_SUFFIX);
        assert_eq!(CONFIG.mqtt_status_topic, expected);
    }

    #[test]
    fn required_fields_are_provisioned() {
        assert!(!CONFIG.wifi_ssid.is_empty());
        assert!(!CONFIG.mqtt_hostname.is_empty());
        assert!(!CONFIG.mqtt_client_id.is_empty());
        assert!(!CONFIG.mqtt_base_topic.is_empty());
        assert!(CONFIG.mqtt_client_id.len() <= MAX_CLIENT_ID_LEN);
    }

    #[test]
    fn port_is_a_valid_tcp_port() {
        // u16 already bounds the upper end at 65535
        assert!(CONFIG.mqtt_port >= 1);
    }

    #[test]
    fn summary_masks_secrets() {
        let summary = format!("{}", CONFIG);
        assert!(summary.contains(CONFIG.mqtt_hostname));
        assert!(summary.contains(CONFIG.mqtt_client_id));
        if !CONFIG.wifi_psk.is_empty() {
            assert!(!summary.contains(CONFIG.wifi_psk));
        }
        if !CONFIG.mqtt_password.is_empty() {
            assert!(!summary.contains(CONFIG.mqtt_password));
        }
    }
}
