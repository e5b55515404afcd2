use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

// Kept in sync with src/constants.rs
const STATUS_TOPIC_SUFFIX: &str = "/status";
const MAX_TOPIC_LEN: usize = 128;
const MAX_CLIENT_ID_LEN: usize = 23;

#[derive(Deserialize)]
struct RawConfig {
    wifi_ssid: String,
    wifi_psk: String,
    mqtt_hostname: String,
    mqtt_port: u16,
    mqtt_username: String,
    mqtt_password: String,
    mqtt_client_id: String,
    mqtt_base_topic: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let mut raw: RawConfig = toml::from_str(&toml_str)?;

    apply_env_overrides(&mut raw)?;
    validate(&raw)?;

    // Derived once here; the firmware never recomputes it
    let status_topic = format!("{}{}", raw.mqtt_base_topic, STATUS_TOPIC_SUFFIX);

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            mqtt_hostname: {mh:?},
            mqtt_port: {mp},
            mqtt_username: {mu:?},
            mqtt_password: {mpw:?},
            mqtt_client_id: {cid:?},
            mqtt_base_topic: {base:?},
            mqtt_status_topic: {status:?},
        }};
    "#,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        mh = raw.mqtt_hostname,
        mp = raw.mqtt_port,
        mu = raw.mqtt_username,
        mpw = raw.mqtt_password,
        cid = raw.mqtt_client_id,
        base = raw.mqtt_base_topic,
        status = status_topic
    );

    fs::write(dest_path, code)?;
    Ok(())
}

// Real credentials come in through the environment at build time so that
// cfg.toml can stay placeholder-only in version control.
fn apply_env_overrides(raw: &mut RawConfig) -> Result<(), Box<dyn Error>> {
    let overrides = [
        ("WIFI_SSID", &mut raw.wifi_ssid),
        ("WIFI_PSK", &mut raw.wifi_psk),
        ("MQTT_HOSTNAME", &mut raw.mqtt_hostname),
        ("MQTT_USERNAME", &mut raw.mqtt_username),
        ("MQTT_PASSWORD", &mut raw.mqtt_password),
        ("MQTT_CLIENT_ID", &mut raw.mqtt_client_id),
        ("MQTT_BASE_TOPIC", &mut raw.mqtt_base_topic),
    ];
    for (name, slot) in overrides {
        println!("cargo:rerun-if-env-changed={name}");
        if let Ok(value) = env::var(name) {
            *slot = value;
        }
    }

    println!("cargo:rerun-if-env-changed=MQTT_PORT");
    if let Ok(value) = env::var("MQTT_PORT") {
        raw.mqtt_port = value
            .parse()
            .map_err(|_| format!("MQTT_PORT override is not a valid port: {value:?}"))?;
    }

    Ok(())
}

// Misprovisioning fails the build, never the device. wifi_psk and the mqtt
// credentials may legitimately be empty (open network, anonymous broker).
fn validate(raw: &RawConfig) -> Result<(), Box<dyn Error>> {
    require_non_empty("wifi_ssid", &raw.wifi_ssid)?;
    require_non_empty("mqtt_hostname", &raw.mqtt_hostname)?;
    require_non_empty("mqtt_client_id", &raw.mqtt_client_id)?;
    require_non_empty("mqtt_base_topic", &raw.mqtt_base_topic)?;

    if raw.mqtt_port == 0 {
        return Err("mqtt_port must be in 1..=65535".into());
    }

    if raw.mqtt_client_id.len() > MAX_CLIENT_ID_LEN {
        return Err(format!(
            "mqtt_client_id {:?} exceeds {} bytes, which older brokers reject",
            raw.mqtt_client_id, MAX_CLIENT_ID_LEN
        )
        .into());
    }

    let base = &raw.mqtt_base_topic;
    if base.contains(['#', '+', '\0']) {
        return Err(format!("mqtt_base_topic {base:?} must not contain wildcards or NUL").into());
    }
    if base.ends_with('/') {
        return Err(format!("mqtt_base_topic {base:?} must not end with '/'").into());
    }
    if base.len() + STATUS_TOPIC_SUFFIX.len() > MAX_TOPIC_LEN {
        return Err(format!("mqtt_base_topic {base:?} leaves no room for the status suffix").into());
    }

    Ok(())
}

fn require_non_empty(name: &str, value: &str) -> Result<(), Box<dyn Error>> {
    if value.is_empty() {
        return Err(format!("{name} must not be empty").into());
    }
    Ok(())
}
