/// Current crate version, published by the firmware in its status payload
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Suffix appended to the base topic to form the status topic
pub const STATUS_TOPIC_SUFFIX: &str = "/status";

/// Maximum length of a fully expanded topic string
pub const MAX_TOPIC_LEN: usize = 128;

/// Longest client identifier older brokers are guaranteed to accept
pub const MAX_CLIENT_ID_LEN: usize = 23;
