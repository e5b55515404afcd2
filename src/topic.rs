//! Topic namespace helpers.
//!
//! Every topic this node publishes lives under the provisioned base topic:
//! telemetry channels as `<base>/<channel>` (e.g. `InHouse_UNOR4_1/ntc1`)
//! and availability as `<base>/status`.

use core::fmt::Write;

use heapless::String;

use crate::config::CONFIG;
use crate::constants::{MAX_TOPIC_LEN, STATUS_TOPIC_SUFFIX};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptySegment,
    InvalidCharacter,
    TopicTooLong,
}

/// A topic is publishable if it is non-empty, fits the namespace bound and
/// carries no MQTT wildcards or NUL bytes.
pub fn is_valid_topic(topic: &str) -> bool {
    !topic.is_empty() && topic.len() <= MAX_TOPIC_LEN && !topic.contains(['#', '+', '\0'])
}

/// Status topic for an arbitrary base, `<base>/status`.
///
/// The provisioned status topic is already derived once at build time; this
/// applies the same rule to any base.
pub fn status_topic(base: &str) -> Result<String<MAX_TOPIC_LEN>, Error> {
    if base.is_empty() {
        return Err(Error::EmptySegment);
    }
    let mut topic: String<MAX_TOPIC_LEN> = String::new();
    write!(topic, "{base}{STATUS_TOPIC_SUFFIX}").map_err(|_| Error::TopicTooLong)?;
    if !is_valid_topic(&topic) {
        return Err(Error::InvalidCharacter);
    }
    Ok(topic)
}

/// Join `base` and a single-level `leaf` into `<base>/<leaf>`.
pub fn child_topic(base: &str, leaf: &str) -> Result<String<MAX_TOPIC_LEN>, Error> {
    if base.is_empty() || leaf.is_empty() {
        return Err(Error::EmptySegment);
    }
    if leaf.contains('/') {
        return Err(Error::InvalidCharacter);
    }
    let mut topic: String<MAX_TOPIC_LEN> = String::new();
    write!(topic, "{base}/{leaf}").map_err(|_| Error::TopicTooLong)?;
    if !is_valid_topic(&topic) {
        return Err(Error::InvalidCharacter);
    }
    Ok(topic)
}

/// Telemetry topic for one channel of this node, `<base>/<channel>`.
pub fn telemetry_topic(channel: &str) -> Result<String<MAX_TOPIC_LEN>, Error> {
    child_topic(CONFIG.mqtt_base_topic, channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_topic_appends_the_fixed_suffix() {
        let topic = status_topic("InHouse_UNOR4_1").unwrap();
        assert_eq!(topic.as_str(), "InHouse_UNOR4_1/status");
    }

    #[test]
    fn status_topic_rejects_empty_base() {
        assert_eq!(status_topic(""), Err(Error::EmptySegment));
    }

    #[test]
    fn child_topic_joins_with_a_single_slash() {
        let topic = child_topic("InHouse_UNOR4_1", "ntc1").unwrap();
        assert_eq!(topic.as_str(), "InHouse_UNOR4_1/ntc1");
    }

    #[test]
    fn wildcards_are_rejected() {
        assert_eq!(child_topic("nodes/#", "ntc1"), Err(Error::InvalidCharacter));
        assert_eq!(child_topic("nodes", "+"), Err(Error::InvalidCharacter));
        assert!(!is_valid_topic("nodes/+/status"));
    }

    #[test]
    fn leaf_may_not_nest() {
        assert_eq!(child_topic("nodes", "a/b"), Err(Error::InvalidCharacter));
    }

    #[test]
    fn overlong_topics_are_rejected() {
        let base: std::string::String = core::iter::repeat('x').take(MAX_TOPIC_LEN).collect();
        assert_eq!(status_topic(&base), Err(Error::TopicTooLong));
        assert_eq!(child_topic(&base, "ntc1"), Err(Error::TopicTooLong));
    }

    #[test]
    fn telemetry_topic_lives_under_the_provisioned_base() {
        let topic = telemetry_topic("ntc1").unwrap();
        assert!(topic.starts_with(CONFIG.mqtt_base_topic));
        assert!(topic.ends_with("/ntc1"));
    }
}
