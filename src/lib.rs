//! Build-time device configuration for InHouse telemetry nodes.
//!
//! The node firmware links against this crate to read its WiFi credentials,
//! MQTT broker parameters and topic namespace. Values are provisioned through
//! `cfg.toml` (each field overridable via an environment variable) and baked
//! in by the build script; nothing mutates at runtime.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod topic;

pub use config::{Config, CONFIG};
