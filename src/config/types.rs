//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::classify::{DEFAULT_MIN_PRINTABLE_RATIO, DEFAULT_SAMPLE_SIZE};
use crate::clipboard::{DEFAULT_SENTINEL, DEFAULT_SETTLE_DELAY};
use crate::source::decode::DEFAULT_LADDER;
use crate::source::{Encoding, MAX_CONTENT_SIZE};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub binary: BinaryConfig,
    #[serde(default)]
    pub verify: VerifyConfig,
}

/// Input limits and decoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Largest accepted input in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Decode attempts, in order
    #[serde(default = "default_encodings")]
    pub encodings: Vec<Encoding>,
}

pub fn default_max_file_size() -> u64 {
    MAX_CONTENT_SIZE
}

pub fn default_encodings() -> Vec<Encoding> {
    DEFAULT_LADDER.to_vec()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            encodings: default_encodings(),
        }
    }
}

/// Binary detection and the forced-preview fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryConfig {
    /// Characters sampled for the printable-density check
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Minimum printable share of the sample
    #[serde(default = "default_min_printable_ratio")]
    pub min_printable_ratio: f64,
    /// Raw bytes shown when a binary input is force-copied
    #[serde(default = "default_preview_bytes")]
    pub preview_bytes: usize,
}

pub fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

pub fn default_min_printable_ratio() -> f64 {
    DEFAULT_MIN_PRINTABLE_RATIO
}

pub fn default_preview_bytes() -> usize {
    100
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            min_printable_ratio: default_min_printable_ratio(),
            preview_bytes: default_preview_bytes(),
        }
    }
}

/// Clipboard self-test settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Pause before reading the sentinel back, in milliseconds
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Value written and read back by the self-test
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

pub fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY.as_millis() as u64
}

pub fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            sentinel: default_sentinel(),
        }
    }
}

impl VerifyConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
