//! Configuration management

mod io;
mod types;

pub use io::CONFIG_ENV;
pub use types::*;

use anyhow::Result;
use std::path::Path;

use crate::classify::Classifier;
use crate::source::{Ladder, LadderError};

impl Config {
    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Check value ranges. Returns a message naming the offending key.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.max_file_size == 0 {
            return Err("input.max_file_size must be greater than 0".to_string());
        }
        self.ladder()
            .map_err(|e| format!("input.encodings: {}", e))?;
        if self.binary.sample_size == 0 {
            return Err("binary.sample_size must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.binary.min_printable_ratio) {
            return Err(format!(
                "binary.min_printable_ratio must be between 0.0 and 1.0, got {}",
                self.binary.min_printable_ratio
            ));
        }
        if self.verify.sentinel.trim().is_empty() {
            return Err("verify.sentinel must not be empty".to_string());
        }
        Ok(())
    }

    /// The configured decode ladder
    pub fn ladder(&self) -> Result<Ladder, LadderError> {
        Ladder::new(&self.input.encodings)
    }

    /// The configured binary classifier
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.binary.sample_size, self.binary.min_printable_ratio)
    }
}
