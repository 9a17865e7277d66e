//! # Scan Configuration
//!
//! Surface and span budget for column coverage, loaded once at startup.
//!
//! ```toml
//! surface_width = 320
//! max_spans = 120
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LimitsError, LimitsResult};

/// Configuration for [`ScanCoverage`](crate::ScanCoverage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Width of the render surface in columns.
    pub surface_width: u16,
    /// Capacity of the span set used per scan.
    pub max_spans: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            surface_width: 320,
            max_spans: 120,
        }
    }
}

impl ScanConfig {
    /// Parses and validates a TOML document. Missing fields take their
    /// default values.
    ///
    /// # Errors
    ///
    /// [`LimitsError::InvalidConfig`] if the document does not parse or a
    /// value is out of range.
    pub fn from_toml_str(source: &str) -> LimitsResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| LimitsError::InvalidConfig(format!("Failed to parse scan config: {e}")))?;
        config.validate()?;

        tracing::debug!(
            "Scan config loaded: surface_width={}, max_spans={}",
            config.surface_width,
            config.max_spans
        );
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`LimitsError::InvalidConfig`] if the file cannot be read, does not
    /// parse, or holds an out-of-range value.
    pub fn from_toml_file(path: impl AsRef<Path>) -> LimitsResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            LimitsError::InvalidConfig(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks that the surface and span budget are usable.
    ///
    /// # Errors
    ///
    /// [`LimitsError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> LimitsResult<()> {
        if self.surface_width == 0 {
            return Err(LimitsError::InvalidConfig(
                "surface_width must be greater than zero".to_string(),
            ));
        }
        if self.max_spans == 0 {
            return Err(LimitsError::InvalidConfig(
                "max_spans must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
