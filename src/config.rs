use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Operands fed to the demo routine
///
/// Can be loaded from a TOML file such as:
/// ```toml
/// lhs = 1.0
/// rhs = 2.0
/// ```
/// Missing keys take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Operands {
    /// Left-hand side, defaults to `1.0`
    pub lhs: f64,
    /// Right-hand side, defaults to `2.0`
    pub rhs: f64,
}

impl Default for Operands {
    fn default() -> Self {
        Self { lhs: 1.0, rhs: 2.0 }
    }
}

impl Operands {
    pub fn new(lhs: f64, rhs: f64) -> Self {
        Self { lhs, rhs }
    }

    /// Read and parse operands from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::debug!("loading operands from '{}'", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let operands = Self::parse(&content)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        log::debug!("loaded operands: {operands:?}");
        Ok(operands)
    }

    /// Parse operands from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let operands = toml::from_str::<Self>(content)?;
        Ok(operands)
    }

    /// Replace the operands that are given, keeping the rest
    pub fn with_overrides(mut self, lhs: Option<f64>, rhs: Option<f64>) -> Self {
        if let Some(lhs) = lhs {
            log::trace!("overriding lhs: {} -> {lhs}", self.lhs);
            self.lhs = lhs;
        }
        if let Some(rhs) = rhs {
            log::trace!("overriding rhs: {} -> {rhs}", self.rhs);
            self.rhs = rhs;
        }
        self
    }
}
