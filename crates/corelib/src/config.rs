use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::range::IndexRange;

/// Ranges wider than this need explicit confirmation before a session starts.
pub const DEFAULT_MAX_SPAN: u64 = 10_000;

fn default_max_span() -> u64 {
    DEFAULT_MAX_SPAN
}

fn default_strict() -> bool {
    true
}

/// User/CLI-selected session settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    pub lower: i64,
    pub upper: i64,
    #[serde(default = "default_max_span")]
    pub max_span: u64, // confirmation threshold on upper - lower
    #[serde(default = "default_strict")]
    pub strict: bool, // reject guesses above `upper`
}

impl SessionConfig {
    pub fn new(lower: i64, upper: i64) -> Self {
        Self {
            lower,
            upper,
            max_span: DEFAULT_MAX_SPAN,
            strict: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.lower >= self.upper {
            return Err(anyhow!(
                "lower bound {} must be below upper bound {}",
                self.lower,
                self.upper
            ));
        }
        if self.max_span == 0 {
            return Err(anyhow!("max_span must be >= 1"));
        }
        Ok(())
    }

    pub fn range(&self) -> Result<IndexRange> {
        self.validate()?;
        Ok(IndexRange::new(self.lower, self.upper)?)
    }

    /// True when the range is wide enough to warrant a confirmation.
    pub fn exceeds_max_span(&self) -> bool {
        IndexRange::new_unchecked(self.lower, self.upper).span() > self.max_span
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: SessionConfig = toml::from_str(s).context("parsing session config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("loading config {}", path.display()))
    }
}
