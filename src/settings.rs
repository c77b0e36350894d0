use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_INPUT_PATH: &str = "csv/content_rows.csv";

/// Which generation of the heuristics to run. `Baseline` reproduces the first
/// processor (lower confidences, no boilerplate stripping, `extracted` kind).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Baseline,
    #[default]
    Enhanced,
}

impl Variant {
    pub fn default_output_path(self) -> &'static str {
        match self {
            Variant::Baseline => "populated_data.sql",
            Variant::Enhanced => "populated_data_improved.sql",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default)]
    pub variant: Variant,
}

impl Settings {
    /// Defaults overlaid with `SIMAN_INPUT_PATH`, `SIMAN_OUTPUT_PATH` and
    /// `SIMAN_VARIANT`.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("input_path", DEFAULT_INPUT_PATH)?
            .add_source(Environment::with_prefix("SIMAN"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.variant.default_output_path()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: None,
            variant: Variant::default(),
        }
    }
}
