use crate::error::FixtureError;
use crate::fake::{DEFAULT_PAST_DAYS, MAX_PAST_DAYS};
use crate::result::FixtureResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://images.u10.teba-saki.net";
pub const DEFAULT_DATA_DIR_NAME: &str = "data";
pub const DEFAULT_TITLE_WORDS: usize = 3;

/// What to do when the fixture file itself cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WritePolicy {
    /// Return the I/O error to the caller.
    #[default]
    Propagate,
    /// Log the failure and report the save as not written.
    LogAndContinue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub image_base_url: String,
    pub title_words: usize,
    pub past_days: u32,
    pub seed: Option<u64>,
    pub data_dir_name: String,
    pub write_policy: WritePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            title_words: DEFAULT_TITLE_WORDS,
            past_days: DEFAULT_PAST_DAYS,
            seed: None,
            data_dir_name: DEFAULT_DATA_DIR_NAME.to_string(),
            write_policy: WritePolicy::Propagate,
        }
    }
}

impl GeneratorConfig {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> FixtureResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(input: &str) -> FixtureResult<Self> {
        let config: GeneratorConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FixtureResult<()> {
        if self.image_base_url.is_empty() {
            return Err(FixtureError::Config("imageBaseUrl must not be empty".to_string()));
        }
        if self.image_base_url.ends_with('/') {
            return Err(FixtureError::Config(format!(
                "imageBaseUrl must not end with '/': {}",
                self.image_base_url
            )));
        }
        if self.title_words == 0 {
            return Err(FixtureError::Config("titleWords must be positive".to_string()));
        }
        if self.past_days == 0 {
            return Err(FixtureError::Config("pastDays must be positive".to_string()));
        }
        if self.past_days > MAX_PAST_DAYS {
            return Err(FixtureError::Config(format!(
                "pastDays must be at most {}: {}",
                MAX_PAST_DAYS, self.past_days
            )));
        }
        if self.data_dir_name.is_empty()
            || self.data_dir_name.contains(['/', '\\'])
            || self.data_dir_name == ".."
        {
            return Err(FixtureError::Config(format!(
                "dataDirName must be a single directory name: {:?}",
                self.data_dir_name
            )));
        }
        Ok(())
    }
}
