use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::evaluation::linearspacesampler::Endpoint;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration json: {0}")]
    JsonParse(#[from] serde_json::Error)
}

/// 引擎初始化參數。
///
/// ```json
/// { "max_sample_bound": 1000, "endpoint": "Inclusive" }
/// ```
///
/// 兩個欄位皆可省略：`max_sample_bound` 預設 `DEFAULT_SAMPLE_BOUND`，
/// 明確寫 `null` 才代表不限制 N / sample count；`endpoint` 預設 `Inclusive`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfiguration {
    max_sample_bound: Option<u64>,
    endpoint: Endpoint
}

pub const DEFAULT_SAMPLE_BOUND: u64 = 100_000;

impl Default for EngineConfiguration {
    fn default() -> Self {
        EngineConfiguration {
            max_sample_bound: Some(DEFAULT_SAMPLE_BOUND),
            endpoint: Endpoint::default()
        }
    }
}

impl EngineConfiguration {
    pub fn new(max_sample_bound: Option<u64>, endpoint: Endpoint) -> EngineConfiguration {
        EngineConfiguration { max_sample_bound, endpoint }
    }

    pub fn max_sample_bound(&self) -> Option<u64> {
        self.max_sample_bound
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<EngineConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<EngineConfiguration, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }
}
