use crate::domain::model::Endpoint;
use crate::utils::error::{MonitorError, Result};
use crate::utils::validation::{validate_url, Validate};
use std::path::Path;

/// Endpoint list loaded from a YAML file.
///
/// The file is a plain sequence of endpoint records; `method`, `headers`
/// and `body` may be omitted per record.
#[derive(Debug, Clone)]
pub struct YamlConfig {
    pub endpoints: Vec<Endpoint>,
}

impl YamlConfig {
    /// 從 YAML 檔案載入端點清單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MonitorError::IoError)?;
        Self::from_yaml_str(&content)
    }

    /// 從 YAML 字串解析端點清單
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let endpoints: Vec<Endpoint> = serde_yaml::from_str(content)?;
        Ok(Self { endpoints })
    }
}

impl Validate for YamlConfig {
    fn validate(&self) -> Result<()> {
        if self.endpoints.is_empty() {
            return Err(MonitorError::ConfigError {
                message: "endpoint list is empty".to_string(),
            });
        }
        for endpoint in &self.endpoints {
            validate_url("url", &endpoint.url)?;
        }
        Ok(())
    }
}
