use crate::core::ConfigProvider;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{
    validate_frame_input, validate_range, validate_required_field, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    #[serde(default)]
    pub source: SourceConfig,
    pub runtime: Option<RuntimeConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub frames: Option<String>,
    pub frame_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub shutdown_grace_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RelayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_HOST})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RelayError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn frames(&self) -> &str {
        self.source.frames.as_deref().unwrap_or("-")
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.verbose).unwrap_or(false)
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn report_endpoint(&self) -> &str {
        self.report.endpoint.as_deref().unwrap_or_default()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.report.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn frame_interval(&self) -> Option<Duration> {
        self.source.frame_interval_ms.map(Duration::from_millis)
    }

    fn shutdown_grace(&self) -> Duration {
        let millis = self
            .runtime
            .as_ref()
            .and_then(|r| r.shutdown_grace_ms)
            .unwrap_or(DEFAULT_SHUTDOWN_GRACE_MS);
        Duration::from_millis(millis)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let endpoint = validate_required_field("report.endpoint", &self.report.endpoint)?;
        validate_url("report.endpoint", endpoint)?;

        if let Some(timeout) = self.report.timeout_seconds {
            validate_range("report.timeout_seconds", timeout, 1, 300)?;
        }
        validate_frame_input("source.frames", self.frames())?;
        if let Some(interval) = self.source.frame_interval_ms {
            validate_range("source.frame_interval_ms", interval, 0, 10_000)?;
        }
        if let Some(grace) = self.runtime.as_ref().and_then(|r| r.shutdown_grace_ms) {
            validate_range("runtime.shutdown_grace_ms", grace, 0, 60_000)?;
        }

        tracing::debug!("✅ TOML configuration validation passed");
        Ok(())
    }
}
