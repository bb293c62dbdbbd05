use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_frame_input, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gesture-relay")]
#[command(about = "Classify recorded hand landmarks and relay gestures to a server")]
pub struct CliConfig {
    #[arg(long, default_value = "-", help = "JSON-lines frame file, or - for stdin")]
    pub frames: String,

    #[arg(long, default_value = "http://127.0.0.1:5000/api/gesture/predict")]
    pub endpoint: String,

    #[arg(long, default_value = "5")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Delay between replayed frames")]
    pub frame_interval_ms: Option<u64>,

    #[arg(long, default_value = "2000")]
    pub shutdown_grace_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn report_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn frame_interval(&self) -> Option<Duration> {
        self.frame_interval_ms.map(Duration::from_millis)
    }

    fn shutdown_grace(&self) -> Duration {
        Duration::from_millis(self.shutdown_grace_ms)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_frame_input("frames", &self.frames)?;
        validate_url("endpoint", &self.endpoint)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        if let Some(interval) = self.frame_interval_ms {
            validate_range("frame_interval_ms", interval, 0, 10_000)?;
        }
        validate_range("shutdown_grace_ms", self.shutdown_grace_ms, 0, 60_000)?;
        Ok(())
    }
}
