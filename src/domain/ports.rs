use crate::domain::model::{HandFrame, ReportPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Per-frame hand tracker output. `Ok(None)` ends the stream.
#[async_trait]
pub trait LandmarkSource: Send {
    async fn next_frame(&mut self) -> Result<Option<HandFrame>>;
}

pub trait StatusSink: Send + Sync {
    fn show(&self, text: &str);
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &ReportPayload) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn report_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn frame_interval(&self) -> Option<Duration>;
    fn shutdown_grace(&self) -> Duration;
}
