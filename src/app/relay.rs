use crate::adapters::{ConsoleStatus, HttpTransport, JsonLinesSource, TrackingOptions};
use crate::core::engine::{RelayEngine, RunSummary};
use crate::core::frame::FrameProcessor;
use crate::core::reporter::Reporter;
use crate::core::{ConfigProvider, StatusSink};
use crate::utils::error::Result;
use std::sync::Arc;

/// 組裝重播來源、HTTP 回報與主控台狀態後執行
pub async fn run_replay<C: ConfigProvider>(config: &C, frames: &str) -> Result<RunSummary> {
    let status: Arc<dyn StatusSink> = Arc::new(ConsoleStatus::new());
    run_replay_with_status(config, frames, status).await
}

pub async fn run_replay_with_status<C: ConfigProvider>(
    config: &C,
    frames: &str,
    status: Arc<dyn StatusSink>,
) -> Result<RunSummary> {
    let options = TrackingOptions::SINGLE_HAND;
    tracing::info!(
        "🖐️ Tracking options: max_num_hands={}, model_complexity={}, min_detection_confidence={}, min_tracking_confidence={}",
        options.max_num_hands,
        options.model_complexity,
        options.min_detection_confidence,
        options.min_tracking_confidence
    );

    let transport = HttpTransport::new(config.report_endpoint(), config.request_timeout())?;
    tracing::info!("📡 Reporting gestures to: {}", transport.endpoint());

    let reporter = Reporter::new(Arc::new(transport));
    let processor = FrameProcessor::new(status, reporter.clone());
    let source = JsonLinesSource::from_arg(frames, options).await?;

    let mut engine = RelayEngine::new(source, processor).with_frame_interval(config.frame_interval());
    // 來源出錯時也先給已送出的回報寬限時間
    let outcome = engine.run().await;

    if reporter.in_flight() > 0 {
        tracing::info!("⏳ Waiting for {} in-flight report(s)", reporter.in_flight());
    }
    reporter.wait_idle(config.shutdown_grace()).await;

    outcome
}
