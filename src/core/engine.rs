use crate::core::frame::FrameProcessor;
use crate::domain::model::GestureLabel;
use crate::domain::ports::LandmarkSource;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    pub hands_detected: usize,
    pub reports_dispatched: usize,
    pub labels: BTreeMap<GestureLabel, usize>,
}

impl RunSummary {
    fn record(&mut self, label: GestureLabel) {
        self.frames += 1;
        if label != GestureLabel::NoHand {
            self.hands_detected += 1;
            self.reports_dispatched += 1;
        }
        *self.labels.entry(label).or_insert(0) += 1;
    }
}

pub struct RelayEngine<S: LandmarkSource> {
    source: S,
    processor: FrameProcessor,
    frame_interval: Option<Duration>,
}

impl<S: LandmarkSource> RelayEngine<S> {
    pub fn new(source: S, processor: FrameProcessor) -> Self {
        Self {
            source,
            processor,
            frame_interval: None,
        }
    }

    /// 重播時模擬攝影機的影格間隔
    pub fn with_frame_interval(mut self, interval: Option<Duration>) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn processor(&self) -> &FrameProcessor {
        &self.processor
    }

    /// Processes frames one at a time until the source is exhausted.
    pub async fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("🎬 Starting gesture relay");
        let mut summary = RunSummary::default();

        while let Some(frame) = self.source.next_frame().await? {
            let label = self.processor.process(&frame);
            summary.record(label);

            if let Some(interval) = self.frame_interval {
                tokio::time::sleep(interval).await;
            } else {
                // 讓出執行權，回報任務才能在影格之間推進
                tokio::task::yield_now().await;
            }
        }

        tracing::info!(
            "🏁 Processed {} frames ({} with a hand, {} reports dispatched)",
            summary.frames,
            summary.hands_detected,
            summary.reports_dispatched
        );
        Ok(summary)
    }
}
