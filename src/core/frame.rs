use crate::core::classifier::classify;
use crate::core::reporter::Reporter;
use crate::domain::model::{GestureLabel, HandFrame};
use crate::domain::ports::StatusSink;
use std::sync::Arc;

/// Per-frame glue: presence check, classify, display, report.
pub struct FrameProcessor {
    status: Arc<dyn StatusSink>,
    reporter: Reporter,
}

impl FrameProcessor {
    pub fn new(status: Arc<dyn StatusSink>, reporter: Reporter) -> Self {
        Self { status, reporter }
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Runs to completion without awaiting the report it dispatches.
    pub fn process(&self, frame: &HandFrame) -> GestureLabel {
        let Some(landmarks) = frame.primary_hand() else {
            self.status.show(&GestureLabel::NoHand.status_text());
            return GestureLabel::NoHand;
        };

        let label = classify(Some(landmarks));
        self.status.show(&label.status_text());
        tracing::debug!("✋ Classified frame as '{}'", label);

        // fire-and-forget
        drop(self.reporter.report(label, landmarks));

        label
    }
}
