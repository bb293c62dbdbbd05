use crate::domain::model::HandFrame;
use crate::domain::ports::LandmarkSource;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

/// Fixed hand tracker settings. Not configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingOptions {
    pub max_num_hands: usize,
    pub model_complexity: u8,
    pub min_detection_confidence: f64,
    pub min_tracking_confidence: f64,
}

impl TrackingOptions {
    pub const SINGLE_HAND: TrackingOptions = TrackingOptions {
        max_num_hands: 1,
        model_complexity: 0,
        min_detection_confidence: 0.6,
        min_tracking_confidence: 0.6,
    };

    /// 依信心分數過濾，再截斷到最多手數
    pub fn apply(&self, mut frame: HandFrame) -> HandFrame {
        if !frame.multi_handedness.is_empty()
            && frame.multi_handedness.len() == frame.multi_hand_landmarks.len()
        {
            let (hands, handedness): (Vec<_>, Vec<_>) = frame
                .multi_hand_landmarks
                .into_iter()
                .zip(frame.multi_handedness)
                .filter(|(_, h)| h.score >= self.min_detection_confidence)
                .unzip();
            frame.multi_hand_landmarks = hands;
            frame.multi_handedness = handedness;
        }

        frame.multi_hand_landmarks.truncate(self.max_num_hands);
        frame.multi_handedness.truncate(self.max_num_hands);
        frame
    }
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self::SINGLE_HAND
    }
}

type BoxedReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Replays recorded tracker output, one JSON object per line.
pub struct JsonLinesSource {
    lines: Lines<BoxedReader>,
    line_number: usize,
    options: TrackingOptions,
}

impl JsonLinesSource {
    pub fn from_reader<R>(reader: R, options: TrackingOptions) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let boxed: BoxedReader = Box::new(reader);
        Self {
            lines: boxed.lines(),
            line_number: 0,
            options,
        }
    }

    pub async fn open<P: AsRef<Path>>(path: P, options: TrackingOptions) -> Result<Self> {
        let file = tokio::fs::File::open(path.as_ref()).await?;
        tracing::debug!("📂 Replaying frames from {}", path.as_ref().display());
        Ok(Self::from_reader(BufReader::new(file), options))
    }

    pub fn stdin(options: TrackingOptions) -> Self {
        tracing::debug!("📥 Reading frames from stdin");
        Self::from_reader(BufReader::new(tokio::io::stdin()), options)
    }

    /// `-` 代表標準輸入
    pub async fn from_arg(input: &str, options: TrackingOptions) -> Result<Self> {
        if input == "-" {
            Ok(Self::stdin(options))
        } else {
            Self::open(input, options).await
        }
    }
}

#[async_trait]
impl LandmarkSource for JsonLinesSource {
    async fn next_frame(&mut self) -> Result<Option<HandFrame>> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let frame: HandFrame =
                serde_json::from_str(trimmed).map_err(|e| RelayError::FrameParseError {
                    line: self.line_number,
                    message: e.to_string(),
                })?;

            return Ok(Some(self.options.apply(frame)));
        }
    }
}
