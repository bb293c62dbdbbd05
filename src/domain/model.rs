use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of points in the fixed hand skeleton.
pub const HAND_LANDMARK_COUNT: usize = 21;
pub const INDEX_FINGER_PIP: usize = 6;
pub const INDEX_FINGER_TIP: usize = 8;

/// One joint, normalized to the video frame (`z` is relative depth).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureLabel {
    Point,
    OpenHand,
    Unknown,
    #[serde(rename = "none")]
    NoHand,
}

impl GestureLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::Point => "point",
            GestureLabel::OpenHand => "open_hand",
            GestureLabel::Unknown => "unknown",
            GestureLabel::NoHand => "none",
        }
    }

    /// 顯示在狀態列的文字
    pub fn status_text(&self) -> String {
        format!("Gesture: {}", self.as_str())
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub label: GestureLabel,
    pub landmarks: Vec<Landmark>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handedness {
    pub score: f64,
    #[serde(default)]
    pub label: String,
}

/// Tracker output for a single video frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandFrame {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub multi_hand_landmarks: Vec<Vec<Landmark>>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub multi_handedness: Vec<Handedness>,
}

/// 追蹤器沒偵測到手時可能送出 `null`，視同空清單
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl HandFrame {
    pub fn no_hand() -> Self {
        Self::default()
    }

    pub fn single(landmarks: Vec<Landmark>) -> Self {
        Self {
            multi_hand_landmarks: vec![landmarks],
            multi_handedness: Vec::new(),
        }
    }

    /// First tracked hand, or `None` when nothing was detected.
    pub fn primary_hand(&self) -> Option<&[Landmark]> {
        self.multi_hand_landmarks.first().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serializes_as_wire_strings() {
        let labels = [
            GestureLabel::Point,
            GestureLabel::OpenHand,
            GestureLabel::Unknown,
            GestureLabel::NoHand,
        ];
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"["point","open_hand","unknown","none"]"#);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GestureLabel::NoHand.status_text(), "Gesture: none");
        assert_eq!(GestureLabel::OpenHand.status_text(), "Gesture: open_hand");
    }

    #[test]
    fn test_frame_without_hands_field_has_no_primary_hand() {
        let frame: HandFrame = serde_json::from_str("{}").unwrap();
        assert!(frame.primary_hand().is_none());

        let frame: HandFrame = serde_json::from_str(r#"{"multiHandLandmarks": []}"#).unwrap();
        assert!(frame.primary_hand().is_none());
    }

    #[test]
    fn test_null_hand_lists_mean_no_hand() {
        let frame: HandFrame =
            serde_json::from_str(r#"{"multiHandLandmarks": null, "multiHandedness": null}"#)
                .unwrap();
        assert!(frame.primary_hand().is_none());
        assert!(frame.multi_handedness.is_empty());
    }

    #[test]
    fn test_report_echoes_tracker_coordinates_exactly() {
        let frame: HandFrame = serde_json::from_str(
            r#"{"multiHandLandmarks":[[{"x":0.512345678901234,"y":0.25,"z":-0.0312345678901}]]}"#,
        )
        .unwrap();
        let payload = ReportPayload {
            label: GestureLabel::Unknown,
            landmarks: frame.primary_hand().unwrap().to_vec(),
        };

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"label":"unknown","landmarks":[{"x":0.512345678901234,"y":0.25,"z":-0.0312345678901}]}"#
        );
    }

    #[test]
    fn test_primary_hand_is_first_hand() {
        let first = vec![Landmark::new(0.1, 0.2, 0.0)];
        let second = vec![Landmark::new(0.9, 0.9, 0.0)];
        let frame = HandFrame {
            multi_hand_landmarks: vec![first.clone(), second],
            multi_handedness: Vec::new(),
        };
        assert_eq!(frame.primary_hand(), Some(first.as_slice()));
    }
}
