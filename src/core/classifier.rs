use crate::domain::model::{
    GestureLabel, Landmark, HAND_LANDMARK_COUNT, INDEX_FINGER_PIP, INDEX_FINGER_TIP,
};

/// Fingertip must sit this far above the PIP joint (normalized units) to count as pointing.
pub const POINT_MARGIN: f64 = 0.03;

/// Maps one hand's landmarks to a gesture label.
///
/// Callers check hand presence first and use [`GestureLabel::NoHand`] themselves;
/// anything absent or shorter than the full skeleton is `Unknown` here.
/// Image y grows downward, so a smaller y means higher on screen.
pub fn classify(landmarks: Option<&[Landmark]>) -> GestureLabel {
    let landmarks = match landmarks {
        Some(points) if points.len() >= HAND_LANDMARK_COUNT => points,
        _ => return GestureLabel::Unknown,
    };

    let tip = landmarks[INDEX_FINGER_TIP];
    let pip = landmarks[INDEX_FINGER_PIP];

    if tip.y < pip.y - POINT_MARGIN {
        GestureLabel::Point
    } else {
        GestureLabel::OpenHand
    }
}
