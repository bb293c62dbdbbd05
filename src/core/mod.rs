pub mod classifier;
pub mod engine;
pub mod frame;
pub mod reporter;

pub use crate::domain::model::{GestureLabel, HandFrame, Landmark, ReportPayload};
pub use crate::domain::ports::{ConfigProvider, LandmarkSource, StatusSink, Transport};
pub use crate::utils::error::Result;
