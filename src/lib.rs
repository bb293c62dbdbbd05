pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{ConsoleStatus, HttpTransport, JsonLinesSource, TrackingOptions};
pub use crate::core::{
    classifier::classify,
    engine::{RelayEngine, RunSummary},
    frame::FrameProcessor,
    reporter::Reporter,
};
pub use domain::model::{GestureLabel, HandFrame, Landmark, ReportPayload};
pub use utils::error::{RelayError, Result};
