// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod replay;
pub mod status;

pub use http::HttpTransport;
pub use replay::{JsonLinesSource, TrackingOptions};
pub use status::ConsoleStatus;
