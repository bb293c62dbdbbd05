pub mod relay;

pub use relay::{run_replay, run_replay_with_status};
