use crate::domain::ports::StatusSink;
use std::sync::Mutex;

/// Prints the status line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleStatus {
    last: Mutex<Option<String>>,
}

impl ConsoleStatus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusSink for ConsoleStatus {
    fn show(&self, text: &str) {
        // 狀態沒變就不重複輸出
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if last.as_deref() == Some(text) {
            return;
        }
        println!("{}", text);
        tracing::debug!("Status: {}", text);
        *last = Some(text.to_string());
    }
}
