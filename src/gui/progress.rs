// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Mirrors stage progress onto the status line.
/// Multi-line messages (reports) only show their first line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        let first = msg.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
        self.set_status(s!(first.trim()));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", label, self.done, self.total));
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.done += 1;
        self.set_status(format!("Skipped {}: {} ({}/{})", label, reason, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch complete")); // no counts if we never began
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}
