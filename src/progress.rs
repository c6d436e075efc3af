// src/progress.rs
/// Lightweight progress reporting used by the pipeline stages.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a category was scraped).
    fn item_done(&mut self, _label: &str) {}

    /// Called when one logical unit failed and was skipped.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints every event as a line on stdout (CLI).
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        println!("  ✔ {label} ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.done += 1;
        println!("  ✘ {label}: {reason} ({}/{})", self.done, self.total);
    }
}

/// Log through an optional sink without repeating the `if let` at each call site.
pub(crate) fn say(progress: &mut Option<&mut dyn Progress>, msg: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
    }
}
