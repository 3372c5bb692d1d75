// src/progress.rs
/// Lightweight progress reporting used by the run (fetch/parse/export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a stage with the number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a league table, a team schedule).
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
