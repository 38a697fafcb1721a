// src/progress.rs
/// Lightweight progress reporting for the avatar stage.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of regular records.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one record's avatar is settled (cached, fetched, or fallen back).
    fn item_done(&mut self, _callsign: &str) {}

    /// Called at the end.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Collects log lines. Handy in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, callsign: &str) { self.done.push(s!(callsign)); }
    fn finish(&mut self) { self.finished = true; }
}
