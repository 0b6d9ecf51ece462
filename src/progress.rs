// src/progress.rs
/// Lightweight progress reporting for the scrape pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one pipeline step completes.
    fn step_done(&mut self, _step: Step) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Fetch,
    Parse,
    Extract,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Fetch, Step::Parse, Step::Extract];

    pub fn label(&self) -> &'static str {
        match self {
            Step::Fetch => "Fetching page…",
            Step::Parse => "Locating table…",
            Step::Extract => "Extracting rows…",
        }
    }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
