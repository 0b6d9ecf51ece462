// src/gui/progress.rs
use crate::progress::{Progress, Step};

/// Writes pipeline progress into the status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    total: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&mut self, msg: impl Into<String>) {
        *self.status = msg.into();
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn step_done(&mut self, step: Step) {
        self.done += 1;
        logd!("GUI: step done {step:?} ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        if self.done < self.total {
            self.set_status(format!("Stopped at step {}/{}", self.done + 1, self.total));
        } else {
            self.set_status(s!("Scrape complete"));
        }
    }
}
