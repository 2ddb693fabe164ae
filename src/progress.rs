use std::sync::mpsc::Sender;

use crate::messages;

/// One advisory progress update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub percent: u8,
    pub label: String,
}

impl Progress {
    pub fn new(percent: u8, label: impl Into<String>) -> Self {
        Self {
            percent: percent.min(100),
            label: label.into(),
        }
    }

    /// Progress after finishing the 1-based `page` of `page_count`.
    pub fn page(page: usize, page_count: usize) -> Self {
        let percent = if page_count == 0 {
            100
        } else {
            (page as f64 / page_count as f64 * 100.0).round() as u8
        };
        Self::new(percent, messages::page_label(page, page_count))
    }

    pub fn done() -> Self {
        Self::new(100, messages::DONE)
    }
}

/// Receives progress updates in the order the pipeline emits them.
pub trait ProgressSink {
    fn report(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressSink for F {
    fn report(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Publishes progress on a channel, for callers driving the pipeline from
/// another thread. A dropped receiver is ignored.
pub struct ChannelProgress(pub Sender<Progress>);

impl ProgressSink for ChannelProgress {
    fn report(&mut self, progress: Progress) {
        let _ = self.0.send(progress);
    }
}
