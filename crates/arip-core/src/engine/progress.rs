use crate::core::io::models::ModelIndex;
use crate::engine::pipeline::ModelOutcome;

#[derive(Debug, Clone)]
pub enum Progress {
    BatchStart { total_files: u64 },
    FileStart { name: String },
    ModelFinish { index: ModelIndex, outcome: ModelOutcome },
    FileFinish,
    FileFailed { name: String },
    BatchFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn reporter_without_callback_ignores_events() {
        ProgressReporter::new().report(Progress::BatchFinish);
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(format!("{:?}", event));
        }));

        reporter.report(Progress::BatchStart { total_files: 2 });
        reporter.report(Progress::Message("hello".to_string()));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("total_files: 2"));
        assert!(seen[1].contains("hello"));
    }
}
