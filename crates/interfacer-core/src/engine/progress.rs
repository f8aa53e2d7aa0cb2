use std::fmt;

/// A step of the per-identifier analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ParsingRecords,
    ResolvingBackground,
    Scoring,
    WritingTables,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ParsingRecords => "Parsing delta records",
            Self::ResolvingBackground => "Resolving background",
            Self::Scoring => "Scoring interface",
            Self::WritingTables => "Writing tables",
        })
    }
}

/// Events carry the identifier they belong to, since batches may run concurrently.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    BatchStart { total: u64 },
    StageStart { identifier: String, stage: Stage },
    Completed { identifier: String },
    Failed { identifier: String, reason: String },
    BatchFinish,
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

    pub(crate) fn stage(&self, identifier: &str, stage: Stage) {
        self.report(Progress::StageStart {
            identifier: identifier.to_string(),
            stage,
        });
    }
}
