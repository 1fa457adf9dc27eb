use crate::capture::BurstResult;
use crate::frame::Frame;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Capturing,
    Selecting,
    Cropping,
    Enhancing,
    RedFree,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capturing => write!(f, "Capturing burst"),
            Self::Selecting => write!(f, "Selecting sharpest frame"),
            Self::Cropping => write!(f, "Cropping"),
            Self::Enhancing => write!(f, "Enhancing contrast"),
            Self::RedFree => write!(f, "Red-free conversion"),
        }
    }
}

/// Result of one capture session.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    /// The whole burst with its scores.
    pub burst: BurstResult,
    /// The sharpest frame after the optional crop and enhancement steps.
    pub image: Frame,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., burst grabs), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
