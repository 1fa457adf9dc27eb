use std::thread;
use std::time::Duration;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::consts::{DEFAULT_BURST_COUNT, DEFAULT_INTER_FRAME_DELAY_MS};
use crate::error::{FundusError, Result};
use crate::frame::{Frame, ScoredFrame, SharpnessScore};
use crate::quality::laplacian::sharpness;

/// Anything that can hand out still frames from a live camera.
///
/// `Ok(None)` means no frame was available for this grab. The burst keeps
/// going and tries the remaining slots.
pub trait FrameSource {
    fn take_frame(&mut self) -> Result<Option<Frame>>;
}

impl<F> FrameSource for F
where
    F: FnMut() -> Result<Option<Frame>>,
{
    fn take_frame(&mut self) -> Result<Option<Frame>> {
        self()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Number of grabs attempted per burst.
    pub count: usize,
    /// Pause between two grabs, in milliseconds.
    pub inter_frame_delay_ms: u64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_BURST_COUNT,
            inter_frame_delay_ms: DEFAULT_INTER_FRAME_DELAY_MS,
        }
    }
}

impl BurstConfig {
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(FundusError::InvalidParameter(
                "Burst count must be > 0".into(),
            ));
        }
        Ok(())
    }

    pub fn inter_frame_delay(&self) -> Duration {
        Duration::from_millis(self.inter_frame_delay_ms)
    }
}

/// Every frame of one burst, in capture order, with the sharpest marked.
#[derive(Clone, Debug)]
pub struct BurstResult {
    pub frames: Vec<ScoredFrame>,
    pub best_index: usize,
    /// Grabs attempted, including the ones that returned nothing.
    pub attempts: usize,
}

impl BurstResult {
    pub fn best(&self) -> &ScoredFrame {
        &self.frames[self.best_index]
    }

    pub fn into_best(mut self) -> Frame {
        self.frames.swap_remove(self.best_index).frame
    }

    pub fn scores(&self) -> Vec<SharpnessScore> {
        self.frames.iter().map(|f| f.score).collect()
    }
}

/// Capture a burst and keep the sharpest frame.
pub fn capture_burst<S: FrameSource + ?Sized>(
    source: &mut S,
    config: &BurstConfig,
) -> Result<BurstResult> {
    capture_burst_with_progress(source, config, |_, _| {})
}

/// Capture a burst with per-grab progress reporting.
///
/// Calls `on_progress(grabs_done, total)` after every grab attempt.
pub fn capture_burst_with_progress<S: FrameSource + ?Sized>(
    source: &mut S,
    config: &BurstConfig,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<BurstResult> {
    config.validate()?;

    let total = config.count;
    let delay = config.inter_frame_delay();
    let mut frames = Vec::with_capacity(total);

    for i in 0..total {
        match source.take_frame()? {
            Some(frame) => {
                debug!(grab = i + 1, total, "Captured frame");
                frames.push(frame);
            }
            None => warn!(grab = i + 1, total, "No frame available"),
        }
        on_progress(i + 1, total);

        if i + 1 < total && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    if frames.is_empty() {
        return Err(FundusError::EmptyBurst { attempts: total });
    }

    let scores: Vec<SharpnessScore> = frames.par_iter().map(sharpness).collect();
    // The collect above is the barrier: selection only sees complete scores.
    let best_index = select_sharpest(&scores).unwrap_or(0);

    info!(
        captured = frames.len(),
        attempts = total,
        best_index,
        best_score = scores[best_index].0,
        "Burst complete"
    );

    let frames = frames
        .into_iter()
        .zip(scores)
        .map(|(frame, score)| ScoredFrame { frame, score })
        .collect();

    Ok(BurstResult {
        frames,
        best_index,
        attempts: total,
    })
}

/// Index of the highest score. The earliest index wins ties.
pub fn select_sharpest(scores: &[SharpnessScore]) -> Option<usize> {
    if scores.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, s) in scores.iter().enumerate().skip(1) {
        if s.0 > scores[best].0 {
            best = i;
        }
    }
    Some(best)
}
