pub mod burst;

pub use burst::{
    capture_burst, capture_burst_with_progress, select_sharpest, BurstConfig, BurstResult,
    FrameSource,
};
