use tracing::info;

use crate::capture::{capture_burst_with_progress, FrameSource};
use crate::crop::crop_ellipse;
use crate::error::Result;
use crate::filters::{enhance, red_free};

use super::config::PipelineConfig;
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Run one capture session without progress reporting.
pub fn run_pipeline<S: FrameSource + ?Sized>(
    source: &mut S,
    config: &PipelineConfig,
) -> Result<PipelineOutput> {
    run_pipeline_reported(source, config, &NoOpReporter)
}

/// Capture a burst, keep the sharpest frame, then crop, enhance and
/// convert it as configured.
pub fn run_pipeline_reported<S: FrameSource + ?Sized>(
    source: &mut S,
    config: &PipelineConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    config.validate()?;

    reporter.begin_stage(PipelineStage::Capturing, Some(config.burst.count));
    let burst = capture_burst_with_progress(source, &config.burst, |done, _| {
        reporter.advance(done)
    });
    reporter.finish_stage();
    let burst = burst?;

    reporter.begin_stage(PipelineStage::Selecting, None);
    let best = burst.best();
    info!(
        index = burst.best_index,
        score = best.score.0,
        width = best.frame.width(),
        height = best.frame.height(),
        "Selected sharpest frame"
    );
    let mut image = best.frame.clone();
    reporter.finish_stage();

    if let Some(ref spec) = config.crop {
        reporter.begin_stage(PipelineStage::Cropping, None);
        image = crop_ellipse(&image, spec)?;
        info!(width = image.width(), height = image.height(), "Ellipse crop applied");
        reporter.finish_stage();
    }

    if let Some(ref params) = config.enhancement {
        reporter.begin_stage(PipelineStage::Enhancing, None);
        image = enhance(&image, params)?;
        info!(
            tile_size = params.tile_size,
            clip_limit = params.clip_limit,
            "Contrast enhancement applied"
        );
        reporter.finish_stage();
    }

    if config.red_free {
        reporter.begin_stage(PipelineStage::RedFree, None);
        image = red_free(&image);
        reporter.finish_stage();
    }

    Ok(PipelineOutput { burst, image })
}
