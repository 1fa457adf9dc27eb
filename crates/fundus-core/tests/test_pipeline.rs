mod common;

use std::sync::Mutex;

use fundus_core::capture::BurstConfig;
use fundus_core::crop::EllipseSpec;
use fundus_core::error::{FundusError, Result};
use fundus_core::filters::EnhanceParams;
use fundus_core::frame::Frame;
use fundus_core::pipeline::config::PipelineConfig;
use fundus_core::pipeline::{run_pipeline, run_pipeline_reported, PipelineStage, ProgressReporter};

use common::{checker_frame, gray_frame};

#[derive(Default)]
struct RecordingReporter {
    stages: Mutex<Vec<PipelineStage>>,
    advances: Mutex<Vec<usize>>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.stages.lock().unwrap().push(stage);
    }

    fn advance(&self, items_done: usize) {
        self.advances.lock().unwrap().push(items_done);
    }
}

fn quick_burst(count: usize) -> BurstConfig {
    BurstConfig {
        count,
        inter_frame_delay_ms: 0,
    }
}

fn scripted(grabs: Vec<Option<Frame>>) -> impl FnMut() -> Result<Option<Frame>> {
    let mut it = grabs.into_iter();
    move || Ok(it.next().flatten())
}

#[test]
fn test_plain_pipeline_returns_sharpest_frame() {
    let sharp = checker_frame(256, 64, 255);
    let mut source = scripted(vec![
        Some(gray_frame(256, 64, 40)),
        Some(sharp.clone()),
        Some(checker_frame(256, 64, 30)),
    ]);
    let config = PipelineConfig {
        burst: quick_burst(3),
        ..Default::default()
    };

    let out = run_pipeline(&mut source, &config).unwrap();
    assert_eq!(out.burst.best_index, 1);
    assert_eq!(out.image, sharp);
}

#[test]
fn test_full_pipeline_crops_then_enhances() {
    let mut source = scripted(vec![Some(gray_frame(100, 100, 100)), None]);
    let config = PipelineConfig {
        red_free: true,
        burst: quick_burst(2),
        crop: Some(EllipseSpec {
            cx: 50.0,
            cy: 50.0,
            rx: 30.0,
            ry: 20.0,
            rotation: 0.0,
        }),
        enhancement: Some(EnhanceParams::default()),
    };
    let reporter = RecordingReporter::default();

    let out = run_pipeline_reported(&mut source, &config, &reporter).unwrap();

    assert_eq!((out.image.width(), out.image.height()), (60, 40));
    assert_eq!(out.image.pixel(30, 20)[3], 255);
    assert_eq!(out.image.pixel(0, 0)[3], 0);
    assert_eq!(
        *reporter.stages.lock().unwrap(),
        vec![
            PipelineStage::Capturing,
            PipelineStage::Selecting,
            PipelineStage::Cropping,
            PipelineStage::Enhancing,
            PipelineStage::RedFree,
        ]
    );
    assert_eq!(*reporter.advances.lock().unwrap(), vec![1, 2]);
}

#[test]
fn test_empty_burst_surfaces_distinctly() {
    let mut source = || -> Result<Option<Frame>> { Ok(None) };
    let config = PipelineConfig {
        burst: quick_burst(4),
        ..Default::default()
    };

    let err = run_pipeline(&mut source, &config).unwrap_err();
    assert!(matches!(err, FundusError::EmptyBurst { attempts: 4 }));
}

#[test]
fn test_invalid_config_fails_before_capture() {
    let mut calls = 0usize;
    let mut source = || -> Result<Option<Frame>> {
        calls += 1;
        Ok(Some(gray_frame(8, 8, 1)))
    };
    let config = PipelineConfig {
        burst: quick_burst(2),
        enhancement: Some(EnhanceParams {
            tile_size: 64,
            clip_limit: 2.0,
        }),
        ..Default::default()
    };

    let err = run_pipeline(&mut source, &config).unwrap_err();
    assert!(matches!(err, FundusError::InvalidParameter(_)));
    assert_eq!(calls, 0);
}
