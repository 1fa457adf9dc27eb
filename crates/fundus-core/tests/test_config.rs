use fundus_core::capture::BurstConfig;
use fundus_core::crop::EllipseSpec;
use fundus_core::error::FundusError;
use fundus_core::filters::EnhanceParams;
use fundus_core::pipeline::config::PipelineConfig;
use fundus_core::pipeline::PipelineStage;

#[test]
fn test_default_config() {
    let config = PipelineConfig::default();
    assert_eq!(config.burst.count, 5);
    assert_eq!(config.burst.inter_frame_delay_ms, 110);
    assert!(config.crop.is_none());
    assert!(config.enhancement.is_none());
    assert!(!config.red_free);

    let enh = EnhanceParams::default();
    assert_eq!(enh.tile_size, 64);
    assert!((enh.clip_limit - 0.01).abs() < 1e-9);
}

#[test]
fn test_parse_full_toml() {
    let text = r#"
red_free = true

[burst]
count = 7
inter_frame_delay_ms = 50

[enhancement]
tile_size = 32
clip_limit = 0.02

[crop]
cx = 50.0
cy = 50.0
rx = 30.0
ry = 20.0
rotation = 0.25
"#;
    let config: PipelineConfig = toml::from_str(text).unwrap();
    assert!(config.red_free);
    assert_eq!(
        config.burst,
        BurstConfig {
            count: 7,
            inter_frame_delay_ms: 50
        }
    );
    assert_eq!(config.enhancement.as_ref().unwrap().tile_size, 32);
    assert_eq!(config.crop.unwrap().rotation, 0.25);
    config.validate().unwrap();
}

#[test]
fn test_partial_sections_fill_defaults() {
    let text = r#"
[burst]
count = 3

[enhancement]
"#;
    let config: PipelineConfig = toml::from_str(text).unwrap();
    assert_eq!(config.burst.count, 3);
    assert_eq!(config.burst.inter_frame_delay_ms, 110);
    assert_eq!(config.enhancement, Some(EnhanceParams::default()));
}

#[test]
fn test_empty_toml_is_default() {
    let config: PipelineConfig = toml::from_str("").unwrap();
    assert_eq!(config, PipelineConfig::default());
}

#[test]
fn test_toml_roundtrip() {
    let config = PipelineConfig {
        red_free: false,
        burst: BurstConfig::default(),
        crop: Some(EllipseSpec::centered(640, 480)),
        enhancement: Some(EnhanceParams::default()),
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let back: PipelineConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_ellipse_rotation_defaults_to_zero() {
    let spec: EllipseSpec =
        serde_json::from_str(r#"{"cx": 1.0, "cy": 2.0, "rx": 3.0, "ry": 4.0}"#).unwrap();
    assert_eq!(spec.rotation, 0.0);
}

#[test]
fn test_validate_rejects_bad_sections() {
    let mut config = PipelineConfig::default();
    config.burst.count = 0;
    assert!(matches!(config.validate(), Err(FundusError::InvalidParameter(_))));

    let mut config = PipelineConfig::default();
    config.enhancement = Some(EnhanceParams {
        tile_size: 0,
        clip_limit: 0.01,
    });
    assert!(matches!(config.validate(), Err(FundusError::InvalidParameter(_))));

    let mut config = PipelineConfig::default();
    config.crop = Some(EllipseSpec {
        cx: 1.0,
        cy: 1.0,
        rx: 0.0,
        ry: 1.0,
        rotation: 0.0,
    });
    assert!(matches!(config.validate(), Err(FundusError::InvalidParameter(_))));
}

#[test]
fn test_stage_display() {
    assert_eq!(PipelineStage::Capturing.to_string(), "Capturing burst");
    assert_eq!(PipelineStage::Enhancing.to_string(), "Enhancing contrast");
}
