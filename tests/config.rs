use clickpoints::config::DEFAULT_CANVAS_SIZE;
use clickpoints::{RecorderConfig, RecorderError};

#[test]
fn empty_document_keeps_defaults() {
    let cfg = RecorderConfig::from_yaml_str("{}").unwrap();
    assert_eq!(cfg.canvas_size, DEFAULT_CANVAS_SIZE);
    assert!(cfg.drawing_enabled);
    assert!(!cfg.fill_canvas);
    assert_eq!(cfg.marker.radius, 3.5);
    assert_eq!(cfg.marker.line_width, 3.0);
    assert_eq!(cfg.marker.color, egui::Color32::RED);
}

#[test]
fn fields_override_defaults() {
    let yaml = r#"
title: Pick cities
fill_canvas: true
canvas_size: [640, 480]
drawing_enabled: false
marker:
  radius: 5.0
  line_width: 1.0
  color_rgba: [0, 0, 255, 255]
"#;
    let cfg = RecorderConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.title, "Pick cities");
    assert_eq!(cfg.canvas_size, [640, 480]);
    assert!(!cfg.drawing_enabled);
    assert!(cfg.fill_canvas);
    assert_eq!(cfg.marker.radius, 5.0);
    assert_eq!(cfg.marker.color, egui::Color32::from_rgb(0, 0, 255));
}

#[test]
fn zero_canvas_size_is_rejected() {
    let err = RecorderConfig::from_yaml_str("canvas_size: [0, 540]").err().unwrap();
    assert!(matches!(err, RecorderError::InvalidCanvasSize { width: 0, height: 540 }));
}

#[test]
fn malformed_yaml_is_an_error() {
    let err = RecorderConfig::from_yaml_str("canvas_size: wide").err().unwrap();
    assert!(matches!(err, RecorderError::Yaml(_)));
}

#[test]
fn yaml_round_trip_preserves_file_fields() {
    let mut cfg = RecorderConfig::default();
    cfg.headline = Some("Click to add locations".to_string());
    cfg.canvas_size = [300, 200];
    let text = cfg.to_yaml_string().unwrap();
    let back = RecorderConfig::from_yaml_str(&text).unwrap();
    assert_eq!(back.headline, cfg.headline);
    assert_eq!(back.canvas_size, cfg.canvas_size);
    assert_eq!(back.marker, cfg.marker);
}

#[test]
fn relative_background_resolves_next_to_config_file() {
    let dir = std::env::temp_dir().join(format!("clickpoints-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("recorder.yaml");
    std::fs::write(&file, "background: map.png\n").unwrap();

    let cfg = RecorderConfig::from_yaml_file(&file).unwrap();
    assert_eq!(cfg.background, Some(dir.join("map.png")));

    std::fs::remove_dir_all(&dir).ok();
}
