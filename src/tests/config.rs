use super::Config;
use std::time::Duration;

#[test]
fn test_empty_file_gives_defaults() {
    let cfg = Config::parse("");
    assert_eq!(cfg.breakpoint_px, 768);
    assert_eq!(cfg.focus_delay_ms, 300);
    assert_eq!(cfg.swipe_threshold_px, 50);
    assert_eq!(cfg.edge_zone_px, 50);
    assert_eq!(cfg.back_to_top_threshold, 300);
    assert_eq!(cfg.home_section(), None);
    assert!(cfg.log_dir.is_empty());
}

#[test]
fn test_values_override_defaults() {
    let cfg = Config::parse("breakpoint_px = 1024\nhome_section = \"faq\"\n");
    assert_eq!(cfg.breakpoint_px, 1024);
    assert_eq!(cfg.home_section(), Some("faq"));
    assert_eq!(cfg.focus_delay_ms, 300);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let cfg = Config::parse("breakpoint_px = \"wide\"");
    assert_eq!(cfg.breakpoint_px, 768);
}

#[test]
fn test_sidebar_settings_follow_config() {
    let cfg = Config {
        focus_delay_ms: 120,
        swipe_threshold_px: 80,
        ..Config::default()
    };
    let settings = cfg.sidebar_settings();
    assert_eq!(settings.focus_delay, Duration::from_millis(120));
    assert!((settings.swipe_threshold_px - 80.0).abs() < f64::EPSILON);
    assert_eq!(settings.breakpoint_px, 768);
}
