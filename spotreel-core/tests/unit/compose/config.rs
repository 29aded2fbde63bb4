use super::*;

#[test]
fn defaults_match_portrait_template() {
    let cfg = ReelConfig::default();
    assert_eq!(cfg.fps, Fps::new(30, 1).unwrap());
    assert_eq!((cfg.canvas.width, cfg.canvas.height), (1080, 1920));
    assert_eq!(cfg.expected_duration(3), 1950);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: ReelConfig = serde_json::from_str(r#"{"profile_count": 2, "seed": 9}"#).unwrap();
    assert_eq!(cfg.profile_count, 2);
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.intro_frames, 150);
    assert_eq!(cfg.expected_duration(2), 1500);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<ReelConfig>(r#"{"profle_count": 2}"#).is_err());
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut cfg = ReelConfig::default();
    cfg.fps.den = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ReelConfig::default();
    cfg.outro_frames = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ReelConfig::default();
    cfg.profile_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = ReelConfig::default();
    cfg.canvas.width = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reads_and_validates() {
    let path = std::env::temp_dir().join(format!("spotreel_cfg_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"intro_frames": 0}"#).unwrap();
    assert!(ReelConfig::from_path(&path).is_err());

    std::fs::write(&path, r#"{"video_count": 4}"#).unwrap();
    assert_eq!(ReelConfig::from_path(&path).unwrap().video_count, 4);
    std::fs::remove_file(&path).ok();
}
