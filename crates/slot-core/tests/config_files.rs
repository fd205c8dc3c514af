//! Config file loading for slot-core

use std::io::Write;

use slot_core::{ConfigWarning, ReelStrip, SlotConfig, SlotError};
use slot_stage::{ReelPosition, Symbol};

#[test]
fn test_load_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "initial_credit: 20\nseed: 5\nreel_strips:\n  left: [seven, bell, cherry, watermelon, grape]\n  center: [grape, watermelon, cherry, bell, seven]\n  right: [cherry, grape, seven, watermelon, bell]"
    )
    .unwrap();

    let config = SlotConfig::load(file.path()).unwrap();
    assert_eq!(config.initial_credit, 20);
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.reel_strips.center.symbols()[0], Symbol::Grape);
    assert!(config.diagnostics().is_empty());
}

#[test]
fn test_save_and_load_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.json");

    let config = SlotConfig::classic()
        .with_initial_credit(42)
        .with_strip(ReelPosition::Right, "7 B C W G".parse::<ReelStrip>().unwrap());
    config.save(&path).unwrap();

    assert_eq!(SlotConfig::load(&path).unwrap(), config);
}

#[test]
fn test_save_and_load_yml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.yml");

    let config = SlotConfig::classic().with_seed(12_345);
    config.save(&path).unwrap();

    assert_eq!(SlotConfig::load(&path).unwrap(), config);
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slot.toml");
    std::fs::write(&path, "initial_credit = 1").unwrap();

    assert!(matches!(
        SlotConfig::load(&path),
        Err(SlotError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(SlotConfig::load(&path), Err(SlotError::Io(_))));
}

#[test]
fn test_malformed_json_is_reported() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{{\"initial_credit\": \"lots\"}}").unwrap();

    assert!(matches!(
        SlotConfig::load(file.path()),
        Err(SlotError::Json(_))
    ));
}

#[test]
fn test_sparse_layout_loads_with_warnings() {
    let json = r#"{"reel_strips": {"left": ["bell"], "center": [], "right": ["grape", "bell"]}}"#;
    let config = SlotConfig::from_json(json).unwrap();

    let warnings = config.diagnostics();
    assert!(warnings.contains(&ConfigWarning::EmptyStrip(ReelPosition::Center)));
    assert!(warnings.contains(&ConfigWarning::MissingWinningSymbol {
        position: ReelPosition::Left,
        symbol: Symbol::Seven,
    }));
}
