//! Configuration tests.

use chip8_core::Config;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.instructions_per_tick, 5);
    assert_eq!(config.tick_hz, 60);
    assert_eq!(config.pixel_scale, 10);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config: Config = serde_json::from_str(r#"{ "instructions_per_tick": 12 }"#).unwrap();
    assert_eq!(config.instructions_per_tick, 12);
    assert_eq!(config.tick_hz, 60);
    assert_eq!(config.pixel_scale, 10);
}

#[test]
fn empty_json_is_the_default_configuration() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.instructions_per_tick, Config::default().instructions_per_tick);
    assert_eq!(config.tick_hz, Config::default().tick_hz);
}

#[test]
fn unknown_fields_are_ignored() {
    let config: Config = serde_json::from_str(r#"{ "tick_hz": 30, "theme": "green" }"#).unwrap();
    assert_eq!(config.tick_hz, 30);
}
