//! # Configuration Tests
//!
//! JSON parsing, per-section defaults, and range validation.

use fp8mac_core::common::MacError;
use fp8mac_core::config::{Config, OverflowPolicy};
use fp8mac_core::MacPipeline;
use pretty_assertions::assert_eq;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.multiplier.precision, 4);
    assert_eq!(config.accumulator.reference_exponent, 7);
    assert_eq!(config.accumulator.register_bits, 16);
    assert_eq!(config.accumulator.overflow, OverflowPolicy::Wrap);
    assert_eq!(config.pipeline.queue_depth, 4);
    assert!(!config.general.trace_cycles);
    assert_eq!(config.general.cycle_budget, 20);
}

#[test]
fn empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.multiplier.precision, 4);
    assert_eq!(config.pipeline.queue_depth, 4);
}

#[test]
fn serde_defaults_match_default_impls() {
    let json = r#"{ "general": {}, "multiplier": {}, "accumulator": {}, "pipeline": {} }"#;
    let parsed = Config::from_json(json).unwrap();
    let built = Config::default();
    assert_eq!(parsed.general.cycle_budget, built.general.cycle_budget);
    assert_eq!(parsed.multiplier.precision, built.multiplier.precision);
    assert_eq!(
        parsed.accumulator.reference_exponent,
        built.accumulator.reference_exponent
    );
    assert_eq!(parsed.accumulator.register_bits, built.accumulator.register_bits);
    assert_eq!(parsed.accumulator.overflow, built.accumulator.overflow);
    assert_eq!(parsed.pipeline.queue_depth, built.pipeline.queue_depth);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "accumulator": { "overflow": "Trap" } }"#).unwrap();
    assert_eq!(config.accumulator.overflow, OverflowPolicy::Trap);
    assert_eq!(config.accumulator.reference_exponent, 7);
    assert_eq!(config.accumulator.register_bits, 16);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = Config::from_json("{ \"multiplier\": ").unwrap_err();
    assert!(matches!(err, MacError::Config(_)));
}

#[test]
fn unknown_overflow_policy_is_rejected() {
    let err = Config::from_json(r#"{ "accumulator": { "overflow": "Saturate" } }"#).unwrap_err();
    assert!(matches!(err, MacError::Config(_)));
}

#[test]
fn zero_precision_is_rejected() {
    let err = Config::from_json(r#"{ "multiplier": { "precision": 0 } }"#).unwrap_err();
    assert_eq!(err, MacError::InvalidPrecision(0));
}

#[test]
fn precision_sixteen_is_rejected() {
    let err = Config::from_json(r#"{ "multiplier": { "precision": 16 } }"#).unwrap_err();
    assert_eq!(err, MacError::InvalidPrecision(16));
}

#[test]
fn reference_exponent_out_of_field_is_rejected() {
    let err =
        Config::from_json(r#"{ "accumulator": { "reference_exponent": 16 } }"#).unwrap_err();
    assert_eq!(err, MacError::InvalidReferenceExponent(16));
}

#[test]
fn register_width_bounds() {
    let mut config = Config::default();
    config.accumulator.register_bits = 1;
    assert_eq!(config.validate(), Err(MacError::InvalidRegisterWidth(1)));

    config.accumulator.register_bits = 65;
    assert_eq!(config.validate(), Err(MacError::InvalidRegisterWidth(65)));

    config.accumulator.register_bits = 64;
    assert!(config.validate().is_ok());
}

#[test]
fn zero_queue_depth_is_rejected() {
    let err = Config::from_json(r#"{ "pipeline": { "queue_depth": 0 } }"#).unwrap_err();
    assert_eq!(err, MacError::InvalidQueueDepth);
}

#[test]
fn pipeline_construction_validates() {
    let mut config = Config::default();
    config.pipeline.queue_depth = 0;
    assert!(matches!(
        MacPipeline::new(&config),
        Err(MacError::InvalidQueueDepth)
    ));
}

#[test]
fn multiplier_precision_accessor() {
    let config = Config::from_json(r#"{ "multiplier": { "precision": 15 } }"#).unwrap();
    assert_eq!(config.multiplier.precision().unwrap().bits(), 15);
}
