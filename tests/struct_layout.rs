//! Struct layout verification tests.
//!
//! Ensures bytemuck Pod compliance and that the config size
//! doesn't accidentally change (would break on-chain state).

use bytemuck::{Pod, Zeroable};
use lossless_reporting::state::{ReportingConfig, REPORTING_CONFIG_SIZE};

#[test]
fn test_reporting_config_size_is_136() {
    // If this changes, existing on-chain data becomes unreadable.
    assert_eq!(REPORTING_CONFIG_SIZE, 136);
    assert_eq!(std::mem::size_of::<ReportingConfig>(), 136);
}

#[test]
fn test_reporting_config_alignment() {
    assert_eq!(std::mem::align_of::<ReportingConfig>(), 8);
}

#[test]
fn test_reporting_config_zeroed_is_not_initialized() {
    let config = ReportingConfig::zeroed();
    assert_eq!(config.is_initialized, 0);
    assert_eq!(config.admin, [0u8; 32]);
    assert_eq!(config.reporter_reward, 0);
    assert_eq!(config.lossless_reward, 0);
    assert_eq!(config.stakers_reward, 0);
    assert_eq!(config.committee_reward, 0);
}

#[test]
fn test_bytemuck_roundtrip_config() {
    let mut config = ReportingConfig::zeroed();
    config.is_initialized = 1;
    config.bump = 253;
    config.admin = [9u8; 32];
    config.reporter_reward = 2;
    config.lossless_reward = 10;
    config.stakers_reward = 2;

    let bytes: &[u8] = bytemuck::bytes_of(&config);
    assert_eq!(bytes.len(), REPORTING_CONFIG_SIZE);

    let recovered: &ReportingConfig = bytemuck::from_bytes(bytes);
    assert_eq!(recovered.is_initialized, 1);
    assert_eq!(recovered.bump, 253);
    assert_eq!(recovered.admin, [9u8; 32]);
    assert_eq!(recovered.reporter_reward, 2);
    assert_eq!(recovered.lossless_reward, 10);
    assert_eq!(recovered.stakers_reward, 2);
    assert_eq!(recovered.committee_reward, 0);
}

#[test]
fn test_pod_zeroable_impls() {
    fn assert_pod<T: Pod + Zeroable>() {}
    assert_pod::<ReportingConfig>();
}

/// Field offset verification: ensures no hidden padding changes
#[test]
fn test_reporting_config_field_offsets() {
    let config = ReportingConfig::zeroed();
    let base = &config as *const _ as usize;

    assert_eq!(&config.is_initialized as *const _ as usize - base, 0);
    assert_eq!(&config.bump as *const _ as usize - base, 1);
    assert_eq!(&config._padding as *const _ as usize - base, 2);
    assert_eq!(&config.admin as *const _ as usize - base, 8);
    assert_eq!(&config.reporter_reward as *const _ as usize - base, 40);
    assert_eq!(&config.lossless_reward as *const _ as usize - base, 48);
    assert_eq!(&config.stakers_reward as *const _ as usize - base, 56);
    assert_eq!(&config.committee_reward as *const _ as usize - base, 64);
    assert_eq!(&config._reserved as *const _ as usize - base, 72);
}
