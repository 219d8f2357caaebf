//! Lossless Reporting: reward allocation program
//!
//! When a report against a malicious address is resolved, the reporting
//! module pays out a reward split across four classes: the reporter, the
//! Lossless protocol, the stakers who backed the report, and the committee
//! that decided it. This program owns those four percentages.
//!
//! Rules:
//! - Only the admin recorded in the config PDA may change a reward
//! - reporter + lossless + stakers + committee never exceeds 100
//! - A change either fully commits or leaves the config untouched
//!
//! Instructions:
//!   0 - InitReporting:       Create config PDA, record admin, apply initial rewards
//!   1 - SetReporterReward:   Admin sets the reporter percentage
//!   2 - SetLosslessReward:   Admin sets the protocol percentage
//!   3 - SetStakersReward:    Admin sets the stakers percentage
//!   4 - SetCommitteeReward:  Admin sets the committee percentage
//!   5 - TransferAdmin:       Admin hands the role to another key

pub mod allocation;
pub mod error;
pub mod instruction;
pub mod math;
pub mod processor;
pub mod state;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;
