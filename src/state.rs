use bytemuck::{Pod, Zeroable};
use solana_program::pubkey::Pubkey;

use crate::allocation::{AdminAuthority, RewardAllocation};

/// Seed of the reporting config PDA.
pub const REPORTING_CONFIG_SEED: &[u8] = b"reporting_config";

/// Reporting config, one per program deployment.
/// PDA seeds: [b"reporting_config"]
///
/// Holds the admin key and the four reward percentages. Every write goes
/// through `RewardAllocator`, so the stored rewards always sum to <= 100.
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct ReportingConfig {
    /// Whether the config is initialized (1 = yes, 0 = no)
    pub is_initialized: u8,

    /// Bump seed for the config PDA
    pub bump: u8,

    /// Padding for alignment
    pub _padding: [u8; 6],

    /// Admin (only key allowed to change rewards or hand over the role)
    pub admin: [u8; 32],

    /// Reporter reward, percent
    pub reporter_reward: u64,

    /// Lossless protocol reward, percent
    pub lossless_reward: u64,

    /// Stakers reward, percent
    pub stakers_reward: u64,

    /// Committee reward, percent
    pub committee_reward: u64,

    /// Reserved for future use (report lifetime, staking amount)
    pub _reserved: [u8; 64],
}

/// Size of ReportingConfig in bytes
pub const REPORTING_CONFIG_SIZE: usize = core::mem::size_of::<ReportingConfig>();

impl ReportingConfig {
    pub fn admin_pubkey(&self) -> Pubkey {
        Pubkey::new_from_array(self.admin)
    }

    pub fn allocation(&self) -> RewardAllocation {
        RewardAllocation {
            reporter: self.reporter_reward,
            lossless: self.lossless_reward,
            stakers: self.stakers_reward,
            committee: self.committee_reward,
        }
    }

    /// Write back an allocation committed by `RewardAllocator`.
    pub fn store_allocation(&mut self, allocation: &RewardAllocation) {
        self.reporter_reward = allocation.reporter;
        self.lossless_reward = allocation.lossless;
        self.stakers_reward = allocation.stakers;
        self.committee_reward = allocation.committee;
    }
}

impl AdminAuthority for ReportingConfig {
    fn is_admin(&self, caller: &Pubkey) -> bool {
        self.is_initialized == 1 && self.admin == caller.to_bytes()
    }
}

/// Derive the reporting config PDA.
pub fn derive_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REPORTING_CONFIG_SEED], program_id)
}
