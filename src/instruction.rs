use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::allocation::{RewardAllocation, RewardSlot};
use crate::state;

const TAG_INIT_REPORTING: u8 = 0;
const TAG_SET_REPORTER_REWARD: u8 = 1;
const TAG_SET_LOSSLESS_REWARD: u8 = 2;
const TAG_SET_STAKERS_REWARD: u8 = 3;
const TAG_SET_COMMITTEE_REWARD: u8 = 4;
const TAG_TRANSFER_ADMIN: u8 = 5;

/// Instructions for the Lossless reporting reward program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportingInstruction {
    /// Create the reporting config PDA. The signer becomes admin and the
    /// initial rewards are applied under the usual <= 100 rule.
    ///
    /// Accounts:
    ///   0. `[signer, writable]` Admin (pays rent)
    ///   1. `[writable]` Config PDA (reporting_config, to be created)
    ///   2. `[]` System program
    InitReporting { initial: RewardAllocation },

    /// Set one reward slot.
    /// Tags 1..=4 map to reporter, lossless, stakers, committee.
    ///
    /// Accounts:
    ///   0. `[signer]` Admin
    ///   1. `[writable]` Config PDA
    SetReward { slot: RewardSlot, value: u64 },

    /// Hand the admin capability to another key.
    ///
    /// Accounts:
    ///   0. `[signer]` Current admin
    ///   1. `[writable]` Config PDA
    TransferAdmin { new_admin: Pubkey },
}

fn read_u64(rest: &[u8], at: usize) -> Result<u64, ProgramError> {
    rest.get(at..at + 8)
        .and_then(|b| b.try_into().ok())
        .map(u64::from_le_bytes)
        .ok_or(ProgramError::InvalidInstructionData)
}

impl ReportingInstruction {
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        let (&tag, rest) = data.split_first().ok_or(ProgramError::InvalidInstructionData)?;

        match tag {
            TAG_INIT_REPORTING => {
                // 4 x u64: reporter, lossless, stakers, committee
                let initial = RewardAllocation {
                    reporter: read_u64(rest, 0)?,
                    lossless: read_u64(rest, 8)?,
                    stakers: read_u64(rest, 16)?,
                    committee: read_u64(rest, 24)?,
                };
                Ok(Self::InitReporting { initial })
            }
            TAG_SET_REPORTER_REWARD => Ok(Self::SetReward {
                slot: RewardSlot::Reporter,
                value: read_u64(rest, 0)?,
            }),
            TAG_SET_LOSSLESS_REWARD => Ok(Self::SetReward {
                slot: RewardSlot::Lossless,
                value: read_u64(rest, 0)?,
            }),
            TAG_SET_STAKERS_REWARD => Ok(Self::SetReward {
                slot: RewardSlot::Stakers,
                value: read_u64(rest, 0)?,
            }),
            TAG_SET_COMMITTEE_REWARD => Ok(Self::SetReward {
                slot: RewardSlot::Committee,
                value: read_u64(rest, 0)?,
            }),
            TAG_TRANSFER_ADMIN => {
                if rest.len() < 32 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let new_admin = Pubkey::try_from(&rest[0..32])
                    .map_err(|_| ProgramError::InvalidInstructionData)?;
                Ok(Self::TransferAdmin { new_admin })
            }
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::InitReporting { initial } => {
                let mut data = Vec::with_capacity(33);
                data.push(TAG_INIT_REPORTING);
                for v in initial.slots() {
                    data.extend_from_slice(&v.to_le_bytes());
                }
                data
            }
            Self::SetReward { slot, value } => {
                let tag = match slot {
                    RewardSlot::Reporter => TAG_SET_REPORTER_REWARD,
                    RewardSlot::Lossless => TAG_SET_LOSSLESS_REWARD,
                    RewardSlot::Stakers => TAG_SET_STAKERS_REWARD,
                    RewardSlot::Committee => TAG_SET_COMMITTEE_REWARD,
                };
                let mut data = Vec::with_capacity(9);
                data.push(tag);
                data.extend_from_slice(&value.to_le_bytes());
                data
            }
            Self::TransferAdmin { new_admin } => {
                let mut data = Vec::with_capacity(33);
                data.push(TAG_TRANSFER_ADMIN);
                data.extend_from_slice(new_admin.as_ref());
                data
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// Instruction builders (clients / tests)
// ═══════════════════════════════════════════════════════════════

pub fn init_reporting(program_id: &Pubkey, admin: &Pubkey, initial: RewardAllocation) -> Instruction {
    let (config, _) = state::derive_config_pda(program_id);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: ReportingInstruction::InitReporting { initial }.pack(),
    }
}

pub fn set_reward(program_id: &Pubkey, admin: &Pubkey, slot: RewardSlot, value: u64) -> Instruction {
    let (config, _) = state::derive_config_pda(program_id);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data: ReportingInstruction::SetReward { slot, value }.pack(),
    }
}

pub fn set_reporter_reward(program_id: &Pubkey, admin: &Pubkey, value: u64) -> Instruction {
    set_reward(program_id, admin, RewardSlot::Reporter, value)
}

pub fn set_lossless_reward(program_id: &Pubkey, admin: &Pubkey, value: u64) -> Instruction {
    set_reward(program_id, admin, RewardSlot::Lossless, value)
}

pub fn set_stakers_reward(program_id: &Pubkey, admin: &Pubkey, value: u64) -> Instruction {
    set_reward(program_id, admin, RewardSlot::Stakers, value)
}

pub fn set_committee_reward(program_id: &Pubkey, admin: &Pubkey, value: u64) -> Instruction {
    set_reward(program_id, admin, RewardSlot::Committee, value)
}

pub fn transfer_admin(program_id: &Pubkey, admin: &Pubkey, new_admin: &Pubkey) -> Instruction {
    let (config, _) = state::derive_config_pda(program_id);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data: ReportingInstruction::TransferAdmin { new_admin: *new_admin }.pack(),
    }
}
