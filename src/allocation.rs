//! Reward allocation across the four payout classes of a report.
//!
//! A successful report pays out to the reporter, the Lossless protocol,
//! the stakers who backed the report and the deciding committee. Each class
//! gets a percentage; the four together may never exceed 100.
//!
//! The allocator never looks up roles by itself: whoever builds it hands in
//! an [`AdminAuthority`] that answers "is this caller the admin?".

use solana_program::pubkey::Pubkey;

use crate::error::ReportingError;
use crate::math::{self, REWARD_SLOT_COUNT};

/// One of the four reward percentage slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewardSlot {
    Reporter = 0,
    Lossless = 1,
    Stakers = 2,
    Committee = 3,
}

impl RewardSlot {
    pub const ALL: [RewardSlot; REWARD_SLOT_COUNT] = [
        RewardSlot::Reporter,
        RewardSlot::Lossless,
        RewardSlot::Stakers,
        RewardSlot::Committee,
    ];

    /// Stable index, shared by the wire format and the account layout.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name of the change notification logged after a successful update.
    pub fn change_event(self) -> &'static str {
        match self {
            RewardSlot::Reporter => "ReporterRewardChange",
            RewardSlot::Lossless => "LosslessRewardChange",
            RewardSlot::Stakers => "StakersRewardChange",
            RewardSlot::Committee => "CommitteeRewardChange",
        }
    }
}

/// The four reward percentages. Defaults to all zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewardAllocation {
    pub reporter: u64,
    pub lossless: u64,
    pub stakers: u64,
    pub committee: u64,
}

impl RewardAllocation {
    pub fn from_slots(slots: [u64; REWARD_SLOT_COUNT]) -> Self {
        let [reporter, lossless, stakers, committee] = slots;
        Self { reporter, lossless, stakers, committee }
    }

    pub fn slots(&self) -> [u64; REWARD_SLOT_COUNT] {
        [self.reporter, self.lossless, self.stakers, self.committee]
    }

    pub fn get(&self, slot: RewardSlot) -> u64 {
        self.slots()[slot.index()]
    }

    fn set(&mut self, slot: RewardSlot, value: u64) {
        match slot {
            RewardSlot::Reporter => self.reporter = value,
            RewardSlot::Lossless => self.lossless = value,
            RewardSlot::Stakers => self.stakers = value,
            RewardSlot::Committee => self.committee = value,
        }
    }

    /// Sum of all four slots. `None` only for records that were never
    /// produced by an allocator (overflowing raw account data).
    pub fn total(&self) -> Option<u64> {
        math::allocation_total(self.slots())
    }
}

/// Authorization port: answers whether `caller` holds the admin capability.
pub trait AdminAuthority {
    fn is_admin(&self, caller: &Pubkey) -> bool;
}

/// A single admin key.
impl AdminAuthority for Pubkey {
    fn is_admin(&self, caller: &Pubkey) -> bool {
        self == caller
    }
}

impl<A: AdminAuthority + ?Sized> AdminAuthority for &A {
    fn is_admin(&self, caller: &Pubkey) -> bool {
        (**self).is_admin(caller)
    }
}

/// Holds the reward allocation and guards every mutation with the admin
/// check and the `total <= 100` invariant.
#[derive(Debug, Clone)]
pub struct RewardAllocator<A> {
    authority: A,
    allocation: RewardAllocation,
}

impl<A: AdminAuthority> RewardAllocator<A> {
    /// Starts from all-zero rewards.
    pub fn new(authority: A) -> Self {
        Self { authority, allocation: RewardAllocation::default() }
    }

    /// Resumes from a previously committed allocation.
    pub fn with_allocation(authority: A, allocation: RewardAllocation) -> Self {
        Self { authority, allocation }
    }

    pub fn allocation(&self) -> RewardAllocation {
        self.allocation
    }

    /// Set one slot. Checks, in order: admin capability, then that the
    /// proposed value plus the other three slots stays within 100.
    /// On failure nothing changes.
    pub fn set_slot(
        &mut self,
        caller: &Pubkey,
        slot: RewardSlot,
        new_value: u64,
    ) -> Result<(), ReportingError> {
        if !self.authority.is_admin(caller) {
            return Err(ReportingError::Unauthorized);
        }
        if !math::accepts(self.allocation.slots(), slot.index(), new_value) {
            return Err(ReportingError::TotalExceed100);
        }
        self.allocation.set(slot, new_value);
        Ok(())
    }

    pub fn get_slot(&self, slot: RewardSlot) -> u64 {
        self.allocation.get(slot)
    }

    pub fn set_reporter_reward(&mut self, caller: &Pubkey, value: u64) -> Result<(), ReportingError> {
        self.set_slot(caller, RewardSlot::Reporter, value)
    }

    pub fn set_lossless_reward(&mut self, caller: &Pubkey, value: u64) -> Result<(), ReportingError> {
        self.set_slot(caller, RewardSlot::Lossless, value)
    }

    pub fn set_stakers_reward(&mut self, caller: &Pubkey, value: u64) -> Result<(), ReportingError> {
        self.set_slot(caller, RewardSlot::Stakers, value)
    }

    pub fn set_committee_reward(&mut self, caller: &Pubkey, value: u64) -> Result<(), ReportingError> {
        self.set_slot(caller, RewardSlot::Committee, value)
    }

    pub fn reporter_reward(&self) -> u64 {
        self.allocation.reporter
    }

    pub fn lossless_reward(&self) -> u64 {
        self.allocation.lossless
    }

    pub fn stakers_reward(&self) -> u64 {
        self.allocation.stakers
    }

    pub fn committee_reward(&self) -> u64 {
        self.allocation.committee
    }

    /// Aggregate of all four slots. Always `Some` and within the cap for
    /// allocations built through `set_slot`; `None` only when resumed from
    /// raw data whose slots overflow.
    pub fn total(&self) -> Option<u64> {
        self.allocation.total()
    }
}
