//! Pure reward allocation math, extracted for Kani formal verification.
//!
//! No Solana/Pubkey dependencies. Just arithmetic over the four reward slots
//! (reporter, lossless, stakers, committee), indexed 0..4.

/// Upper bound for the sum of all four reward percentages (inclusive).
pub const REWARD_TOTAL_CAP: u64 = 100;

/// Number of reward slots.
pub const REWARD_SLOT_COUNT: usize = 4;

/// Checked sum of all reward slots.
///
/// # Returns
/// * `Some(total)` - Sum of the four slots
/// * `None` - Arithmetic overflow
pub fn allocation_total(slots: [u64; REWARD_SLOT_COUNT]) -> Option<u64> {
    slots
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
}

/// Sum of the allocation with the slot at `index` replaced by `new_value`.
///
/// The slot's current value does not contribute: only the other three
/// slots plus the proposed value are summed.
///
/// # Returns
/// * `Some(total)` - Candidate total
/// * `None` - Overflow, or `index` out of range
pub fn candidate_total(
    slots: [u64; REWARD_SLOT_COUNT],
    index: usize,
    new_value: u64,
) -> Option<u64> {
    if index >= REWARD_SLOT_COUNT {
        return None;
    }
    let mut candidate = slots;
    candidate[index] = new_value;
    allocation_total(candidate)
}

/// Whether a total respects the cap. Boundary is inclusive.
pub fn within_cap(total: u64) -> bool {
    total <= REWARD_TOTAL_CAP
}

/// Largest value the slot at `index` may take without breaking the cap.
///
/// # Returns
/// * `Some(headroom)` - `100 - sum(others)`, saturating at 0
/// * `None` - Overflow, or `index` out of range
pub fn remaining_headroom(slots: [u64; REWARD_SLOT_COUNT], index: usize) -> Option<u64> {
    let others = candidate_total(slots, index, 0)?;
    Some(REWARD_TOTAL_CAP.saturating_sub(others))
}

/// Whether `new_value` is accepted for the slot at `index`.
/// Overflow and bad indices are rejected.
pub fn accepts(slots: [u64; REWARD_SLOT_COUNT], index: usize, new_value: u64) -> bool {
    candidate_total(slots, index, new_value).is_some_and(within_cap)
}
