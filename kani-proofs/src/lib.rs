//! Kani formal verification for lossless-reporting allocation math.
//!
//! ZERO dependencies. Pure Rust. CBMC-friendly.
//!
//! KEY DESIGN DECISION: Functions use u8 slots / u16 sums.
//! The production code uses u64, but the cap arithmetic is the same
//! for any width wide enough to hold four slots. u8 keeps the SAT
//! formulas small enough to cover every input exhaustively.
//!
//! Run all:   cargo kani --lib
//! Run one:   cargo kani --harness proof_boundary_inclusive

// ═══════════════════════════════════════════════════════════════
// Allocation math (u8/u16 mirror of lossless-reporting/src/math.rs)
// ═══════════════════════════════════════════════════════════════

pub const CAP: u16 = 100;

/// Sum of the four slots. Cannot overflow in u16.
pub fn allocation_total(slots: [u8; 4]) -> u16 {
    slots.iter().map(|&v| v as u16).sum()
}

/// Sum with the slot at `index` replaced by `new_value`.
pub fn candidate_total(slots: [u8; 4], index: usize, new_value: u8) -> Option<u16> {
    if index >= 4 {
        return None;
    }
    let mut c = slots;
    c[index] = new_value;
    Some(allocation_total(c))
}

pub fn accepts(slots: [u8; 4], index: usize, new_value: u8) -> bool {
    matches!(candidate_total(slots, index, new_value), Some(t) if t <= CAP)
}

/// Largest accepted value for the slot (saturating at 0).
pub fn remaining_headroom(slots: [u8; 4], index: usize) -> Option<u16> {
    Some(CAP.saturating_sub(candidate_total(slots, index, 0)?))
}

/// Apply a write if accepted. Returns the resulting slots.
pub fn apply(slots: [u8; 4], index: usize, new_value: u8) -> [u8; 4] {
    if accepts(slots, index, new_value) {
        let mut next = slots;
        next[index] = new_value;
        next
    } else {
        slots
    }
}

// ═══════════════════════════════════════════════════════════════
// KANI PROOFS
// ═══════════════════════════════════════════════════════════════

#[cfg(kani)]
mod proofs {
    use super::*;

    fn any_slots() -> [u8; 4] {
        [kani::any(), kani::any(), kani::any(), kani::any()]
    }

    fn any_index() -> usize {
        let i: usize = kani::any();
        kani::assume(i < 4);
        i
    }

    // ── 1. Invariant ──

    /// Valid state + any write → still valid.
    #[kani::proof]
    fn proof_invariant_preserved() {
        let s = any_slots();
        kani::assume(allocation_total(s) <= CAP);
        let next = apply(s, any_index(), kani::any());
        assert!(allocation_total(next) <= CAP);
    }

    /// Two writes in a row from a valid state → still valid.
    #[kani::proof]
    fn proof_invariant_two_steps() {
        let s = any_slots();
        kani::assume(allocation_total(s) <= CAP);
        let s1 = apply(s, any_index(), kani::any());
        let s2 = apply(s1, any_index(), kani::any());
        assert!(allocation_total(s2) <= CAP);
    }

    // ── 2. Rejection leaves state untouched ──

    #[kani::proof]
    fn proof_rejected_write_is_noop() {
        let s = any_slots();
        let i = any_index();
        let v: u8 = kani::any();
        if !accepts(s, i, v) {
            assert_eq!(apply(s, i, v), s);
        }
    }

    // ── 3. Boundary ──

    #[kani::proof]
    fn proof_boundary_inclusive() {
        let s = any_slots();
        let i = any_index();
        let others = candidate_total(s, i, 0).unwrap();
        kani::assume(others <= CAP);
        let h = remaining_headroom(s, i).unwrap();
        assert!(accepts(s, i, h as u8));
        if h < u8::MAX as u16 {
            assert!(!accepts(s, i, (h + 1) as u8));
        }
    }

    // ── 4. Replace, not add ──

    #[kani::proof]
    fn proof_old_value_ignored() {
        let mut s = any_slots();
        let i = any_index();
        let v: u8 = kani::any();
        let before = accepts(s, i, v);
        s[i] = kani::any();
        assert_eq!(accepts(s, i, v), before);
    }

    // ── 5. Idempotence ──

    #[kani::proof]
    fn proof_same_value_twice() {
        let s = any_slots();
        kani::assume(allocation_total(s) <= CAP);
        let i = any_index();
        let v = s[i];
        assert!(accepts(s, i, v));
        assert_eq!(apply(s, i, v), s);
    }

    // ── 6. Zero ──

    #[kani::proof]
    fn proof_zero_accepted_from_valid_state() {
        let s = any_slots();
        kani::assume(allocation_total(s) <= CAP);
        assert!(accepts(s, any_index(), 0));
    }
}
