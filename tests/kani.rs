//! Kani formal verification proofs for lossless-reporting allocation math.
//!
//! Proves on the PURE MATH layer:
//! 1. Arithmetic safety: no panic at any input
//! 2. Replace semantics: a slot's old value never counts toward its new total
//! 3. Boundary: headroom is accepted, headroom + 1 is rejected
//! 4. Invariant preservation: an accepted write keeps the total within 100
//!
//! Run all:  cargo kani --tests
//! Run one:  cargo kani --harness <name>

#[cfg(kani)]
mod kani_proofs {
    use lossless_reporting::math::{
        accepts, allocation_total, candidate_total, remaining_headroom, within_cap,
        REWARD_TOTAL_CAP,
    };

    fn any_slots() -> [u64; 4] {
        [kani::any(), kani::any(), kani::any(), kani::any()]
    }

    // ═══════════════════════════════════════════════════════════
    // 1. Arithmetic Safety: No Panics
    // ═══════════════════════════════════════════════════════════

    /// PROOF: allocation_total never panics for any u64 inputs.
    #[kani::proof]
    fn proof_total_no_panic() {
        let _ = allocation_total(any_slots());
    }

    /// PROOF: candidate_total never panics, including out-of-range indices.
    #[kani::proof]
    fn proof_candidate_no_panic() {
        let index: usize = kani::any();
        let value: u64 = kani::any();
        let _ = candidate_total(any_slots(), index, value);
    }

    // ═══════════════════════════════════════════════════════════
    // 2. Replace Semantics
    // ═══════════════════════════════════════════════════════════

    /// PROOF: the candidate total does not depend on the slot's old value.
    #[kani::proof]
    fn proof_old_value_ignored() {
        let mut slots = any_slots();
        let index: usize = kani::any();
        kani::assume(index < 4);
        let value: u64 = kani::any();
        let before = candidate_total(slots, index, value);
        slots[index] = kani::any();
        assert_eq!(candidate_total(slots, index, value), before);
    }

    // ═══════════════════════════════════════════════════════════
    // 3. Boundary
    // ═══════════════════════════════════════════════════════════

    /// PROOF: headroom is accepted, one more is rejected.
    #[kani::proof]
    fn proof_boundary_inclusive() {
        let slots = any_slots();
        let index: usize = kani::any();
        kani::assume(index < 4);
        for v in slots {
            kani::assume(v <= REWARD_TOTAL_CAP);
        }
        let others = candidate_total(slots, index, 0).unwrap();
        kani::assume(others <= REWARD_TOTAL_CAP);

        let headroom = remaining_headroom(slots, index).unwrap();
        assert!(accepts(slots, index, headroom));
        assert!(!accepts(slots, index, headroom + 1));
    }

    // ═══════════════════════════════════════════════════════════
    // 4. Invariant Preservation
    // ═══════════════════════════════════════════════════════════

    /// PROOF: after an accepted write the new total is within the cap.
    #[kani::proof]
    fn proof_accepted_write_within_cap() {
        let mut slots = any_slots();
        let index: usize = kani::any();
        kani::assume(index < 4);
        let value: u64 = kani::any();
        if accepts(slots, index, value) {
            slots[index] = value;
            let total = allocation_total(slots).unwrap();
            assert!(within_cap(total));
        }
    }

    /// PROOF: zero is accepted whenever the other slots fit.
    #[kani::proof]
    fn proof_zero_accepted() {
        let slots = any_slots();
        let index: usize = kani::any();
        kani::assume(index < 4);
        if let Some(others) = candidate_total(slots, index, 0) {
            if others <= REWARD_TOTAL_CAP {
                assert!(accepts(slots, index, 0));
            }
        }
    }
}
