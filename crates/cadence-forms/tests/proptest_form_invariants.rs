//! Property-based invariant tests for the form-state adapters.
//!
//! Verifies structural guarantees of the frequency editor and offset
//! window:
//!
//! 1. A field seeded from a well-formed token reproduces it untouched
//! 2. Digit edits always recombine into a parseable token
//! 3. Arbitrary count text never panics; invalid text blocks the token
//! 4. Clamping into a valid window always lands inside the window
//! 5. Clamping is idempotent

use cadence_duration::{Interval, Unit, parse_duration};
use cadence_forms::{FrequencyField, OffsetWindow};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn any_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(Unit::ALL.to_vec())
}

fn any_interval() -> impl Strategy<Value = Interval> {
    (0u32..=999, any_unit()).prop_map(|(count, unit)| Interval::whole(count, unit))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Seed round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn seeded_field_reproduces_the_token(count in 0u32..=999, unit in any_unit()) {
        let token = format!("{}{}", count, unit.code());
        let field = FrequencyField::from_token(&token);
        prop_assert_eq!(field.token(), Some(token));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Digit edits recombine cleanly
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn digit_edits_produce_parseable_tokens(
        seed in 1u32..=99,
        edit in "[0-9]{1,4}",
        unit in any_unit(),
    ) {
        let mut field = FrequencyField::from_token(&format!("{seed}w"));
        field.set_count_text(edit.clone());
        field.set_unit(unit);

        let token = field.token().expect("digit text must recombine");
        let parsed = parse_duration(&token, false);
        prop_assert!(!parsed.count.is_nan());
        prop_assert_eq!(parsed.units.as_str(), unit.code());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Count edits are total; invalid text blocks the token
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_count_text_never_panics(text in ".{0,10}", unit in any_unit()) {
        let field = FrequencyField::new().with_count_text(text.clone()).with_unit(unit);
        match field.token() {
            // Whatever came out must be the grammar's own spelling.
            Some(token) => {
                let parsed = parse_duration(&token, false);
                prop_assert!(!parsed.count.is_nan());
            }
            None => prop_assert!(field.count().is_nan()),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Clamp lands inside the window
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_lands_inside_valid_windows(
        a in any_interval(),
        b in any_interval(),
        candidate in any_interval(),
    ) {
        let (min, max) = if a.approx_days() <= b.approx_days() { (a, b) } else { (b, a) };
        let window = OffsetWindow::new().with_min(min).with_max(max);
        prop_assert!(window.validate().is_ok());

        let pinned = window.clamp(candidate);
        prop_assert!(pinned.approx_days() >= min.approx_days());
        prop_assert!(pinned.approx_days() <= max.approx_days());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Clamp is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_is_idempotent(
        a in any_interval(),
        b in any_interval(),
        candidate in any_interval(),
    ) {
        let (min, max) = if a.approx_days() <= b.approx_days() { (a, b) } else { (b, a) };
        let window = OffsetWindow::new().with_min(min).with_max(max);
        let once = window.clamp(candidate);
        prop_assert_eq!(window.clamp(once), once);
    }
}
