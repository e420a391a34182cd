//! Unit tests for the directional cross detector

use indextrix::signals::cross::{detect_bounce, detect_cross};

#[test]
fn any_undefined_operand_emits_no_signal() {
    let cases = [
        (None, Some(1.0), Some(2.0), Some(1.0)),
        (Some(0.5), None, Some(2.0), Some(1.0)),
        (Some(0.5), Some(1.0), None, Some(1.0)),
        (Some(0.5), Some(1.0), Some(2.0), None),
        (None, None, None, None),
    ];
    for (ap, bp, a, b) in cases {
        assert_eq!(detect_cross(ap, bp, a, b), 0);
    }
}

#[test]
fn upward_cross_emits_plus_one() {
    assert_eq!(detect_cross(Some(98.0), Some(99.0), Some(101.0), Some(99.3)), 1);
}

#[test]
fn downward_cross_emits_minus_one() {
    assert_eq!(detect_cross(Some(101.0), Some(99.3), Some(98.0), Some(99.0)), -1);
}

#[test]
fn touching_the_reference_counts_as_the_far_side() {
    // Starting exactly on the reference and leaving it is a cross.
    assert_eq!(detect_cross(Some(99.0), Some(99.0), Some(100.0), Some(99.0)), 1);
    assert_eq!(detect_cross(Some(99.0), Some(99.0), Some(98.0), Some(99.0)), -1);
}

#[test]
fn staying_on_one_side_emits_nothing() {
    assert_eq!(detect_cross(Some(101.0), Some(99.0), Some(102.0), Some(99.5)), 0);
    assert_eq!(detect_cross(Some(95.0), Some(99.0), Some(96.0), Some(99.5)), 0);
}

#[test]
fn landing_exactly_on_the_reference_is_not_a_cross() {
    assert_eq!(detect_cross(Some(98.0), Some(99.0), Some(99.0), Some(99.0)), 0);
}

#[test]
fn bounce_requires_two_held_points() {
    // Held below on both prior points, then flips: bounce.
    assert_eq!(
        detect_bounce(
            Some(97.0),
            Some(98.0),
            Some(97.5),
            Some(98.0),
            Some(99.0),
            Some(98.0)
        ),
        1
    );
    // Only the immediately prior point held below: no bounce.
    assert_eq!(
        detect_bounce(
            Some(99.0),
            Some(98.0),
            Some(97.5),
            Some(98.0),
            Some(99.0),
            Some(98.0)
        ),
        0
    );
}

#[test]
fn downward_bounce_emits_minus_one() {
    assert_eq!(
        detect_bounce(
            Some(103.0),
            Some(102.0),
            Some(102.5),
            Some(102.0),
            Some(101.0),
            Some(102.0)
        ),
        -1
    );
}

#[test]
fn bounce_with_undefined_history_emits_nothing() {
    assert_eq!(
        detect_bounce(None, Some(98.0), Some(97.5), Some(98.0), Some(99.0), Some(98.0)),
        0
    );
}
