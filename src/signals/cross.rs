//! Directional cross detection between two aligned series.
//!
//! The relation of A to B is tracked as above / below / undefined. Any
//! undefined operand at an inspected point resolves to "no signal";
//! near the series start this is the dominant case, and it is a
//! contract, not an error.

/// Two-point cross on adjacent dates.
///
/// Emits +1 when A moves from at-or-below B to strictly above, -1 when
/// it moves from at-or-above to strictly below, 0 otherwise. Touching
/// the reference on the prior date still counts as the far side, so a
/// move that starts exactly on B and leaves it registers as a cross.
pub fn detect_cross(
    a_prev: Option<f64>,
    b_prev: Option<f64>,
    a_now: Option<f64>,
    b_now: Option<f64>,
) -> i8 {
    let (Some(ap), Some(bp), Some(a), Some(b)) = (a_prev, b_prev, a_now, b_now) else {
        return 0;
    };

    if ap <= bp && a > b {
        1
    } else if ap >= bp && a < b {
        -1
    } else {
        0
    }
}

/// Three-point bounce: the relation must have held at-or-below (or
/// at-or-above) on both prior dates before flipping at the evaluated
/// date. A stricter variant of [`detect_cross`] used for band-bounce
/// patterns.
pub fn detect_bounce(
    a_prev2: Option<f64>,
    b_prev2: Option<f64>,
    a_prev: Option<f64>,
    b_prev: Option<f64>,
    a_now: Option<f64>,
    b_now: Option<f64>,
) -> i8 {
    let (Some(ap2), Some(bp2), Some(ap), Some(bp), Some(a), Some(b)) =
        (a_prev2, b_prev2, a_prev, b_prev, a_now, b_now)
    else {
        return 0;
    };

    if ap2 <= bp2 && ap <= bp && a > b {
        1
    } else if ap2 >= bp2 && ap >= bp && a < b {
        -1
    } else {
        0
    }
}
