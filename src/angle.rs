//! Angle utilities for orientation handling in degrees.

/// Normalizes an angle in degrees into the range [0, 180).
///
/// Antipodal directions are identified (unsigned gradients): an angle and
/// its 180°-opposite map to the same value.
#[inline]
pub fn fold_unsigned_deg(angle: f32) -> f32 {
    let norm = angle.rem_euclid(180.0);
    if norm >= 180.0 - 1e-4 {
        0.0
    } else {
        norm
    }
}

/// Wraps an angle in degrees into the range [0, 360).
#[inline]
pub fn wrap_signed_deg(angle: f32) -> f32 {
    let norm = angle.rem_euclid(360.0);
    if norm >= 360.0 - 1e-4 {
        0.0
    } else {
        norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn fold_unsigned_basic() {
        assert!(approx_eq(fold_unsigned_deg(45.0), 45.0));
        assert!(approx_eq(fold_unsigned_deg(180.0), 0.0));
        assert!(approx_eq(fold_unsigned_deg(190.0), 10.0));
        assert!(approx_eq(fold_unsigned_deg(-45.0), 135.0));
        assert!(approx_eq(fold_unsigned_deg(540.0), 0.0));
    }

    #[test]
    fn fold_unsigned_snaps_near_boundary() {
        // Values that round to 180 under f32 must land on 0, not 180.
        assert_eq!(fold_unsigned_deg(-1e-6), 0.0);
        assert_eq!(fold_unsigned_deg(179.99999), 0.0);
    }

    #[test]
    fn wrap_signed_basic() {
        assert!(approx_eq(wrap_signed_deg(-90.0), 270.0));
        assert!(approx_eq(wrap_signed_deg(360.0), 0.0));
        assert!(approx_eq(wrap_signed_deg(45.0), 45.0));
        assert!(approx_eq(wrap_signed_deg(-1.0), 359.0));
    }

    #[test]
    fn outputs_stay_in_range() {
        let mut a = -1000.0f32;
        while a < 1000.0 {
            let u = fold_unsigned_deg(a);
            assert!((0.0..180.0).contains(&u), "unsigned out of range: {u}");
            let s = wrap_signed_deg(a);
            assert!((0.0..360.0).contains(&s), "signed out of range: {s}");
            a += 7.3;
        }
    }
}
