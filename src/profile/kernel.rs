//! Closed-form pieces of the profile integrand.

use glam::DVec4;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Angular frequency of a deep-water gravity wave with wavenumber `k`.
///
/// See <https://en.wikipedia.org/wiki/Dispersion_(water_waves)>.
#[inline]
pub fn dispersion_relation(k: f64) -> f64 {
    (k * GRAVITY).sqrt()
}

/// Trochoidal (Gerstner) wave at `phase = k * p - ω t`.
///
/// Components:
/// 1. horizontal position offset
/// 2. vertical position offset
/// 3. derivative of the horizontal offset with respect to `p`
/// 4. derivative of the vertical offset with respect to `p`
#[inline]
pub fn gerstner_wave(phase: f64, k: f64) -> DVec4 {
    let (s, c) = phase.sin_cos();
    DVec4::new(-s, c, -k * c, -k * s)
}

/// Smooth window on `(-1, 1)`, one at zero and vanishing with zero slope at `±1`.
///
/// This is the `h00` basis of the cubic Hermite spline, mirrored to negative `x`.
#[inline]
pub fn cubic_bump(x: f64) -> f64 {
    if x.abs() >= 1.0 {
        0.0
    } else {
        x * x * (2.0 * x.abs() - 3.0) + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dispersion_relation() {
        assert_eq!(dispersion_relation(0.0), 0.0);
        for k in [0.01, 0.5, 1.0, 6.28, 100.0] {
            assert!((dispersion_relation(k) - (9.81 * k).sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gerstner_components() {
        let w = gerstner_wave(0.0, 2.0);
        assert_eq!(w, DVec4::new(-0.0, 1.0, -2.0, -0.0));

        let quarter = gerstner_wave(std::f64::consts::FRAC_PI_2, 1.0);
        assert!((quarter - DVec4::new(-1.0, 0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_bump_window_shape() {
        assert_eq!(cubic_bump(0.0), 1.0);
        assert_eq!(cubic_bump(1.0), 0.0);
        assert_eq!(cubic_bump(-1.0), 0.0);
        assert_eq!(cubic_bump(3.5), 0.0);
        assert!((cubic_bump(0.5) - 0.5).abs() < 1e-12);
        assert_eq!(cubic_bump(0.3), cubic_bump(-0.3));
    }

    proptest! {
        #[test]
        fn gerstner_derivatives_match_offsets(phase in -50.0f64..50.0, k in 0.01f64..20.0) {
            // d/dp of the offsets at phase = k*p, by central differences in p
            let h = 1e-6;
            let p = phase / k;
            let ahead = gerstner_wave(k * (p + h), k);
            let behind = gerstner_wave(k * (p - h), k);
            let wave = gerstner_wave(phase, k);

            let d_horizontal = (ahead.x - behind.x) / (2.0 * h);
            let d_vertical = (ahead.y - behind.y) / (2.0 * h);
            let tol = 1e-4 * (1.0 + k * k);

            prop_assert!((wave.z - d_horizontal).abs() < tol);
            prop_assert!((wave.w - d_vertical).abs() < tol);
            prop_assert!((wave.z + k * phase.cos()).abs() < 1e-9);
            prop_assert!((wave.w + k * phase.sin()).abs() < 1e-9);
        }

        #[test]
        fn bump_vanishes_outside_unit_interval(x in 1.0f64..1e6) {
            prop_assert_eq!(cubic_bump(x), 0.0);
            prop_assert_eq!(cubic_bump(-x), 0.0);
        }

        #[test]
        fn bump_is_continuous_at_support_edge(eps in 1e-4f64..1e-2) {
            prop_assert!(cubic_bump(1.0 - eps) < 4.0 * eps * eps);
            prop_assert!(cubic_bump(-1.0 + eps) < 4.0 * eps * eps);
            prop_assert!(cubic_bump(1.0 - eps) >= 0.0);
        }
    }
}
