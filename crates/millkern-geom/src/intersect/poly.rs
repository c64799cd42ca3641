//! Real polynomial roots up to degree four.
//!
//! Closed-form solvers: quadratic formula, Cardano/Vieta for the cubic,
//! Ferrari's resolvent-cubic method for the quartic. Used by the
//! general-direction torus sweep, which reduces to a quartic in the sweep
//! parameter.

use millkern_math::Float;

const COEFF_EPS: Float = 1e-12;

/// Real roots of `a*x^2 + b*x + c = 0`, ascending.
pub fn solve_quadratic(a: Float, b: Float, c: Float) -> Vec<Float> {
    if a.abs() < COEFF_EPS {
        if b.abs() < COEFF_EPS {
            return Vec::new();
        }
        return vec![-c / b];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Vec::new();
    }
    let sq = disc.sqrt();
    let mut roots = vec![(-b - sq) / (2.0 * a), (-b + sq) / (2.0 * a)];
    roots.sort_by(Float::total_cmp);
    roots
}

/// Real roots of `a*x^3 + b*x^2 + c*x + d = 0`.
pub fn solve_cubic(a: Float, b: Float, c: Float, d: Float) -> Vec<Float> {
    if a.abs() < COEFF_EPS {
        return solve_quadratic(b, c, d);
    }

    // depressed form t^3 + p*t + q = 0 with x = t - b/(3a)
    let b = b / a;
    let c = c / a;
    let d = d / a;
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = d - b * c / 3.0 + 2.0 * b * b * b / 27.0;

    let delta = q * q / 4.0 + p * p * p / 27.0;
    let mut roots = Vec::new();

    if delta > COEFF_EPS {
        // one real root (Cardano)
        let sq = delta.sqrt();
        roots.push(cbrt(-q / 2.0 + sq) + cbrt(-q / 2.0 - sq) - shift);
    } else if delta.abs() <= COEFF_EPS {
        if p.abs() < COEFF_EPS && q.abs() < COEFF_EPS {
            roots.push(-shift);
        } else {
            let u = cbrt(-q / 2.0);
            roots.push(2.0 * u - shift);
            roots.push(-u - shift);
        }
    } else {
        // three real roots (Vieta's trigonometric form)
        let m = 2.0 * (-p / 3.0).sqrt();
        let theta = (3.0 * q / (p * m)).clamp(-1.0, 1.0).acos() / 3.0;
        let third = 2.0 * core::f64::consts::FRAC_PI_3 as Float;
        roots.push(m * theta.cos() - shift);
        roots.push(m * (theta - third).cos() - shift);
        roots.push(m * (theta + third).cos() - shift);
    }

    roots.sort_by(Float::total_cmp);
    roots
}

/// Real roots of `a*x^4 + b*x^3 + c*x^2 + d*x + e = 0`, ascending and
/// deduplicated.
pub fn solve_quartic(a: Float, b: Float, c: Float, d: Float, e: Float) -> Vec<Float> {
    if a.abs() < COEFF_EPS {
        return solve_cubic(b, c, d, e);
    }

    let b = b / a;
    let c = c / a;
    let d = d / a;
    let e = e / a;

    // depressed form y^4 + p*y^2 + q*y + r = 0 with x = y - b/4
    let shift = b / 4.0;
    let b2 = b * b;
    let p = c - 3.0 * b2 / 8.0;
    let q = d - b * c / 2.0 + b2 * b / 8.0;
    let r = e - b * d / 4.0 + b2 * c / 16.0 - 3.0 * b2 * b2 / 256.0;

    let mut roots = Vec::new();

    if q.abs() < COEFF_EPS {
        // biquadratic
        for y2 in solve_quadratic(1.0, p, r) {
            if y2 >= 0.0 {
                let y = y2.sqrt();
                roots.push(y - shift);
                roots.push(-y - shift);
            }
        }
    } else {
        // Ferrari: a positive root of the resolvent cubic splits the
        // quartic into two quadratics
        let resolvent = solve_cubic(8.0, 8.0 * p, 2.0 * p * p - 8.0 * r, -q * q);
        let u = resolvent
            .into_iter()
            .find(|&u| u > COEFF_EPS)
            .unwrap_or(0.0);
        let w = (2.0 * u).max(0.0).sqrt();
        if w < COEFF_EPS {
            return roots;
        }
        let alpha = p + 2.0 * u;
        let beta = q / w;

        for (lin, con) in [(-w, (alpha + beta) / 2.0), (w, (alpha - beta) / 2.0)] {
            let disc = lin * lin - 4.0 * con;
            if disc >= 0.0 {
                let sq = disc.sqrt();
                roots.push((-lin + sq) / 2.0 - shift);
                roots.push((-lin - sq) / 2.0 - shift);
            }
        }
    }

    roots.sort_by(Float::total_cmp);
    roots.dedup_by(|x, y| (*x - *y).abs() < 1e-9);
    roots
}

/// Cube root defined for negative arguments.
fn cbrt(x: Float) -> Float {
    if x >= 0.0 {
        x.powf(1.0 / 3.0)
    } else {
        -(-x).powf(1.0 / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[Float], expected: &[Float]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-7, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_quadratic_roots() {
        assert_close(&solve_quadratic(1.0, -3.0, 2.0), &[1.0, 2.0]);
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_empty());
        assert_close(&solve_quadratic(0.0, 2.0, -4.0), &[2.0]);
    }

    #[test]
    fn test_cubic_roots() {
        // (x-1)(x-2)(x-3)
        assert_close(&solve_cubic(1.0, -6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]);
        // one real root: x^3 - 1 has x = 1
        let roots = solve_cubic(1.0, 0.0, 0.0, -1.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_quartic_distinct_roots() {
        // (x-1)(x-2)(x-3)(x-4) = x^4 - 10x^3 + 35x^2 - 50x + 24
        assert_close(
            &solve_quartic(1.0, -10.0, 35.0, -50.0, 24.0),
            &[1.0, 2.0, 3.0, 4.0],
        );
    }

    #[test]
    fn test_quartic_asymmetric_roots() {
        // (x-1)(x-2)(x-3)(x-5) = x^4 - 11x^3 + 41x^2 - 61x + 30; the
        // depressed form is not symmetric, so the quadratic pairing matters
        assert_close(
            &solve_quartic(1.0, -11.0, 41.0, -61.0, 30.0),
            &[1.0, 2.0, 3.0, 5.0],
        );
    }

    #[test]
    fn test_quartic_biquadratic() {
        // (x^2-1)(x^2-4) = x^4 - 5x^2 + 4
        assert_close(
            &solve_quartic(1.0, 0.0, -5.0, 0.0, 4.0),
            &[-2.0, -1.0, 1.0, 2.0],
        );
    }

    #[test]
    fn test_quartic_no_real_roots() {
        // x^4 + 1
        assert!(solve_quartic(1.0, 0.0, 0.0, 0.0, 1.0).is_empty());
    }
}
