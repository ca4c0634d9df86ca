//! Plain `[f64; 3]` helpers for projected points.

/// A point in R³
pub type Point3 = [f64; 3];

pub fn sub(a: &Point3, b: &Point3) -> Point3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn dot(a: &Point3, b: &Point3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: &Point3, b: &Point3) -> Point3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn norm(a: &Point3) -> f64 {
    dot(a, a).sqrt()
}

pub fn distance(a: &Point3, b: &Point3) -> f64 {
    norm(&sub(a, b))
}

/// Rotate `p` by `angle` about `axis` (Rodrigues' formula).
///
/// A zero axis leaves `p` unchanged.
pub fn rotate_about(p: &Point3, axis: &Point3, angle: f64) -> Point3 {
    let len = norm(axis);
    if len < 1e-12 {
        return *p;
    }
    let k = [axis[0] / len, axis[1] / len, axis[2] / len];
    let (sin, cos) = angle.sin_cos();
    let kxp = cross(&k, p);
    let kdp = dot(&k, p) * (1.0 - cos);

    [
        p[0] * cos + kxp[0] * sin + k[0] * kdp,
        p[1] * cos + kxp[1] * sin + k[1] * kdp,
        p[2] * cos + kxp[2] * sin + k[2] * kdp,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotate_quarter_turn_about_z() {
        let r = rotate_about(&[1.0, 0.0, 0.0], &[0.0, 0.0, 2.0], FRAC_PI_2);
        assert_abs_diff_eq!(r[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let p = [0.3, -1.2, 2.5];
        let r = rotate_about(&p, &[1.0, 1.0, 1.0], 1.234);
        assert_abs_diff_eq!(norm(&r), norm(&p), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_axis_is_identity() {
        let p = [1.0, 2.0, 3.0];
        assert_eq!(rotate_about(&p, &[0.0; 3], 1.0), p);
    }
}
