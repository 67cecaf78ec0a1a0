//! 4x4 linear operators with a constant offset
//!
//! A [`Mat4`] is an affine map on 4D space: a 4x4 linear part (stored
//! column-major) plus an offset vector, 20 scalar coefficients in total.
//! Its main job here is building canonical rotation operators for the six
//! coordinate planes.

use crate::{RotationPlane, Vec4};

/// Affine operator on 4D space: `apply(v) = linear * v + offset`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    /// Linear part, column-major
    pub linear: [[f32; 4]; 4],
    /// Constant offset added after the linear map
    pub offset: Vec4,
}

const LINEAR_IDENTITY: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

impl Mat4 {
    /// Identity operator
    pub const IDENTITY: Self = Self {
        linear: LINEAR_IDENTITY,
        offset: Vec4::ZERO,
    };

    /// Create a rotation operator for a coordinate plane.
    ///
    /// The operator fixes the two axes not in the plane and rotates the
    /// plane's canonical axis pair `(p1, p2)` by `angle` using the standard
    /// 2D rotation `(cos, -sin; sin, cos)`. The offset is zero.
    ///
    /// Because the plane itself is an unordered pair, both spellings of a
    /// plane label produce this same operator.
    pub fn plane_rotation(plane: RotationPlane, angle: f32) -> Self {
        let cs = angle.cos();
        let sn = angle.sin();
        let (p1, p2) = plane.axes();

        let mut m = LINEAR_IDENTITY;

        // Rotation in plane p1-p2
        m[p1][p1] = cs;
        m[p2][p2] = cs;
        m[p1][p2] = sn;
        m[p2][p1] = -sn;

        Self {
            linear: m,
            offset: Vec4::ZERO,
        }
    }

    /// Create a rotation operator about an arbitrary center point.
    ///
    /// Same linear part as [`Mat4::plane_rotation`], with the offset chosen
    /// so that `center` is a fixed point: `offset = center - R * center`.
    pub fn rotation_about(plane: RotationPlane, angle: f32, center: Vec4) -> Self {
        let rotation = Self::plane_rotation(plane, angle);
        Self {
            linear: rotation.linear,
            offset: center - rotation.apply(center),
        }
    }

    /// Apply the operator to a vector: `linear * v + offset`
    pub fn apply(&self, v: Vec4) -> Vec4 {
        let m = &self.linear;
        Vec4::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
            m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
        ) + self.offset
    }

    /// Compose two operators: `result.apply(v) == a.apply(b.apply(v))`
    #[allow(clippy::needless_range_loop)]
    pub fn mul(a: Self, b: Self) -> Self {
        let mut linear = [[0.0f32; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    linear[i][j] += a.linear[k][j] * b.linear[i][k];
                }
            }
        }

        let linear_only = Self {
            linear: a.linear,
            offset: Vec4::ZERO,
        };

        Self {
            linear,
            offset: linear_only.apply(b.offset) + a.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(vec_approx_eq(Mat4::IDENTITY.apply(v), v));
    }

    #[test]
    fn test_offset_applied_after_linear() {
        let m = Mat4 {
            linear: LINEAR_IDENTITY,
            offset: Vec4::new(1.0, -2.0, 3.0, -4.0),
        };
        let v = Vec4::new(10.0, 10.0, 10.0, 10.0);
        assert!(vec_approx_eq(m.apply(v), Vec4::new(11.0, 8.0, 13.0, 6.0)));
    }

    #[test]
    fn test_plane_rotation_yz() {
        use std::f32::consts::FRAC_PI_2;

        // 90° rotation in YZ plane
        let m = Mat4::plane_rotation(RotationPlane::YZ, FRAC_PI_2);

        // Y should go to Z
        let result = m.apply(Vec4::Y);
        assert!(vec_approx_eq(result, Vec4::Z), "Y should become Z, got {:?}", result);

        // Z should go to -Y
        let result = m.apply(Vec4::Z);
        assert!(vec_approx_eq(result, -Vec4::Y), "Z should become -Y, got {:?}", result);

        // X should be unchanged
        let result = m.apply(Vec4::X);
        assert!(vec_approx_eq(result, Vec4::X), "X should be unchanged, got {:?}", result);
    }

    #[test]
    fn test_plane_rotation_xw() {
        use std::f32::consts::FRAC_PI_2;

        let m = Mat4::plane_rotation(RotationPlane::XW, FRAC_PI_2);
        assert!(vec_approx_eq(m.apply(Vec4::X), Vec4::W));
        assert!(vec_approx_eq(m.apply(Vec4::W), -Vec4::X));
        assert!(vec_approx_eq(m.apply(Vec4::Y), Vec4::Y));
        assert!(vec_approx_eq(m.apply(Vec4::Z), Vec4::Z));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        for plane in RotationPlane::ALL {
            let m = Mat4::plane_rotation(plane, 1.23);
            assert!(
                approx_eq(m.apply(v).length(), v.length()),
                "rotation in {} changed length",
                plane
            );
        }
    }

    #[test]
    fn test_rotation_inverse_law() {
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        for plane in RotationPlane::ALL {
            let forward = Mat4::plane_rotation(plane, 0.7);
            let back = Mat4::plane_rotation(plane, -0.7);
            let result = Mat4::mul(back, forward).apply(v);
            assert!(
                vec_approx_eq(result, v),
                "R(-θ)·R(θ) in {} is not identity, got {:?}",
                plane,
                result
            );
        }
    }

    #[test]
    fn test_plane_label_symmetry() {
        // Both spellings of a plane label must build the identical operator.
        let labels = [("x-y", "y-x"), ("x-z", "z-x"), ("y-z", "z-y"),
                      ("x-w", "w-x"), ("y-w", "w-y"), ("z-w", "w-z")];
        for (a, b) in labels {
            for &angle in &[0.3f32, -1.1, 2.9] {
                let pa: RotationPlane = a.parse().unwrap();
                let pb: RotationPlane = b.parse().unwrap();
                assert_eq!(
                    Mat4::plane_rotation(pa, angle),
                    Mat4::plane_rotation(pb, angle),
                    "operators for '{}' and '{}' differ",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_mul_composition() {
        use std::f32::consts::FRAC_PI_4;

        // Two 45° rotations should equal one 90° rotation
        let r45 = Mat4::plane_rotation(RotationPlane::XY, FRAC_PI_4);
        let r90 = Mat4::plane_rotation(RotationPlane::XY, FRAC_PI_4 * 2.0);

        let composed = Mat4::mul(r45, r45);

        let v = Vec4::X;
        assert!(vec_approx_eq(composed.apply(v), r90.apply(v)));
    }

    #[test]
    fn test_rotation_about_fixes_center() {
        let center = Vec4::new(50.0, 50.0, 50.0, 50.0);
        let m = Mat4::rotation_about(RotationPlane::ZW, 1.0, center);
        assert!(vec_approx_eq(m.apply(center), center));
    }

    #[test]
    fn test_rotation_about_matches_translated_rotation() {
        let center = Vec4::new(10.0, 0.0, -5.0, 2.0);
        let v = Vec4::new(12.0, 3.0, -5.0, 4.0);
        let about = Mat4::rotation_about(RotationPlane::XY, 0.8, center);
        let plain = Mat4::plane_rotation(RotationPlane::XY, 0.8);
        let expected = plain.apply(v - center) + center;
        assert!(vec_approx_eq(about.apply(v), expected));
    }
}
