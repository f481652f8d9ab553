//! Operator implementations for [`Quat`].
//!
//! The quaternion product `a * b` applies `a` first, then `b`, so that `v * (a * b)` equals
//! `(v * a) * b`. This matches the left-to-right composition of row-major matrices and is the
//! opposite of the textbook Hamilton order.

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{approx::ApproxEq, traits::Number, Vector};

use super::Quat;

impl<T: Neg<Output = T>> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            v: -self.v,
            s: -self.s,
        }
    }
}

impl<T: Add<Output = T> + Copy> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            v: self.v + rhs.v,
            s: self.s + rhs.s,
        }
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Sub<Output = T> + Copy> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            v: self.v - rhs.v,
            s: self.s - rhs.s,
        }
    }
}

impl<T: Sub<Output = T> + Copy> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            v: self.v * rhs,
            s: self.s * rhs,
        }
    }
}

impl<T: Mul<Output = T> + Copy> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            v: self.v / rhs,
            s: self.s / rhs,
        }
    }
}

impl<T: Div<Output = T> + Copy> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

/// The quaternion product, composing `self` first and `rhs` second.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self {
            v: b.v.cross(a.v) + a.v * b.s + b.v * a.s,
            s: a.s * b.s - a.v.dot(b.v),
        }
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector by a unit quaternion.
///
/// Uses the expansion `v + 2s (qv × v) + 2 (qv × (qv × v))`, which is cheaper than conjugating
/// `v` as a pure quaternion.
impl<T: Number> Mul<Quat<T>> for Vector<T, 3> {
    type Output = Self;

    fn mul(self, q: Quat<T>) -> Self {
        let two = T::ONE + T::ONE;
        let qv2 = q.v.cross(self) * two;
        self + qv2 * q.s + q.v.cross(qv2)
    }
}

impl<T: Number> MulAssign<Quat<T>> for Vector<T, 3> {
    fn mul_assign(&mut self, q: Quat<T>) {
        *self = *self * q;
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && self.s == other.s
    }
}

impl<T: Eq> Eq for Quat<T> {}

/// Lexicographic ordering over the `x`, `y`, `z`, `w` components.
impl<T: PartialOrd> PartialOrd for Quat<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.v.partial_cmp(&other.v) {
            Some(Ordering::Equal) => self.s.partial_cmp(&other.s),
            ord => ord,
        }
    }
}

impl<T: Ord> Ord for Quat<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.v.cmp(&other.v).then_with(|| self.s.cmp(&other.s))
    }
}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.v.abs_diff_eq(&other.v, abs_tolerance) && self.s.abs_diff_eq(&other.s, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.v.rel_diff_eq(&other.v, rel_tolerance) && self.s.rel_diff_eq(&other.s, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.v.ulps_diff_eq(&other.v, ulps_tolerance)
            && self.s.ulps_diff_eq(&other.s, ulps_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, vec3, Quatf, Vec3f};

    #[test]
    fn arithmetic() {
        let a = Quatf::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let b = Quatf::from_xyzw(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Quatf::from_xyzw(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Quatf::from_xyzw(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a * 2.0, Quatf::from_xyzw(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Quatf::from_xyzw(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-a, Quatf::from_xyzw(-1.0, -2.0, -3.0, -4.0));

        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        c /= 2.0;
        assert_eq!(c, a);
    }

    #[test]
    fn product_composes_left_to_right() {
        let a = Quatf::from_rotation_x(TAU / 4.0);
        let b = Quatf::from_rotation_y(TAU / 4.0);
        let v = vec3(0.0, 0.0, 1.0);
        assert_approx_eq!(v * (a * b), (v * a) * b).abs(1e-6);
    }

    #[test]
    fn rotation() {
        // Rotating +Y a quarter turn around +X yields +Z (right-handed).
        let q = Quatf::from_rotation_x(TAU / 4.0);
        assert_approx_eq!(Vec3f::Y * q, vec3(0.0, 0.0, 1.0)).abs(1e-6);

        let mut v = Vec3f::Y;
        v *= q;
        assert_approx_eq!(v, vec3(0.0, 0.0, 1.0)).abs(1e-6);
    }

    #[test]
    fn identity_product() {
        let q = Quatf::from_rotation_z(1.0);
        assert_eq!(q * Quatf::IDENTITY, q);
        assert_eq!(Quatf::IDENTITY * q, q);
    }

    #[test]
    fn lexicographic_order() {
        let a = Quatf::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let b = Quatf::from_xyzw(1.0, 2.0, 3.0, 5.0);
        let c = Quatf::from_xyzw(1.0, 3.0, 0.0, 0.0);
        assert!(a < b);
        assert!(b < c);
    }
}
