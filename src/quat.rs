use crate::{
    traits::{Classify, FromF64, Number, Sign, Sqrt, Trig},
    One, Vec4, Vector, Zero,
};

mod ops;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of an imaginary 3-vector and a real scalar.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space: `v * q` rotates the
/// vector `v`, and `a * b` composes rotations left to right, matching the
/// [`Matrix`][crate::Matrix] convention.
///
/// Unit length is a usage contract, not an enforced invariant. No operation normalizes its
/// operands (except where documented), and rotating by a non-unit quaternion scales and skews the
/// result. [`Quat::normalize`] restores the contract after accumulating error.
#[derive(Clone, Copy, Debug, Hash)]
#[repr(C)]
pub struct Quat<T> {
    /// The imaginary `i`, `j`, `k` components.
    pub v: Vector<T, 3>,
    /// The real component.
    pub s: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, `(0, 0, 0) + 1`.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with. It is also
    /// what [`Default`] returns.
    pub const IDENTITY: Self = Self {
        v: Vector::ZERO,
        s: T::ONE,
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its imaginary vector and real scalar.
    #[inline]
    pub const fn new(v: Vector<T, 3>, s: T) -> Self {
        Self { v, s }
    }

    /// Creates a quaternion from individual components, with `x`, `y`, `z` the imaginary parts
    /// and `w` the real part.
    #[inline]
    pub fn from_xyzw(x: T, y: T, z: T, w: T) -> Self {
        Self {
            v: [x, y, z].into(),
            s: w,
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts,
    /// while the `w` component corresponds to the real part.
    #[inline]
    pub fn from_vec4(vec: Vec4<T>) -> Self {
        let [x, y, z, w] = vec.into_array();
        Self {
            v: [x, y, z].into(),
            s: w,
        }
    }

    /// Converts this quaternion into a 4-dimensional [`Vector`], imaginary parts first.
    #[inline]
    pub fn to_vec4(self) -> Vec4<T> {
        self.v.extend(self.s)
    }

    /// Computes the 4-component dot product of `self` and `other`.
    ///
    /// For unit quaternions this is the cosine of half the rotation angle between them; a
    /// negative value means the operands lie on opposite sides of the double cover.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.to_vec4().dot(other.to_vec4())
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.v.length2() + self.s * self.s
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale
    /// the vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Returns the conjugate, which negates the imaginary vector.
    ///
    /// For unit quaternions, the conjugate is the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self {
            v: -self.v,
            s: self.s,
        }
    }

    /// Returns the multiplicative inverse, `conjugate / length²`.
    ///
    /// `q * q.inverse()` is the identity for any non-zero `q`. Like
    /// [`Matrix::inverse`][crate::Mat2::inverse], the zero case is not checked.
    pub fn inverse(self) -> Self
    where
        T: Number,
    {
        self.conjugate() * (T::ONE / self.length2())
    }

    /// Returns the rotation angle between `self` and `other`, in radians.
    ///
    /// Both quaternions must be of unit length. The result is the angle of the rotation that
    /// carries one into the other, and is insensitive to the double cover.
    pub fn angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt + Sign,
    {
        let z = self * other.conjugate();
        let two = T::ONE + T::ONE;
        two * z.v.length().atan2(z.s.abs())
    }

    /// Linearly interpolates the raw components of `self` and `other`.
    ///
    /// The result is generally not of unit length. [`Quat::nlerp`] and [`Quat::slerp`] produce
    /// unit rotations.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        Self::from_vec4(self.to_vec4().lerp(other.to_vec4(), t))
    }

    /// Combines the components of `self` and `other` with explicit weights.
    pub fn lerp_weighted(self, other: Self, wa: T, wb: T) -> Self
    where
        T: Number,
    {
        Self::from_vec4(self.to_vec4().lerp_weighted(other.to_vec4(), wa, wb))
    }

    /// Normalized linear interpolation between the unit quaternions `self` and `other`.
    ///
    /// The interpolation always takes the shorter of the two arcs: when the operands lie on
    /// opposite sides of the double cover, `other` is negated. The angular velocity is not
    /// constant, but the path matches [`Quat::slerp`] and it is considerably cheaper.
    pub fn nlerp(self, other: Self, t: T) -> Self
    where
        T: Number + Sqrt + Sign,
    {
        let wa = T::ONE - t;
        let wb = t * self.dot(other).signum();
        self.lerp_weighted(other, wa, wb).normalize()
    }

    /// Spherical linear interpolation between the unit quaternions `self` and `other`.
    ///
    /// `t = 0` yields `self` and `t = 1` yields `other` (up to sign); the rotation proceeds with
    /// constant angular velocity along the shorter arc. Below half a degree of separation the
    /// trigonometry degenerates and a normalized linear interpolation is used instead.
    pub fn slerp(self, other: Self, t: T) -> Self
    where
        T: Number + Trig + Sqrt + Sign + FromF64 + PartialOrd,
    {
        let raw_cos_theta = self.dot(other);
        let sign = raw_cos_theta.signum();

        // half degree linear threshold: cos((pi / 180) * 0.25)
        let cos_theta = raw_cos_theta * sign;
        if cos_theta < T::from_f64(0.99999) {
            let theta = cos_theta.acos();
            let rsin_theta = T::ONE / (T::ONE - cos_theta * cos_theta).sqrt();
            let wa = ((T::ONE - t) * theta).sin() * rsin_theta;
            let wb = (t * theta).sin() * sign * rsin_theta;
            self.lerp_weighted(other, wa, wb)
        } else {
            let wa = T::ONE - t;
            let wb = t * sign;
            self.lerp_weighted(other, wa, wb).normalize()
        }
    }

    /// Compares `self < other` componentwise, imaginary parts first.
    pub fn less(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd + Copy,
    {
        self.to_vec4().less(other.to_vec4())
    }

    /// Compares `self <= other` componentwise, imaginary parts first.
    pub fn less_equal(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd + Copy,
    {
        self.to_vec4().less_equal(other.to_vec4())
    }

    /// Compares `self > other` componentwise, imaginary parts first.
    pub fn greater(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd + Copy,
    {
        self.to_vec4().greater(other.to_vec4())
    }

    /// Compares `self >= other` componentwise, imaginary parts first.
    pub fn greater_equal(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialOrd + Copy,
    {
        self.to_vec4().greater_equal(other.to_vec4())
    }

    /// Compares `self == other` componentwise, imaginary parts first.
    pub fn equal_to(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialEq + Copy,
    {
        self.to_vec4().equal_to(other.to_vec4())
    }

    /// Compares `self != other` componentwise, imaginary parts first.
    pub fn not_equal_to(self, other: Self) -> Vector<bool, 4>
    where
        T: PartialEq + Copy,
    {
        self.to_vec4().not_equal_to(other.to_vec4())
    }

    /// Compares componentwise with an absolute tolerance, `|a - b| <= epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: T) -> Vector<bool, 4>
    where
        T: Number + Sign + PartialOrd,
    {
        self.to_vec4().approx_eq(other.to_vec4(), epsilon)
    }

    /// The negation of [`Quat::approx_eq`].
    pub fn approx_ne(self, other: Self, epsilon: T) -> Vector<bool, 4>
    where
        T: Number + Sign + PartialOrd,
    {
        self.to_vec4().approx_ne(other.to_vec4(), epsilon)
    }

    pub fn is_nan(self) -> Vector<bool, 4>
    where
        T: Classify + Copy,
    {
        self.to_vec4().is_nan()
    }

    pub fn is_infinite(self) -> Vector<bool, 4>
    where
        T: Classify + Copy,
    {
        self.to_vec4().is_infinite()
    }

    pub fn is_finite(self) -> Vector<bool, 4>
    where
        T: Classify + Copy,
    {
        self.to_vec4().is_finite()
    }
}

impl<T: Zero + One> Default for Quat<T> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T> From<Vec4<T>> for Quat<T> {
    #[inline]
    fn from(vec: Vec4<T>) -> Self {
        Self::from_vec4(vec)
    }
}

impl<T> From<Quat<T>> for Vec4<T> {
    #[inline]
    fn from(quat: Quat<T>) -> Self {
        quat.to_vec4()
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, vec3, vec4, Vec3f};

    use super::*;

    #[test]
    fn identity() {
        assert_eq!(Quatf::default(), Quatf::IDENTITY);
        assert_eq!(Quatf::IDENTITY.to_vec4(), vec4(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quatf::IDENTITY.length2(), 1.0);

        let v = vec3(1.0, -2.0, 3.0);
        assert_eq!(v * Quatf::IDENTITY, v);
    }

    #[test]
    fn conversions() {
        let q = Quatf::from_xyzw(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.v, vec3(1.0, 2.0, 3.0));
        assert_eq!(q.s, 4.0);
        assert_eq!(q.to_vec4(), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(Quat::from_vec4(q.to_vec4()), q);
        assert_eq!(Quat::new(q.v, q.s), q);
    }

    #[test]
    fn conjugate_inverse() {
        let q = Quatf::from_rotation_z(1.0);
        assert_approx_eq!((q.conjugate() * q).to_vec4(), vec4(0.0, 0.0, 0.0, 1.0));
        assert_approx_eq!((q * q.inverse()).to_vec4(), vec4(0.0, 0.0, 0.0, 1.0));

        // For non-unit quaternions only the inverse undoes the rotation-and-scale.
        let q = q * 2.0;
        assert_approx_eq!((q * q.inverse()).to_vec4(), vec4(0.0, 0.0, 0.0, 1.0));
        assert_approx_eq!((q.conjugate() * q).s, q.length2());
    }

    #[test]
    fn normalize() {
        let q = Quatf::from_xyzw(1.0, 2.0, 3.0, 4.0).normalize();
        assert_approx_eq!(q.length(), 1.0);
    }

    #[test]
    fn angle() {
        let a = Quatf::from_rotation_z(0.0);
        let b = Quatf::from_rotation_z(TAU / 4.0);
        assert_approx_eq!(a.angle_to(b), TAU / 4.0);
        assert_approx_eq!(b.angle_to(a), TAU / 4.0);
        assert_approx_eq!(a.angle_to(a), 0.0);

        // The double cover represents the same rotation with both signs.
        assert_approx_eq!(a.angle_to(-b), TAU / 4.0);
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quatf::from_rotation_z(5.0f32.to_radians());
        let b = Quatf::from_rotation_z(75.0f32.to_radians());
        assert_approx_eq!(a.slerp(b, 0.0).to_vec4(), a.to_vec4()).abs(1e-6);
        assert_approx_eq!(a.slerp(b, 1.0).to_vec4(), b.to_vec4()).abs(1e-6);
    }

    #[test]
    fn slerp_midpoint() {
        let a = Quatf::from_rotation_z(5.0f32.to_radians());
        let b = Quatf::from_rotation_z(15.0f32.to_radians());
        let mid = Quatf::from_rotation_z(10.0f32.to_radians());
        assert_approx_eq!(a.slerp(b, 0.5).to_vec4(), mid.to_vec4()).abs(1e-6);
        assert_approx_eq!(a.nlerp(b, 0.5).to_vec4(), mid.to_vec4()).abs(1e-4);
    }

    #[test]
    fn slerp_shortest_arc() {
        let a = Quatf::from_rotation_z(10.0f32.to_radians());
        let b = -Quatf::from_rotation_z(30.0f32.to_radians());
        let mid = Quatf::from_rotation_z(20.0f32.to_radians());

        // `b` is on the far side of the double cover; interpolation still takes the short way.
        let half = a.slerp(b, 0.5);
        let rotated = Vec3f::X * half;
        assert_approx_eq!(rotated, Vec3f::X * mid).abs(1e-5);
    }

    #[test]
    fn slerp_degenerate_angle() {
        let a = Quatf::from_rotation_z(10.0f32.to_radians());
        let b = Quatf::from_rotation_z((10.01f32).to_radians());
        let q = a.slerp(b, 0.5);
        assert_approx_eq!(q.length(), 1.0);
        assert!(q.to_vec4().is_finite().all());
    }

    #[test]
    fn relational() {
        let a = Quat::from_xyzw(1, 5, 3, 0);
        let b = Quat::from_xyzw(2, 4, 3, 0);
        assert_eq!(a.less(b), vec4(true, false, false, false));
        assert_eq!(a.less_equal(b), vec4(true, false, true, true));
        assert_eq!(a.greater(b), vec4(false, true, false, false));
        assert_eq!(a.greater_equal(b), vec4(false, true, true, true));
        assert_eq!(a.equal_to(b), vec4(false, false, true, true));
        assert_eq!(a.not_equal_to(b), vec4(true, true, false, false));

        let x = Quatf::from_xyzw(1.0, 2.0, 3.0, 4.0);
        let y = Quatf::from_xyzw(1.05, 2.0, 3.0, 4.0);
        assert!(x.approx_eq(y, 0.1).all());
        assert!(x.approx_ne(y, 0.01).any());
        assert!(!x.approx_eq(y, 0.01).all());
    }

    #[test]
    fn classification() {
        let q = Quatf::from_xyzw(f32::NAN, 0.0, f32::INFINITY, 1.0);
        assert_eq!(q.is_nan(), vec4(true, false, false, false));
        assert_eq!(q.is_infinite(), vec4(false, false, true, false));
        assert_eq!(q.is_finite(), vec4(false, true, false, true));
    }
}
