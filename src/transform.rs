//! Constructors for rotations, affine transforms, and projections.
//!
//! Everything here follows the row-vector convention: `v * m` applies a transform, products
//! compose left to right, and translation occupies the last row of a homogeneous matrix. A 3D
//! point is transformed by a 4x4 matrix as `(p.extend(1) * m).truncate()`.
//!
//! The projection constructors map depth to the `0..1` range used by Direct3D and modern
//! Vulkan/Metal pipelines. The `_lh`/`_rh` suffix picks the handedness of the view space.

use crate::{
    traits::{FromF64, MinMax, Number, Sign, Sqrt, Trig},
    vec3, vec4, Mat3, Matrix, Quat, Vec2, Vec3, Vector,
};

fn one_half<T: Number>() -> T {
    T::ONE / (T::ONE + T::ONE)
}

fn two<T: Number>() -> T {
    T::ONE + T::ONE
}

impl<T: Number + Trig> Quat<T> {
    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// The axis does not have to be normalized, but must be non-zero.
    pub fn from_angle_axis(angle: T, axis: Vec3<T>) -> Self
    where
        T: Sqrt,
    {
        let (s, c) = (angle * one_half()).sin_cos();
        Self::new(axis.normalize() * s, c)
    }

    /// Creates a rotation of `angle` radians around the X axis.
    pub fn from_rotation_x(angle: T) -> Self {
        let (s, c) = (angle * one_half()).sin_cos();
        Self::new(vec3(s, T::ZERO, T::ZERO), c)
    }

    /// Creates a rotation of `angle` radians around the Y axis.
    pub fn from_rotation_y(angle: T) -> Self {
        let (s, c) = (angle * one_half()).sin_cos();
        Self::new(vec3(T::ZERO, s, T::ZERO), c)
    }

    /// Creates a rotation of `angle` radians around the Z axis.
    pub fn from_rotation_z(angle: T) -> Self {
        let (s, c) = (angle * one_half()).sin_cos();
        Self::new(vec3(T::ZERO, T::ZERO, s), c)
    }

    /// Creates a rotation from Euler angles, applied around the X, Y, and Z axes in that order.
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }
}

impl<T: Number + Sqrt + Sign + MinMax> Quat<T> {
    /// Extracts the rotation of a 3x3 rotation matrix.
    ///
    /// The matrix must be orthonormal with determinant one; this is not checked. The conversion
    /// is branch-free: all four candidate magnitudes are computed at once, with the signs
    /// recovered from the skew-symmetric part of the matrix.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.into_rows();

        let magnitudes = vec4(
            T::ONE + m00 - m11 - m22,
            T::ONE - m00 + m11 - m22,
            T::ONE - m00 - m11 + m22,
            T::ONE + m00 + m11 + m22,
        );
        // max() clamps small negative values caused by rounding.
        let xyzw = magnitudes.max(Vector::ZERO).sqrt() * one_half::<T>();

        Self::from_vec4(xyzw.copysign(vec4(m12 - m21, m20 - m02, m01 - m10, T::ONE)))
    }

    /// Builds a left-handed view rotation looking along `dir`, with `up` fixing the roll.
    pub fn look_at_lh(dir: Vec3<T>, up: Vec3<T>) -> Self {
        Self::from_mat3(Mat3::look_at_lh(dir, up))
    }

    /// Builds a right-handed view rotation looking along `dir`, with `up` fixing the roll.
    pub fn look_at_rh(dir: Vec3<T>, up: Vec3<T>) -> Self {
        Self::from_mat3(Mat3::look_at_rh(dir, up))
    }
}

impl<T: Number + Sqrt + Sign + FromF64 + PartialOrd> Quat<T> {
    /// Returns the shortest-arc rotation that carries `from` onto `to`.
    ///
    /// Neither vector has to be normalized, but both must be non-zero. Antiparallel vectors have
    /// no unique shortest arc; in that case a half turn around a deterministically chosen
    /// perpendicular axis is returned.
    pub fn between(from: Vec3<T>, to: Vec3<T>) -> Self {
        let norm = (from.length2() * to.length2()).sqrt();
        let real = from.dot(to) + norm;

        if real < T::from_f64(1e-6) * norm {
            // Antiparallel within tolerance. Swap the two largest components of `from` to get a
            // perpendicular axis.
            return if from.z.abs() < from.x.abs() {
                Self::new(vec3(-from.y, from.x, T::ZERO), T::ZERO).normalize()
            } else {
                Self::new(vec3(T::ZERO, -from.z, from.y), T::ZERO).normalize()
            };
        }

        Self::new(from.cross(to), real).normalize()
    }
}

impl<T: Number + Trig> Matrix<T, 2> {
    /// Creates a matrix rotating 2D vectors counterclockwise by `angle` radians.
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let rows = [
            [ c, s],
            [-s, c],
        ];
        Self::from_rows(rows)
    }
}

impl<T: Number> Matrix<T, 2> {
    /// Creates a matrix scaling each axis by the matching component of `v`.
    pub fn scaling(v: Vec2<T>) -> Self {
        Self::from_diagonal(v)
    }

    /// Creates a shear matrix: `v.x` tilts the Y axis towards X, `v.y` tilts X towards Y.
    pub fn shearing(v: Vec2<T>) -> Self {
        Self::from_rows([[T::ONE, v.y], [v.x, T::ONE]])
    }
}

impl<T: Number + Sqrt> Matrix<T, 3> {
    /// Converts a quaternion into the equivalent rotation matrix.
    ///
    /// The quaternion is normalized first, so any non-zero quaternion yields a pure rotation.
    pub fn from_quat(q: Quat<T>) -> Self {
        let q = q.normalize();
        let [x, y, z] = q.v.into_array();
        let s = q.s;

        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx2, yy2, zz2) = (x2 * x, y2 * y, z2 * z);
        let (xy2, xz2, yz2) = (x2 * y, x2 * z, y2 * z);
        let (sx2, sy2, sz2) = (x2 * s, y2 * s, z2 * s);

        Self::from_rows([
            [T::ONE - (yy2 + zz2), xy2 + sz2, xz2 - sy2],
            [xy2 - sz2, T::ONE - (xx2 + zz2), yz2 + sx2],
            [xz2 + sy2, yz2 - sx2, T::ONE - (xx2 + yy2)],
        ])
    }

    /// Creates a matrix rotating by `angle` radians around `axis`.
    ///
    /// The axis does not have to be normalized, but must be non-zero.
    pub fn rotation(angle: T, axis: Vec3<T>) -> Self
    where
        T: Trig,
    {
        let (s, c) = angle.sin_cos();
        let [x, y, z] = axis.normalize().into_array();

        let ic = T::ONE - c;
        let (xs, ys, zs) = (x * s, y * s, z * s);
        let (xxm, yym, zzm) = (x * x * ic, y * y * ic, z * z * ic);
        let (xym, xzm, yzm) = (x * y * ic, x * z * ic, y * z * ic);

        Self::from_rows([
            [xxm + c, xym + zs, xzm - ys],
            [xym - zs, yym + c, yzm + xs],
            [xzm + ys, yzm - xs, zzm + c],
        ])
    }

    /// Builds a left-handed view rotation looking along `dir`, with `up` fixing the roll.
    ///
    /// `dir` and `up` must be non-zero and not parallel to each other.
    pub fn look_at_lh(dir: Vec3<T>, up: Vec3<T>) -> Self {
        Self::look_along(dir.normalize(), up)
    }

    /// Builds a right-handed view rotation looking along `dir`, with `up` fixing the roll.
    pub fn look_at_rh(dir: Vec3<T>, up: Vec3<T>) -> Self {
        Self::look_along(-dir.normalize(), up)
    }

    fn look_along(az: Vec3<T>, up: Vec3<T>) -> Self {
        let ax = up.cross(az).normalize();
        let ay = az.cross(ax);
        // The basis vectors land in the columns so that `v * m` maps into view space.
        Self::from_rows([
            [ax.x, ay.x, az.x],
            [ax.y, ay.y, az.y],
            [ax.z, ay.z, az.z],
        ])
    }
}

impl<T: Number + Sqrt> From<Quat<T>> for Matrix<T, 3> {
    fn from(q: Quat<T>) -> Self {
        Self::from_quat(q)
    }
}

impl<T: Number + Trig> Matrix<T, 3> {
    /// Creates a matrix rotating by `angle` radians around the X axis.
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let rows = [
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO,  c, s],
            [T::ZERO, -s, c],
        ];
        Self::from_rows(rows)
    }

    /// Creates a matrix rotating by `angle` radians around the Y axis.
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let rows = [
            [c, T::ZERO, -s],
            [T::ZERO, T::ONE, T::ZERO],
            [s, T::ZERO,  c],
        ];
        Self::from_rows(rows)
    }

    /// Creates a matrix rotating by `angle` radians around the Z axis.
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let rows = [
            [ c, s, T::ZERO],
            [-s, c, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ];
        Self::from_rows(rows)
    }
}

impl<T: Number> Matrix<T, 3> {
    /// Creates a homogeneous matrix translating 2D points by `v`.
    pub fn translation(v: Vec2<T>) -> Self {
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO],
            [v.x, v.y, T::ONE],
        ])
    }

    /// Creates a matrix scaling each axis by the matching component of `v`.
    pub fn scaling(v: Vec3<T>) -> Self {
        Self::from_diagonal(v)
    }

    /// Composes a 2D scale, rotation, and translation into one homogeneous matrix.
    ///
    /// A transformed point is scaled first, then rotated, then translated. The argument
    /// order follows the conventional TRS naming, not the application order.
    pub fn trs(translation: Vec2<T>, rotation: Matrix<T, 2>, scaling: Vec2<T>) -> Self {
        Self::from_rows([
            (rotation.row(0) * scaling.x).extend(T::ZERO),
            (rotation.row(1) * scaling.y).extend(T::ZERO),
            translation.extend(T::ONE),
        ])
    }
}

impl<T: Number> Matrix<T, 4> {
    /// Embeds a 3x3 linear transform into a homogeneous 4x4 matrix.
    pub fn from_mat3(m: Matrix<T, 3>) -> Self {
        Self::from_rows([
            m.row(0).extend(T::ZERO),
            m.row(1).extend(T::ZERO),
            m.row(2).extend(T::ZERO),
            Vector::W,
        ])
    }

    /// Creates a homogeneous matrix translating 3D points by `v`.
    pub fn translation(v: Vec3<T>) -> Self {
        Self::from_rows([
            Vector::<T, 4>::X,
            Vector::<T, 4>::Y,
            Vector::<T, 4>::Z,
            v.extend(T::ONE),
        ])
    }

    /// Creates a matrix scaling each axis by the matching component of `v`.
    pub fn scaling(v: Vec3<T>) -> Self {
        Self::from_diagonal(v.extend(T::ONE))
    }

    /// Composes a scale, rotation, and translation into one homogeneous matrix.
    ///
    /// A transformed point is scaled first, then rotated, then translated. The argument
    /// order follows the conventional TRS naming, not the application order. The rotation
    /// may be given as a [`Mat3`] or as a [`Quat`].
    pub fn trs(
        translation: Vec3<T>,
        rotation: impl Into<Matrix<T, 3>>,
        scaling: Vec3<T>,
    ) -> Self {
        let r = rotation.into();
        Self::from_rows([
            (r.row(0) * scaling.x).extend(T::ZERO),
            (r.row(1) * scaling.y).extend(T::ZERO),
            (r.row(2) * scaling.z).extend(T::ZERO),
            translation.extend(T::ONE),
        ])
    }

    /// A left-handed orthographic projection with a `width` by `height` viewing volume.
    ///
    /// X and Y map to `-1..1` and the `znear..zfar` depth range maps to `0..1`.
    pub fn orthographic_lh(width: T, height: T, znear: T, zfar: T) -> Self {
        let sz = T::ONE / (zfar - znear);
        Self::orthographic(two::<T>() / width, two::<T>() / height, sz, -sz * znear)
    }

    /// A right-handed orthographic projection with a `width` by `height` viewing volume.
    pub fn orthographic_rh(width: T, height: T, znear: T, zfar: T) -> Self {
        let sz = T::ONE / (znear - zfar);
        Self::orthographic(two::<T>() / width, two::<T>() / height, sz, sz * znear)
    }

    fn orthographic(sx: T, sy: T, sz: T, tz: T) -> Self {
        Self::from_rows([
            vec4(sx, T::ZERO, T::ZERO, T::ZERO),
            vec4(T::ZERO, sy, T::ZERO, T::ZERO),
            vec4(T::ZERO, T::ZERO, sz, T::ZERO),
            vec4(T::ZERO, T::ZERO, tz, T::ONE),
        ])
    }

    /// A left-handed perspective projection with a `width` by `height` viewing plane at `znear`.
    ///
    /// The `znear..zfar` depth range maps to `0..1`. After the perspective divide by `w`, X and
    /// Y are in `-1..1`.
    pub fn perspective_lh(width: T, height: T, znear: T, zfar: T) -> Self {
        let near2 = two::<T>() * znear;
        Self::perspective(
            near2 / width,
            near2 / height,
            zfar / (zfar - znear),
            znear * zfar / (znear - zfar),
            T::ONE,
        )
    }

    /// A right-handed perspective projection with a `width` by `height` viewing plane at `znear`.
    pub fn perspective_rh(width: T, height: T, znear: T, zfar: T) -> Self {
        let near2 = two::<T>() * znear;
        Self::perspective(
            near2 / width,
            near2 / height,
            zfar / (znear - zfar),
            znear * zfar / (znear - zfar),
            -T::ONE,
        )
    }

    /// A left-handed perspective projection from a vertical field of view.
    ///
    /// `fovy` is the full vertical viewing angle in radians, `aspect` the width to height ratio
    /// of the viewport.
    pub fn perspective_fov_lh(fovy: T, aspect: T, znear: T, zfar: T) -> Self
    where
        T: Trig,
    {
        let sy = T::ONE / (fovy * one_half()).tan();
        Self::perspective(
            sy / aspect,
            sy,
            zfar / (zfar - znear),
            znear * zfar / (znear - zfar),
            T::ONE,
        )
    }

    /// A right-handed perspective projection from a vertical field of view.
    pub fn perspective_fov_rh(fovy: T, aspect: T, znear: T, zfar: T) -> Self
    where
        T: Trig,
    {
        let sy = T::ONE / (fovy * one_half()).tan();
        Self::perspective(
            sy / aspect,
            sy,
            zfar / (znear - zfar),
            znear * zfar / (znear - zfar),
            -T::ONE,
        )
    }

    fn perspective(sx: T, sy: T, sz: T, tz: T, w: T) -> Self {
        Self::from_rows([
            vec4(sx, T::ZERO, T::ZERO, T::ZERO),
            vec4(T::ZERO, sy, T::ZERO, T::ZERO),
            vec4(T::ZERO, T::ZERO, sz, w),
            vec4(T::ZERO, T::ZERO, tz, T::ZERO),
        ])
    }
}

impl<T: Number + Sqrt> Matrix<T, 4> {
    /// Builds a left-handed view matrix for a camera at `eye` looking at `at`.
    ///
    /// `up` fixes the roll and must not be parallel to the view direction.
    pub fn look_at_lh(eye: Vec3<T>, at: Vec3<T>, up: Vec3<T>) -> Self {
        Self::look_along(eye, (at - eye).normalize(), up)
    }

    /// Builds a right-handed view matrix for a camera at `eye` looking at `at`.
    pub fn look_at_rh(eye: Vec3<T>, at: Vec3<T>, up: Vec3<T>) -> Self {
        Self::look_along(eye, (eye - at).normalize(), up)
    }

    fn look_along(eye: Vec3<T>, az: Vec3<T>, up: Vec3<T>) -> Self {
        let ax = up.cross(az).normalize();
        let ay = az.cross(ax);
        Self::from_rows([
            vec4(ax.x, ay.x, az.x, T::ZERO),
            vec4(ax.y, ay.y, az.y, T::ZERO),
            vec4(ax.z, ay.z, az.z, T::ZERO),
            vec4(-ax.dot(eye), -ay.dot(eye), -az.dot(eye), T::ONE),
        ])
    }
}

impl<T: Number + Trig> Vector<T, 2> {
    /// Rotates this vector counterclockwise by `angle` radians.
    pub fn rotated(self, angle: T) -> Self {
        self * Matrix::<T, 2>::rotation(angle)
    }
}

impl<T: Number + Trig> Vector<T, 3> {
    /// Rotates this vector by `angle` radians around the X axis.
    pub fn rotated_x(self, angle: T) -> Self {
        self * Quat::from_rotation_x(angle)
    }

    /// Rotates this vector by `angle` radians around the Y axis.
    pub fn rotated_y(self, angle: T) -> Self {
        self * Quat::from_rotation_y(angle)
    }

    /// Rotates this vector by `angle` radians around the Z axis.
    pub fn rotated_z(self, angle: T) -> Self {
        self * Quat::from_rotation_z(angle)
    }

    /// Rotates this vector by `angle` radians around `axis`.
    pub fn rotated(self, angle: T, axis: Vec3<T>) -> Self
    where
        T: Sqrt,
    {
        self * Quat::from_angle_axis(angle, axis)
    }
}
