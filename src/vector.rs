use std::{array, fmt};

use crate::{
    fold1_and, fold1_or, fold1_plus, map, map2, map3,
    traits::{Classify, FromF64, Number, Round, Sign, Sqrt, Trig},
    Exp, MinMax, One, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element row vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction.
///
/// # Element Access
///
/// Vector elements can be accessed and inspected in a few different ways:
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays and panic when the index
///   is out of range; [`Vector::get`] and [`Vector::get_mut`] are the non-panicking versions.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - A [`From`] impl allows conversion from a [`Vector`] to an array of the same length.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] allow the same
///   operations without requiring type annotations.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Ordering
///
/// [`PartialOrd`] and [`Ord`] compare lexicographically by position, like arrays do. This makes
/// vectors usable as keys in ordered containers; it has no geometric meaning.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        map(f, self)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = vec2(1, 2);
    /// assert_eq!(v.get(1), Some(&2));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The element types of the operands may differ. The products are summed left to right.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot<U, V>(self, other: Vector<U, N>) -> V
    where
        T: std::ops::Mul<U, Output = V> + Copy,
        U: Copy,
        V: std::ops::Add<Output = V> + Copy,
    {
        fold1_plus(|a, b| a * b, self, other)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction; normalizing it yields whatever dividing by a zero length
    /// yields for `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (other - self).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (other - self).length()
    }

    /// Projects `self` onto `onto`.
    ///
    /// `onto` does not have to be a unit vector.
    pub fn project(self, onto: Self) -> Self
    where
        T: Number,
    {
        onto * (self.dot(onto) / onto.length2())
    }

    /// Returns the component of `self` perpendicular to `onto`.
    ///
    /// `self` is the sum of its projection onto and rejection from any non-zero vector.
    pub fn reject(self, onto: Self) -> Self
    where
        T: Number,
    {
        self - self.project(onto)
    }

    /// Reflects `self` at the plane with unit normal `normal`.
    pub fn reflect(self, normal: Self) -> Self
    where
        T: Number,
    {
        let two = T::ONE + T::ONE;
        self - normal * (two * self.dot(normal))
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    pub fn angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        map2(T::min, self, other)
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        map2(T::max, self, other)
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        map3(T::clamp, self, min, max)
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`. `t` is not clamped.
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Combines `self` and `other` with explicit weights, `self * wa + other * wb`.
    pub fn lerp_weighted(self, other: Self, wa: T, wb: T) -> Self
    where
        T: Number,
    {
        self * wa + other * wb
    }
}

/// Relational functions. Each compares positionwise and returns a [`Vector`] of [`bool`]s, to be
/// reduced with [`Vector::any`] or [`Vector::all`].
impl<T, const N: usize> Vector<T, N> {
    /// Compares `self < other` positionwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// assert_eq!(vec3(1, 5, 3).less(vec3(2, 4, 3)), vec3(true, false, false));
    /// ```
    pub fn less(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd + Copy,
    {
        map2(|a, b| a < b, self, other)
    }

    /// Compares `self <= other` positionwise.
    pub fn less_equal(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd + Copy,
    {
        map2(|a, b| a <= b, self, other)
    }

    /// Compares `self > other` positionwise.
    pub fn greater(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd + Copy,
    {
        map2(|a, b| a > b, self, other)
    }

    /// Compares `self >= other` positionwise.
    pub fn greater_equal(self, other: Self) -> Vector<bool, N>
    where
        T: PartialOrd + Copy,
    {
        map2(|a, b| a >= b, self, other)
    }

    /// Compares `self == other` positionwise.
    pub fn equal_to(self, other: Self) -> Vector<bool, N>
    where
        T: PartialEq + Copy,
    {
        map2(|a, b| a == b, self, other)
    }

    /// Compares `self != other` positionwise.
    pub fn not_equal_to(self, other: Self) -> Vector<bool, N>
    where
        T: PartialEq + Copy,
    {
        map2(|a, b| a != b, self, other)
    }

    /// Compares positionwise with an absolute tolerance, `|a - b| <= epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: T) -> Vector<bool, N>
    where
        T: Number + Sign + PartialOrd,
    {
        map2(|a, b| (a - b).abs() <= epsilon, self, other)
    }

    /// The negation of [`Vector::approx_eq`].
    pub fn approx_ne(self, other: Self, epsilon: T) -> Vector<bool, N>
    where
        T: Number + Sign + PartialOrd,
    {
        map2(|a, b| (a - b).abs() > epsilon, self, other)
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns whether any element is `true`. Always inspects all elements.
    pub fn any(self) -> bool {
        fold1_or(self)
    }

    /// Returns whether every element is `true`. Always inspects all elements.
    pub fn all(self) -> bool {
        fold1_and(self)
    }
}

/// Element-wise math functions.
impl<T, const N: usize> Vector<T, N> {
    /// Computes the absolute value of each element.
    pub fn abs(self) -> Self
    where
        T: Sign,
    {
        self.map(T::abs)
    }

    /// Returns the sign of each element.
    pub fn signum(self) -> Self
    where
        T: Sign,
    {
        self.map(T::signum)
    }

    /// Combines the magnitudes of `self` with the signs of `signs`, positionwise.
    pub fn copysign(self, signs: Self) -> Self
    where
        T: Sign + Copy,
    {
        map2(T::copysign, self, signs)
    }

    pub fn floor(self) -> Self
    where
        T: Round,
    {
        self.map(T::floor)
    }

    pub fn ceil(self) -> Self
    where
        T: Round,
    {
        self.map(T::ceil)
    }

    pub fn round(self) -> Self
    where
        T: Round,
    {
        self.map(T::round)
    }

    pub fn trunc(self) -> Self
    where
        T: Round,
    {
        self.map(T::trunc)
    }

    pub fn fract(self) -> Self
    where
        T: Round,
    {
        self.map(T::fract)
    }

    /// Computes the square root of each element.
    pub fn sqrt(self) -> Self
    where
        T: Sqrt,
    {
        self.map(T::sqrt)
    }

    /// Computes the reciprocal square root of each element.
    pub fn rsqrt(self) -> Self
    where
        T: Number + Sqrt,
    {
        self.map(|elem| T::ONE / elem.sqrt())
    }

    /// Computes the reciprocal of each element.
    pub fn recip(self) -> Self
    where
        T: Number,
    {
        self.map(|elem| T::ONE / elem)
    }

    pub fn exp(self) -> Self
    where
        T: Exp,
    {
        self.map(T::exp)
    }

    pub fn ln(self) -> Self
    where
        T: Exp,
    {
        self.map(T::ln)
    }

    pub fn exp2(self) -> Self
    where
        T: Exp,
    {
        self.map(T::exp2)
    }

    pub fn log2(self) -> Self
    where
        T: Exp,
    {
        self.map(T::log2)
    }

    /// Raises each element of `self` to the corresponding element of `exponent`.
    pub fn pow(self, exponent: Self) -> Self
    where
        T: Exp + Copy,
    {
        map2(T::powf, self, exponent)
    }

    pub fn sin(self) -> Self
    where
        T: Trig,
    {
        self.map(T::sin)
    }

    pub fn cos(self) -> Self
    where
        T: Trig,
    {
        self.map(T::cos)
    }

    pub fn tan(self) -> Self
    where
        T: Trig,
    {
        self.map(T::tan)
    }

    pub fn asin(self) -> Self
    where
        T: Trig,
    {
        self.map(T::asin)
    }

    pub fn acos(self) -> Self
    where
        T: Trig,
    {
        self.map(T::acos)
    }

    pub fn atan(self) -> Self
    where
        T: Trig,
    {
        self.map(T::atan)
    }

    /// Computes `atan2(y, x)` positionwise, with `self` supplying the `y` values.
    pub fn atan2(self, x: Self) -> Self
    where
        T: Trig + Copy,
    {
        map2(T::atan2, self, x)
    }

    /// Converts each element from degrees to radians.
    pub fn to_radians(self) -> Self
    where
        T: Number + FromF64,
    {
        self * T::from_f64(std::f64::consts::PI / 180.0)
    }

    /// Converts each element from radians to degrees.
    pub fn to_degrees(self) -> Self
    where
        T: Number + FromF64,
    {
        self * T::from_f64(180.0 / std::f64::consts::PI)
    }

    pub fn is_nan(self) -> Vector<bool, N>
    where
        T: Classify,
    {
        self.map(T::is_nan)
    }

    pub fn is_infinite(self) -> Vector<bool, N>
    where
        T: Classify,
    {
        self.map(T::is_infinite)
    }

    pub fn is_finite(self) -> Vector<bool, N>
    where
        T: Classify,
    {
        self.map(T::is_finite)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of `self` and `other`, both extended with
    /// Z=0 into the third dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let x = Vec2f::X;
    /// let y = Vec2f::Y;
    /// assert_eq!(x.perp_dot(y), 1.0);
    /// assert_eq!(y.perp_dot(x), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.x * other.y - self.y * other.x
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
