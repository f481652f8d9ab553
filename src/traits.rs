//! Element-type traits.
//!
//! Every container in this crate is generic over its element type. Instead of
//! pulling in a numeric-traits dependency, the handful of capabilities the
//! algorithms actually need are defined here and implemented for the built-in
//! primitives.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! zero_one {
    ($zero:expr, $one:expr; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0; f32, f64);

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    /// Computes sine and cosine of `self` in one call.
    fn sin_cos(self) -> (Self, Self);
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support the exponential and logarithmic functions.
pub trait Exp: Sized {
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn exp2(self) -> Self;
    fn log2(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
}

/// Types with a notion of sign.
///
/// `signum` returns `1` for positive values and `-1` for negative ones. For
/// floats this follows [`f32::signum`]: the sign of zero is the sign of its
/// bit pattern, so `signum(+0.0) == 1.0`.
pub trait Sign {
    fn abs(self) -> Self;
    fn signum(self) -> Self;
    /// Returns a value with the magnitude of `self` and the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;
}

macro_rules! int_sign {
    ($($types:ty),+) => {
        $(
            impl Sign for $types {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn signum(self) -> Self {
                    self.signum()
                }

                fn copysign(self, sign: Self) -> Self {
                    if sign < 0 {
                        -self.abs()
                    } else {
                        self.abs()
                    }
                }
            }
        )+
    };
}
int_sign!(i8, i16, i32, i64, i128);

/// Rounding to nearby integral values.
pub trait Round: Sized {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn trunc(self) -> Self;
    /// The fractional part, `self - self.floor()`.
    fn fract(self) -> Self;
}

/// IEEE 754 classification predicates.
pub trait Classify {
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and
/// [`f32::max`] functions ([`f64::min`] and [`f64::max`] respectively).
/// Built-in integer types implement it in terms of [`Ord::min`] and
/// [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Conversion from an `f64` literal.
///
/// Algorithms like [`Quat::slerp`][crate::Quat::slerp] need named constants
/// (interpolation thresholds, degree/radian factors) at the element type.
pub trait FromF64 {
    fn from_f64(value: f64) -> Self;
}

impl FromF64 for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl FromF64 for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Exp for $types {
                fn exp(self) -> Self {
                    self.exp()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn exp2(self) -> Self {
                    self.exp2()
                }

                fn log2(self) -> Self {
                    self.log2()
                }

                fn powf(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }
            }

            impl Sign for $types {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn signum(self) -> Self {
                    self.signum()
                }

                fn copysign(self, sign: Self) -> Self {
                    self.copysign(sign)
                }
            }

            impl Round for $types {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn round(self) -> Self {
                    self.round()
                }

                fn trunc(self) -> Self {
                    self.trunc()
                }

                fn fract(self) -> Self {
                    self.fract()
                }
            }

            impl Classify for $types {
                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                fn is_infinite(self) -> bool {
                    self.is_infinite()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }
        )+
    };
}
float_impls!(f32, f64);
