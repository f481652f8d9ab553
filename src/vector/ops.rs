//! Implementations of `std::ops`.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Index, IndexMut, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use crate::{approx::ApproxEq, map2};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.0.eq(other)
    }
}

/// Lexicographic comparison by position, delegating to the array impl.
impl<T, const N: usize> PartialOrd for Vector<T, N>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Lexicographic comparison by position, delegating to the array impl.
impl<T, const N: usize> Ord for Vector<T, N>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add + Copy,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        map2(T::add, self, rhs)
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub + Copy,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        map2(T::sub, self, rhs)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

// NB: we support both vector-scalar multiplication and element-wise vector-vector multiplication.
// This rules out a more generic implementation `Mul<U> for Vector<T, N> where T: Mul<U>`.

/// Element-wise multiplication.
impl<T, const N: usize> Mul<Vector<T, N>> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        map2(T::mul, self, rhs)
    }
}

/// Element-wise multiplication.
impl<T, const N: usize> MulAssign<Vector<T, N>> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Element-wise division.
impl<T, const N: usize> Div<Vector<T, N>> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: Vector<T, N>) -> Self::Output {
        map2(T::div, self, rhs)
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

/// Element-wise bitwise and.
impl<T, const N: usize> BitAnd<Vector<T, N>> for Vector<T, N>
where
    T: BitAnd + Copy,
{
    type Output = Vector<T::Output, N>;

    fn bitand(self, rhs: Vector<T, N>) -> Self::Output {
        map2(T::bitand, self, rhs)
    }
}

/// Element-wise bitwise and.
impl<T, const N: usize> BitAndAssign<Vector<T, N>> for Vector<T, N>
where
    T: BitAndAssign + Copy,
{
    fn bitand_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs &= rhs);
    }
}

/// Element-wise bitwise or.
impl<T, const N: usize> BitOr<Vector<T, N>> for Vector<T, N>
where
    T: BitOr + Copy,
{
    type Output = Vector<T::Output, N>;

    fn bitor(self, rhs: Vector<T, N>) -> Self::Output {
        map2(T::bitor, self, rhs)
    }
}

/// Element-wise bitwise or.
impl<T, const N: usize> BitOrAssign<Vector<T, N>> for Vector<T, N>
where
    T: BitOrAssign + Copy,
{
    fn bitor_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs |= rhs);
    }
}

/// Element-wise bitwise xor.
impl<T, const N: usize> BitXor<Vector<T, N>> for Vector<T, N>
where
    T: BitXor + Copy,
{
    type Output = Vector<T::Output, N>;

    fn bitxor(self, rhs: Vector<T, N>) -> Self::Output {
        map2(T::bitxor, self, rhs)
    }
}

/// Element-wise bitwise xor.
impl<T, const N: usize> BitXorAssign<Vector<T, N>> for Vector<T, N>
where
    T: BitXorAssign + Copy,
{
    fn bitxor_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs ^= rhs);
    }
}

// NB: a few rarely used ones are omitted (eg. `Rem`) because it is not clear whether elementwise
// or scalar operation is more helpful there.

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3};

    #[test]
    fn arithmetic() {
        assert_eq!(vec3(1, 2, 3) + vec3(10, 20, 30), vec3(11, 22, 33));
        assert_eq!(vec3(1, 2, 3) - vec3(10, 20, 30), vec3(-9, -18, -27));
        assert_eq!(vec3(1, 2, 3) * vec3(10, 20, 30), vec3(10, 40, 90));
        assert_eq!(vec3(10, 20, 30) / vec3(10, 2, 3), vec3(1, 10, 10));
        assert_eq!(vec3(1, 2, 3) * 2, vec3(2, 4, 6));
        assert_eq!(vec3(2, 4, 6) / 2, vec3(1, 2, 3));
        assert_eq!(-vec2(1, -2), vec2(-1, 2));

        let mut v = vec2(1, 2);
        v += vec2(10, 20);
        v -= vec2(1, 1);
        v *= 3;
        v /= 2;
        assert_eq!(v, vec2(15, 31));
    }

    #[test]
    fn bitwise() {
        assert_eq!(vec2(0b1100, 0b1010) & vec2(0b1010, 0b1010), vec2(0b1000, 0b1010));
        assert_eq!(vec2(0b1100, 0b1010) | vec2(0b0011, 0b0101), vec2(0b1111, 0b1111));
        assert_eq!(vec2(0b1100, 0b1010) ^ vec2(0b1010, 0b1010), vec2(0b0110, 0b0000));
        assert_eq!(!vec2(false, true), vec2(true, false));

        let mut v = vec2(0b1100, 0b1010);
        v &= vec2(0b1010, 0b1111);
        v |= vec2(0b0001, 0b0000);
        v ^= vec2(0b1000, 0b0010);
        assert_eq!(v, vec2(0b0001, 0b1000));
    }

    #[test]
    fn comparisons_against_arrays() {
        assert_eq!(vec3(1, 2, 3), [1, 2, 3]);
        assert_eq!([1, 2, 3], vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3), [1, 2, 3].as_slice());
    }
}
