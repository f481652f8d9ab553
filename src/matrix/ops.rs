//! Implementations of `std::ops`.
//!
//! Multiplication follows the row-vector convention: `v * m` transforms a vector, and `a * b`
//! composes transformations left to right. `m * v` is deliberately not implemented.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, fold1_plus, map, map2, traits::Number, Matrix, Vector};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

/// Lexicographic comparison by rows, delegating to the [`Vector`] impl.
impl<T, const N: usize> PartialOrd for Matrix<T, N>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Lexicographic comparison by rows, delegating to the [`Vector`] impl.
impl<T, const N: usize> Ord for Matrix<T, N>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T, const N: usize> ApproxEq for Matrix<T, N>
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
impl<T, const N: usize> Neg for Matrix<T, N>
where
    T: Neg,
{
    type Output = Matrix<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Matrix<T, N>> for Matrix<T, N>
where
    T: Add + Copy,
{
    type Output = Matrix<T::Output, N>;

    fn add(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix(map2(Vector::add, self.0, rhs.0))
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign<Matrix<T, N>> for Matrix<T, N>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, rhs: Matrix<T, N>) {
        self.0 += rhs.0;
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Matrix<T, N>> for Matrix<T, N>
where
    T: Sub + Copy,
{
    type Output = Matrix<T::Output, N>;

    fn sub(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix(map2(Vector::sub, self.0, rhs.0))
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign<Matrix<T, N>> for Matrix<T, N>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, rhs: Matrix<T, N>) {
        self.0 -= rhs.0;
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Mul + Copy,
{
    type Output = Matrix<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> MulAssign<T> for Matrix<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        for row in &mut self.0 .0 {
            *row *= rhs;
        }
    }
}

/// Matrix / Scalar.
impl<T, const N: usize> Div<T> for Matrix<T, N>
where
    T: Div + Copy,
{
    type Output = Matrix<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Matrix / Scalar.
impl<T, const N: usize> DivAssign<T> for Matrix<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        for row in &mut self.0 .0 {
            *row /= rhs;
        }
    }
}

/// Row Vector * Matrix.
///
/// Each element of `self` scales one row of the matrix; the scaled rows are summed. This is the
/// only vector-matrix product; transforming a point through a [`Mat4`][crate::Mat4] is spelled
/// `v.extend(T::ONE) * m` followed by [`truncate`][Vector::truncate].
impl<T, const N: usize> Mul<Matrix<T, N>> for Vector<T, N>
where
    T: Number,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        fold1_plus(|x, row: Vector<T, N>| row * x, self, rhs.0)
    }
}

/// Row Vector * Matrix.
impl<T, const N: usize> MulAssign<Matrix<T, N>> for Vector<T, N>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N>) {
        *self = *self * rhs;
    }
}

/// Matrix * Matrix, composing left to right.
///
/// `v * (a * b)` equals `(v * a) * b`: the left operand is the transformation applied first.
impl<T, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix(map(|row: Vector<T, N>| row * rhs, self.0))
    }
}

/// Matrix * Matrix, composing left to right.
impl<T, const N: usize> MulAssign<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N>) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Matrix};

    #[test]
    fn vec_mat_mul() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        let vec = vec2(4, 5);
        assert_eq!(vec * mat, [4 * 0 + 5 * 2, 4 * 1 + 5 * 3]);

        let mut vec = vec;
        vec *= mat;
        assert_eq!(vec, [10, 19]);
    }

    #[test]
    fn mat_mat_mul() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[5, 6], [7, 8]]);
        let c = a * b;
        assert_eq!(c[(0, 0)], 1 * 5 + 2 * 7);
        assert_eq!(c[(0, 1)], 1 * 6 + 2 * 8);
        assert_eq!(c[(1, 0)], 3 * 5 + 4 * 7);
        assert_eq!(c[(1, 1)], 3 * 6 + 4 * 8);
    }

    #[test]
    fn composition_is_left_to_right() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[0, 1], [1, 0]]);
        let v = vec2(5, 6);
        assert_eq!(v * (a * b), (v * a) * b);

        let mut m = Matrix::<i32, 2>::IDENTITY;
        m *= a;
        m *= b;
        assert_eq!(m, a * b);
    }

    #[test]
    fn identity_is_neutral() {
        let v = vec3(1, -2, 3);
        assert_eq!(v * Matrix::IDENTITY, v);

        let m = Matrix::from_rows([[1, 2, 0], [0, 1, 0], [5, 0, 1]]);
        assert_eq!(m * Matrix::IDENTITY, m);
        assert_eq!(Matrix::<i32, 3>::IDENTITY * m, m);
    }

    #[test]
    fn elementwise() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[10, 20], [30, 40]]);
        assert_eq!(a + b, Matrix::from_rows([[11, 22], [33, 44]]));
        assert_eq!(b - a, Matrix::from_rows([[9, 18], [27, 36]]));
        assert_eq!(-a, Matrix::from_rows([[-1, -2], [-3, -4]]));
        assert_eq!(a * 2, Matrix::from_rows([[2, 4], [6, 8]]));
        assert_eq!(b / 10, Matrix::from_rows([[1, 2], [3, 4]]));

        let mut m = a;
        m += b;
        m -= a;
        m *= 2;
        m /= 4;
        assert_eq!(m, b / 2);
    }

    #[test]
    fn lexicographic_order() {
        let a = Matrix::from_rows([[1, 2], [3, 4]]);
        let b = Matrix::from_rows([[1, 2], [3, 5]]);
        let c = Matrix::from_rows([[2, 0], [0, 0]]);
        assert!(a < b);
        assert!(b < c);
    }
}
