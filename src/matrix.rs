use std::fmt;

use crate::{map, map2, traits::Number, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A square, row-major matrix with `N` rows and columns, and element type `T`.
///
/// # Conventions
///
/// Vectors are *rows*: transformation is written `v * m`, and `a * b` composes left to right, so
/// `v * (a * b)` applies `a` first. There is no `m * v` operator.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] fills a matrix from an array of rows.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero outside of it.
/// - [`Matrix::splat`] copies one value into every element.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0.
/// - [`Matrix::IDENTITY`] is a matrix with 1 on its diagonal and 0 everywhere else. This is also
///   what [`Default`] returns, since the identity is the neutral transformation. Note the
///   asymmetry with [`Vector`], whose default is all-zero.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use rowmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(1, 0)], 2);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// and [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing.
///
/// Whole rows are fetched and stored in one step with [`Matrix::row`] and [`Matrix::set_row`];
/// [`Matrix::col`] and [`Matrix::set_col`] do the same for columns, gathering across the rows.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>(pub(crate) Vector<Vector<T, N>, N>);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self(Vector([Vector::ZERO; N]));
}

impl<T: Number, const N: usize> Matrix<T, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut rows = [Vector::ZERO; N];
        let mut i = 0;
        while i < N {
            rows[i].0[i] = T::ONE;
            i += 1;
        }
        Self(Vector(rows))
    };
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.row(0), vec2(0, 1));
    /// assert_eq!(mat.col(0), vec2(0, 2));
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Self(Vector(rows.map(Into::into)))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`][std::array::from_fn].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(Vector::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a matrix with each element initialized to `elem`.
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(Vector::splat(Vector::splat(elem)))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.map(|i| i * 2), Matrix::from_rows([
    ///     [0, 2],
    ///     [4, 6],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(map(|row: Vector<T, N>| map(&mut f, row), self.0))
    }

    /// Merges two matrices into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Matrix<U, N>) -> Matrix<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Matrix(map2(
            |a: Vector<T, N>, b: Vector<U, N>| map2(|a, b| (a, b), a, b),
            self.0,
            other.0,
        ))
    }

    /// Returns the row at index `i`.
    ///
    /// Rows are the unit of storage, so this is a plain copy. Also see [`Matrix::col`].
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        self.0[i]
    }

    /// Replaces the row at index `i`.
    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vector<T, N>) {
        self.0[i] = row;
    }

    /// Returns the column at index `j`, gathered across all rows.
    ///
    /// Unlike [`Matrix::row`], this touches every row of the matrix.
    pub fn col(&self, j: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][j])
    }

    /// Replaces the column at index `j`, scattering across all rows.
    pub fn set_col(&mut self, j: usize, col: Vector<T, N>)
    where
        T: Copy,
    {
        for i in 0..N {
            self.0[i][j] = col[i];
        }
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&2));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Converts this matrix into a nested array of its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; N]; N] {
        self.0.into_array().map(Vector::into_array)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Creates a matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut iter = diag.into().into_array().into_iter();
        let mut this = Self::ZERO;
        for i in 0..N {
            this[(i, i)] = iter.next().unwrap();
        }
        this
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rowmath::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat3f::IDENTITY.trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

/// Relational functions, applied through the rows. Reduce the result with [`Matrix::any`] or
/// [`Matrix::all`].
impl<T, const N: usize> Matrix<T, N> {
    /// Compares `self < other` elementwise.
    pub fn less(self, other: Self) -> Matrix<bool, N>
    where
        T: PartialOrd + Copy,
    {
        Matrix(map2(Vector::less, self.0, other.0))
    }

    /// Compares `self <= other` elementwise.
    pub fn less_equal(self, other: Self) -> Matrix<bool, N>
    where
        T: PartialOrd + Copy,
    {
        Matrix(map2(Vector::less_equal, self.0, other.0))
    }

    /// Compares `self > other` elementwise.
    pub fn greater(self, other: Self) -> Matrix<bool, N>
    where
        T: PartialOrd + Copy,
    {
        Matrix(map2(Vector::greater, self.0, other.0))
    }

    /// Compares `self >= other` elementwise.
    pub fn greater_equal(self, other: Self) -> Matrix<bool, N>
    where
        T: PartialOrd + Copy,
    {
        Matrix(map2(Vector::greater_equal, self.0, other.0))
    }

    /// Compares `self == other` elementwise.
    pub fn equal_to(self, other: Self) -> Matrix<bool, N>
    where
        T: PartialEq + Copy,
    {
        Matrix(map2(Vector::equal_to, self.0, other.0))
    }

    /// Compares `self != other` elementwise.
    pub fn not_equal_to(self, other: Self) -> Matrix<bool, N>
    where
        T: PartialEq + Copy,
    {
        Matrix(map2(Vector::not_equal_to, self.0, other.0))
    }

    /// Compares elementwise with an absolute tolerance, `|a - b| <= epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: T) -> Matrix<bool, N>
    where
        T: Number + crate::Sign + PartialOrd,
    {
        Matrix(map2(
            |a: Vector<T, N>, b| a.approx_eq(b, epsilon),
            self.0,
            other.0,
        ))
    }

    /// The negation of [`Matrix::approx_eq`].
    pub fn approx_ne(self, other: Self, epsilon: T) -> Matrix<bool, N>
    where
        T: Number + crate::Sign + PartialOrd,
    {
        Matrix(map2(
            |a: Vector<T, N>, b| a.approx_ne(b, epsilon),
            self.0,
            other.0,
        ))
    }
}

impl<const N: usize> Matrix<bool, N> {
    /// Returns whether any element is `true`. Always inspects all elements.
    pub fn any(self) -> bool {
        map(Vector::any, self.0).any()
    }

    /// Returns whether every element is `true`. Always inspects all elements.
    pub fn all(self) -> bool {
        map(Vector::all, self.0).all()
    }
}

impl<T: Number> Matrix<T, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.into_rows();
        a * d - b * c
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// `m * m.adjugate()` equals `m.determinant()` times the identity.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [[a, b], [c, d]] = self.into_rows();

        #[rustfmt::skip]
        let adj = Self::from_rows([
            [ d, -b],
            [-c,  a],
        ]);
        adj
    }

    /// Computes the inverse of this matrix as `adjugate / determinant`.
    ///
    /// The determinant is not checked: inverting a singular float matrix yields non-finite
    /// elements, and inverting a singular integer matrix panics on the division by zero.
    pub fn inverse(&self) -> Self {
        self.adjugate() * (T::ONE / self.determinant())
    }
}

impl<T: Number> Matrix<T, 3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.into_rows();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// `m * m.adjugate()` equals `m.determinant()` times the identity.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.into_rows();

        Self::from_rows([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ])
    }

    /// Computes the inverse of this matrix as `adjugate / determinant`.
    ///
    /// The determinant is not checked: inverting a singular float matrix yields non-finite
    /// elements, and inverting a singular integer matrix panics on the division by zero.
    pub fn inverse(&self) -> Self {
        self.adjugate() * (T::ONE / self.determinant())
    }
}

impl<T: Number> Matrix<T, 4> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        #[rustfmt::skip]
        let [
            [a, b, c, d],
            [e, f, g, h],
            [i, j, k, l],
            [m, n, o, p],
        ] = self.into_rows();

        a * (f * (k * p - l * o) - j * (g * p - h * o) + n * (g * l - h * k))
            - b * (e * (k * p - l * o) - i * (g * p - h * o) + m * (g * l - h * k))
            + c * (e * (j * p - l * n) - i * (f * p - h * n) + m * (f * l - h * j))
            - d * (e * (j * o - k * n) - i * (f * o - g * n) + m * (f * k - g * j))
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// `m * m.adjugate()` equals `m.determinant()` times the identity.
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        #[rustfmt::skip]
        let [
            [a, b, c, d],
            [e, f, g, h],
            [i, j, k, l],
            [m, n, o, p],
        ] = self.into_rows();

        Self::from_rows([
            [
                f * (k * p - l * o) + g * (l * n - j * p) + h * (j * o - k * n),
                j * (c * p - d * o) + k * (d * n - b * p) + l * (b * o - c * n),
                n * (c * h - d * g) + o * (d * f - b * h) + p * (b * g - c * f),
                b * (h * k - g * l) + c * (f * l - h * j) + d * (g * j - f * k),
            ],
            [
                g * (i * p - l * m) + h * (k * m - i * o) + e * (l * o - k * p),
                k * (a * p - d * m) + l * (c * m - a * o) + i * (d * o - c * p),
                o * (a * h - d * e) + p * (c * e - a * g) + m * (d * g - c * h),
                c * (h * i - e * l) + d * (e * k - g * i) + a * (g * l - h * k),
            ],
            [
                h * (i * n - j * m) + e * (j * p - l * n) + f * (l * m - i * p),
                l * (a * n - b * m) + i * (b * p - d * n) + j * (d * m - a * p),
                p * (a * f - b * e) + m * (b * h - d * f) + n * (d * e - a * h),
                d * (f * i - e * j) + a * (h * j - f * l) + b * (e * l - h * i),
            ],
            [
                e * (k * n - j * o) + f * (i * o - k * m) + g * (j * m - i * n),
                i * (c * n - b * o) + j * (a * o - c * m) + k * (b * m - a * n),
                m * (c * f - b * g) + n * (a * g - c * e) + o * (b * e - a * f),
                a * (f * k - g * j) + b * (g * i - e * k) + c * (e * j - f * i),
            ],
        ])
    }

    /// Computes the inverse of this matrix as `adjugate / determinant`.
    ///
    /// The determinant is not checked: inverting a singular float matrix yields non-finite
    /// elements, and inverting a singular integer matrix panics on the division by zero.
    pub fn inverse(&self) -> Self {
        self.adjugate() * (T::ONE / self.determinant())
    }
}

/// The default matrix is the identity, unlike [`Vector`] whose default is all-zero.
impl<T: Number, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in &self.0 .0 {
            list.entry(&row.0);
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3};

    use super::*;

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Mat3f::default(), Mat3f::IDENTITY);
        assert_eq!(Mat4::<i32>::default(), Mat4::IDENTITY);
    }

    #[test]
    fn rows_and_columns() {
        let mut mat = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(mat.row(0), vec2(1, 2));
        assert_eq!(mat.row(1), vec2(3, 4));
        assert_eq!(mat.col(0), vec2(1, 3));
        assert_eq!(mat.col(1), vec2(2, 4));

        mat.set_row(0, vec2(10, 20));
        assert_eq!(mat, Matrix::from_rows([[10, 20], [3, 4]]));
        mat.set_col(1, vec2(-2, -4));
        assert_eq!(mat, Matrix::from_rows([[10, -2], [3, -4]]));
    }

    #[test]
    fn checked_access() {
        let mut mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(mat.get(0, 1), Some(&1));
        assert_eq!(mat.get(1, 1), Some(&3));
        assert_eq!(mat.get(0, 2), None);
        assert_eq!(mat.get(2, 0), None);
        *mat.get_mut(1, 0).unwrap() = 7;
        assert_eq!(mat[(1, 0)], 7);
    }

    #[test]
    fn relational() {
        let a = Matrix::from_rows([[1, 5], [3, 0]]);
        let b = Matrix::from_rows([[2, 4], [3, 0]]);
        assert_eq!(a.less(b), Matrix::from_rows([[true, false], [false, false]]));
        assert_eq!(a.less_equal(b), Matrix::from_rows([[true, false], [true, true]]));
        assert_eq!(a.greater(b), Matrix::from_rows([[false, true], [false, false]]));
        assert_eq!(a.greater_equal(b), Matrix::from_rows([[false, true], [true, true]]));
        assert_eq!(a.equal_to(b), Matrix::from_rows([[false, false], [true, true]]));
        assert_eq!(a.not_equal_to(b), Matrix::from_rows([[true, true], [false, false]]));

        assert!(a.equal_to(a).all());
        assert!(a.not_equal_to(b).any());
        assert!(!a.equal_to(b).all());

        let x = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let y = Matrix::from_rows([[1.05, 2.0], [3.0, 4.0]]);
        assert!(x.approx_eq(y, 0.1).all());
        assert!(x.approx_ne(y, 0.01).any());
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");
    }

    #[test]
    fn transpose() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(mat.transpose(), Matrix::from_rows([[0, 2], [1, 3]]));
        assert_eq!(mat.transpose().transpose(), mat);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [ 1,  0,  2, -1],
            [ 3,  0,  0,  5],
            [ 2,  1,  4, -3],
            [ 1,  0,  5,  0],
        ]);
        assert_eq!(testmat.determinant(), 30);
        assert_eq!(testmat.transpose().determinant(), 30);
    }

    #[test]
    fn adjugate_identity() {
        let m = Matrix::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m * m.adjugate(), Mat2::IDENTITY * m.determinant());

        let m = Matrix::from_rows([[-2, -1, 2], [2, 1, 4], [-3, 3, -1]]);
        assert_eq!(m * m.adjugate(), Mat3::IDENTITY * m.determinant());

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [ 1,  0,  2, -1],
            [ 3,  0,  0,  5],
            [ 2,  1,  4, -3],
            [ 1,  0,  5,  0],
        ]);
        assert_eq!(m * m.adjugate(), Mat4::IDENTITY * m.determinant());
    }

    #[test]
    fn inverse() {
        let m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_approx_eq!(m * m.inverse(), Mat2f::IDENTITY);
        assert_approx_eq!(m.inverse() * m, Mat2f::IDENTITY);

        let m = Mat3f::from_diagonal(vec3(2.0, 4.0, 8.0));
        assert_approx_eq!(m.inverse(), Mat3f::from_diagonal(vec3(0.5, 0.25, 0.125)));

        #[rustfmt::skip]
        let m = Mat4f::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0,  5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0,  0.0],
        ]);
        assert_approx_eq!(m * m.inverse(), Mat4f::IDENTITY).abs(1e-6);
        assert_approx_eq!(m.inverse() * m, Mat4f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn singular_inverse_is_unchecked() {
        let inv = Mat2f::ZERO.inverse();
        assert!(!inv.0[0].is_finite().all());
    }
}
