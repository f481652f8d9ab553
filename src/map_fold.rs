//! Elementwise map and fold combinators.
//!
//! Almost every operation in this crate is a per-element map, a fold, or a
//! combination of the two. The free functions in this module spell that out
//! once, so that operators, reductions and relational functions are all
//! one-liners over the same machinery. They work on [`Vector`]s of any
//! element type, which includes vectors of vectors, so matrix operations
//! reuse them unchanged.

use std::{array, ops};

use crate::Vector;

/// Maps `f` over each element of `v`.
pub fn map<T, U, const N: usize>(f: impl FnMut(T) -> U, v: Vector<T, N>) -> Vector<U, N> {
    Vector(v.0.map(f))
}

/// Maps `f` over the elements of `a` and `b` pairwise.
pub fn map2<A, B, U, const N: usize>(
    mut f: impl FnMut(A, B) -> U,
    a: Vector<A, N>,
    b: Vector<B, N>,
) -> Vector<U, N>
where
    A: Copy,
    B: Copy,
{
    Vector(array::from_fn(|i| f(a.0[i], b.0[i])))
}

/// Maps `f` over the elements of `a`, `b` and `c`.
pub fn map3<A, B, C, U, const N: usize>(
    mut f: impl FnMut(A, B, C) -> U,
    a: Vector<A, N>,
    b: Vector<B, N>,
    c: Vector<C, N>,
) -> Vector<U, N>
where
    A: Copy,
    B: Copy,
    C: Copy,
{
    Vector(array::from_fn(|i| f(a.0[i], b.0[i], c.0[i])))
}

/// Maps `f` over the elements of `a`, `b`, `c` and `d`.
pub fn map4<A, B, C, D, U, const N: usize>(
    mut f: impl FnMut(A, B, C, D) -> U,
    a: Vector<A, N>,
    b: Vector<B, N>,
    c: Vector<C, N>,
    d: Vector<D, N>,
) -> Vector<U, N>
where
    A: Copy,
    B: Copy,
    C: Copy,
    D: Copy,
{
    Vector(array::from_fn(|i| f(a.0[i], b.0[i], c.0[i], d.0[i])))
}

/// Folds the elements of `v` into `init` from left to right.
pub fn fold<A, U, const N: usize>(mut f: impl FnMut(U, A) -> U, init: U, v: Vector<A, N>) -> U
where
    A: Copy,
{
    let mut acc = init;
    for i in 0..N {
        acc = f(acc, v.0[i]);
    }
    acc
}

/// Folds the pairwise elements of `a` and `b` into `init` from left to right.
pub fn fold2<A, B, U, const N: usize>(
    mut f: impl FnMut(U, A, B) -> U,
    init: U,
    a: Vector<A, N>,
    b: Vector<B, N>,
) -> U
where
    A: Copy,
    B: Copy,
{
    let mut acc = init;
    for i in 0..N {
        acc = f(acc, a.0[i], b.0[i]);
    }
    acc
}

/// Folds the elements of `v` from left to right, seeded with the first
/// element.
///
/// The result for `[a, b, c]` is `f(f(a, b), c)`. Dimensions are at least 1,
/// so no empty case exists.
pub fn fold1<T, const N: usize>(mut f: impl FnMut(T, T) -> T, v: Vector<T, N>) -> T
where
    T: Copy,
{
    let mut acc = v.0[0];
    for i in 1..N {
        acc = f(acc, v.0[i]);
    }
    acc
}

/// Combines all elements of `v` with `&`.
///
/// Uses the non-short-circuiting operator, so the cost is uniform across
/// inputs.
pub fn fold1_and<T, const N: usize>(v: Vector<T, N>) -> T
where
    T: ops::BitAnd<Output = T> + Copy,
{
    fold1(|acc, elem| acc & elem, v)
}

/// Combines all elements of `v` with `|`.
pub fn fold1_or<T, const N: usize>(v: Vector<T, N>) -> T
where
    T: ops::BitOr<Output = T> + Copy,
{
    fold1(|acc, elem| acc | elem, v)
}

/// Maps `f` over the pairwise elements of `a` and `b`, then sums the results.
///
/// This is the shape of every inner product in the crate: the dot product
/// maps `*` over two vectors of scalars, and the vector-matrix product maps
/// scalar-times-row over a vector and the rows of a matrix.
pub fn fold1_plus<A, B, U, const N: usize>(
    f: impl FnMut(A, B) -> U,
    a: Vector<A, N>,
    b: Vector<B, N>,
) -> U
where
    A: Copy,
    B: Copy,
    U: ops::Add<Output = U> + Copy,
{
    fold1(|acc, elem| acc + elem, map2(f, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3, vec4};

    #[test]
    fn maps() {
        assert_eq!(map(|x| x * 2, vec3(1, 2, 3)), vec3(2, 4, 6));
        assert_eq!(map2(|a, b| a - b, vec2(5, 7), vec2(1, 2)), vec2(4, 5));
        assert_eq!(
            map3(|a, b, c| a + b + c, vec2(1, 2), vec2(10, 20), vec2(100, 200)),
            vec2(111, 222),
        );
        assert_eq!(
            map4(
                |a, b, c, d| (a + b) * (c + d),
                vec2(1, 2),
                vec2(3, 4),
                vec2(5, 6),
                vec2(7, 8),
            ),
            vec2(48, 84),
        );
    }

    #[test]
    fn folds() {
        assert_eq!(fold(|acc, x| acc + x, 100, vec3(1, 2, 3)), 106);
        assert_eq!(
            fold2(|acc, a, b| acc + a * b, 0, vec3(1, 2, 3), vec3(4, 5, 6)),
            32,
        );
        assert_eq!(fold1(|acc, x| acc * x, vec4(1, 2, 3, 4)), 24);
        assert_eq!(fold1(|acc, x| acc - x, vec3(10, 1, 2)), 7);
    }

    #[test]
    fn boolean_folds() {
        assert!(fold1_and(vec3(true, true, true)));
        assert!(!fold1_and(vec3(true, false, true)));
        assert!(fold1_or(vec3(false, false, true)));
        assert!(!fold1_or(vec3(false, false, false)));
    }

    #[test]
    fn fold1_plus_is_an_inner_product() {
        assert_eq!(fold1_plus(|a, b| a * b, vec3(1, 2, 3), vec3(4, 5, 6)), 32);
        assert_eq!(fold1_plus(|a, b| a + b, vec2(1, 2), vec2(3, 4)), 10);
    }
}
