//! A small fixed-dimension linear algebra library for real-time graphics and
//! physics code.
//!
//! # Motivation
//!
//! Real-time transform pipelines need 2/3/4-dimensional vectors, square
//! matrices and quaternions as plain value types: no heap allocation, no
//! hidden branches on the hot path, and predictable behavior when they are
//! exposed in public APIs.
//!
//! Existing Rust libraries have problems and limitations that make them
//! unsuitable for this use case:
//!
//! - Some of them aim for maximum flexibility (dynamically-sized objects,
//!   allocator genericity), and pay the complexity cost associated with that.
//! - Many libraries still see frequent breaking changes. Exposing types from
//!   such a library in public APIs causes unnecessary churn for dependants.
//! - Some hardcode `f32`, which rules out double-precision simulation code
//!   and integer pixel math.
//!
//! # Goals & Non-Goals
//!
//! - Support only dimensions 2, 3 and 4, specified through const generics.
//!   This is what transform pipelines use, and it keeps every operation a
//!   branch-free closed form.
//! - Be generic over the element type, but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - Store matrices **row-major** and transform vectors by right-multiplying
//!   them against a matrix (`v * m`). Matrix products compose left-to-right
//!   in application order: `v * (a * b) == (v * a) * b`.
//! - Never validate numeric domains. Inverting a singular matrix or
//!   normalizing a zero vector propagates the native arithmetic behavior
//!   (infinities and NaNs for floats, a division panic for integers);
//!   callers that need checking do it themselves.
//! - Don't have any unstable public dependencies.
//!
//! # Conventions
//!
//! Rotation angles are in radians. Quaternion multiplication follows the same
//! left-to-right convention as matrices: `a * b` applies `a`'s rotation
//! first. Unit length of a quaternion is a usage contract, not an enforced
//! invariant; rotation operators applied to non-unit quaternions produce
//! deterministic but unspecified results.

pub mod approx;
mod map_fold;
mod matrix;
mod quat;
mod traits;
mod transform;
mod vector;

pub use map_fold::*;
pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
