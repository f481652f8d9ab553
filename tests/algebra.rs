//! Randomized consistency checks across the vector, matrix and quaternion operations.

use std::f32::consts::TAU;

use rowmath::{assert_approx_eq, vec2, vec3, Mat2f, Mat3f, Mat4f, Matrix, Quat, Quatf, Vector};

fn rng() -> fastrand::Rng {
    // Fixed seed; failures must reproduce.
    fastrand::Rng::with_seed(0x5EED)
}

fn signed_unit(rng: &mut fastrand::Rng) -> f32 {
    rng.f32() * 2.0 - 1.0
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quatf {
    loop {
        let axis = vec3(signed_unit(rng), signed_unit(rng), signed_unit(rng));
        if axis.length() > 0.1 {
            return Quatf::from_angle_axis(rng.f32() * TAU, axis);
        }
    }
}

/// A random invertible matrix built as rotation * scale * rotation, keeping the
/// condition number small enough for f32 inversion.
fn random_invertible3(rng: &mut fastrand::Rng) -> Mat3f {
    let r1 = Mat3f::from_quat(random_rotation(rng));
    let r2 = Mat3f::from_quat(random_rotation(rng));
    let s = Mat3f::scaling(vec3(
        0.5 + rng.f32() * 1.5,
        0.5 + rng.f32() * 1.5,
        0.5 + rng.f32() * 1.5,
    ));
    r1 * s * r2
}

#[test]
fn inverse_of_random_mat2() {
    let mut rng = rng();
    for _ in 0..100 {
        let m = Mat2f::rotation(rng.f32() * TAU)
            * Mat2f::scaling(vec2(0.5 + rng.f32() * 1.5, 0.5 + rng.f32() * 1.5));
        assert_approx_eq!(m * m.inverse(), Mat2f::IDENTITY).abs(1e-5);
        assert_approx_eq!(m.inverse() * m, Mat2f::IDENTITY).abs(1e-5);
    }
}

#[test]
fn inverse_of_random_mat3() {
    let mut rng = rng();
    for _ in 0..100 {
        let m = random_invertible3(&mut rng);
        assert_approx_eq!(m * m.inverse(), Mat3f::IDENTITY).abs(1e-4);
        assert_approx_eq!(m.inverse() * m, Mat3f::IDENTITY).abs(1e-4);
    }
}

#[test]
fn inverse_of_random_mat4() {
    let mut rng = rng();
    for _ in 0..100 {
        let m = Mat4f::from_mat3(random_invertible3(&mut rng))
            * Mat4f::translation(vec3(
                signed_unit(&mut rng) * 10.0,
                signed_unit(&mut rng) * 10.0,
                signed_unit(&mut rng) * 10.0,
            ));
        assert_approx_eq!(m * m.inverse(), Mat4f::IDENTITY).abs(1e-3);
        assert_approx_eq!(m.inverse() * m, Mat4f::IDENTITY).abs(1e-3);
    }
}

#[test]
fn determinant_is_transpose_invariant() {
    let mut rng = rng();
    for _ in 0..100 {
        let m2 = Mat2f::from_fn(|_, _| signed_unit(&mut rng));
        assert_approx_eq!(m2.determinant(), m2.transpose().determinant()).abs(1e-5);

        let m3 = Mat3f::from_fn(|_, _| signed_unit(&mut rng));
        assert_approx_eq!(m3.determinant(), m3.transpose().determinant()).abs(1e-5);

        let m4 = Mat4f::from_fn(|_, _| signed_unit(&mut rng));
        assert_approx_eq!(m4.determinant(), m4.transpose().determinant()).abs(1e-4);
    }
}

#[test]
fn determinant_of_products() {
    let mut rng = rng();
    for _ in 0..100 {
        let a = random_invertible3(&mut rng);
        let b = random_invertible3(&mut rng);
        assert_approx_eq!((a * b).determinant(), a.determinant() * b.determinant()).rel(1e-3);
    }
}

#[test]
fn conjugate_product_is_pure_real() {
    let mut rng = rng();
    for _ in 0..100 {
        let q = Quatf::from_xyzw(
            signed_unit(&mut rng) * 3.0,
            signed_unit(&mut rng) * 3.0,
            signed_unit(&mut rng) * 3.0,
            signed_unit(&mut rng) * 3.0,
        );
        let p = q.conjugate() * q;
        assert_approx_eq!(p.v, Vector::ZERO).abs(1e-4);
        assert_approx_eq!(p.s, q.length2()).rel(1e-4);
    }
}

#[test]
fn quat_and_matrix_rotation_agree() {
    let mut rng = rng();
    for _ in 0..100 {
        let q = random_rotation(&mut rng);
        let m = Mat3f::from_quat(q);
        let v = vec3(
            signed_unit(&mut rng) * 5.0,
            signed_unit(&mut rng) * 5.0,
            signed_unit(&mut rng) * 5.0,
        );
        assert_approx_eq!(v * q, v * m).abs(1e-4);
    }
}

#[test]
fn quat_matrix_round_trip() {
    let mut rng = rng();
    for _ in 0..100 {
        let q = random_rotation(&mut rng);
        let r = Quatf::from_mat3(Mat3f::from_quat(q));
        // Recovery is exact only up to the double cover.
        let r = if q.dot(r) < 0.0 { -r } else { r };
        assert_approx_eq!(r.to_vec4(), q.to_vec4()).abs(1e-4);
    }
}

#[test]
fn slerp_stays_on_the_unit_sphere() {
    let mut rng = rng();
    for _ in 0..100 {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);
        let t = rng.f32();
        assert_approx_eq!(a.slerp(b, t).length(), 1.0).abs(1e-4);
        assert_approx_eq!(a.nlerp(b, t).length(), 1.0).abs(1e-4);
    }
}

#[test]
fn slerp_has_constant_angular_velocity() {
    let a = Quatf::from_rotation_z(0.1);
    let b = Quatf::from_rotation_x(1.0) * a;

    let total = a.angle_to(b);
    const STEPS: usize = 8;
    for i in 0..STEPS {
        let t0 = i as f32 / STEPS as f32;
        let t1 = (i + 1) as f32 / STEPS as f32;
        let step = a.slerp(b, t0).angle_to(a.slerp(b, t1));
        assert_approx_eq!(step, total / STEPS as f32).abs(1e-3);
    }
}

#[test]
fn slerp_and_nlerp_agree_for_small_separations() {
    let mut rng = rng();
    for _ in 0..100 {
        let a = random_rotation(&mut rng);
        let b = a * Quatf::from_rotation_y(0.05);
        let t = rng.f32();
        assert_approx_eq!(a.slerp(b, t).to_vec4(), a.nlerp(b, t).to_vec4()).abs(1e-4);
    }
}

#[test]
fn between_recovers_rotations() {
    let mut rng = rng();
    for _ in 0..100 {
        let q = random_rotation(&mut rng);
        let from = vec3(
            signed_unit(&mut rng),
            signed_unit(&mut rng),
            signed_unit(&mut rng),
        );
        if from.length() < 0.1 {
            continue;
        }
        let to = from * q;
        let r = Quatf::between(from, to);
        // Near-antiparallel pairs take the fallback half turn, which only matches `to` up to
        // the branch tolerance.
        assert_approx_eq!((from * r).normalize(), to.normalize()).abs(5e-3);
    }
}

#[test]
fn scaling_inverse_is_reciprocal_scaling() {
    let m = Mat3f::scaling(vec3(2.0, 3.0, 4.0));
    assert_approx_eq!(m.inverse(), Mat3f::scaling(vec3(0.5, 1.0 / 3.0, 0.25)));
}

#[test]
fn defaults() {
    // Additive types default to zero; multiplicative ones to their identity.
    assert_eq!(Vector::<f32, 3>::default(), Vector::ZERO);
    assert_eq!(Matrix::<f32, 3>::default(), Matrix::IDENTITY);
    assert_eq!(Quat::<f32>::default(), Quat::IDENTITY);
}

#[test]
fn pod_casts() {
    let v = vec3(1.0f32, 2.0, 3.0);
    assert_eq!(bytemuck::cast::<_, [f32; 3]>(v), [1.0, 2.0, 3.0]);

    let m = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(bytemuck::cast::<_, [f32; 4]>(m), [1.0, 2.0, 3.0, 4.0]);

    let q = Quatf::from_xyzw(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bytemuck::cast::<_, [f32; 4]>(q), [1.0, 2.0, 3.0, 4.0]);
}
