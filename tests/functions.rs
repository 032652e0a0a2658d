//! Tests for the free-function layer: dot products, norms, cross products,
//! traces, and the small closed-form inverses.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use linex::{
    DVector, SMatrix, Vector3, cross_prod, dot_prod, identity_matrix, len_square, length,
    normalize, trace, vec3, zero_matrix,
};
use rand::Rng;

#[test]
fn dot_product_and_length_agree() {
    let mut rng = rand::thread_rng();
    let v = Vector3::<f64>::from_fn(|_| rng.r#gen::<f64>() - 0.5);
    assert_abs_diff_eq!(dot_prod(&v, &v), len_square(&v), epsilon = 1e-12);
    assert_abs_diff_eq!(length(&v), len_square(&v).sqrt(), epsilon = 1e-12);
}

#[test]
fn dot_product_concrete() {
    let a = vec3(1.0, 2.0, 3.0);
    let b = vec3(4.0, -5.0, 6.0);
    assert_eq!(dot_prod(&a, &b), 12.0);
}

#[test]
fn dynamic_dot_product() {
    let a = DVector::from_vec(vec![1.0, 2.0]);
    let b = DVector::from_vec(vec![3.0, 4.0]);
    assert_eq!(dot_prod(&a, &b), 11.0);
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn dot_product_length_mismatch_panics() {
    let a = DVector::from_vec(vec![1.0, 2.0]);
    let b = DVector::from_vec(vec![3.0, 4.0, 5.0]);
    let _ = dot_prod(&a, &b);
}

#[test]
fn normalize_yields_unit_length() {
    let mut rng = rand::thread_rng();
    let v = Vector3::<f64>::from_fn(|_| rng.r#gen::<f64>() + 0.1);
    let unit = normalize(&v).unwrap().eval();
    assert_relative_eq!(length(&unit), 1.0, epsilon = 1e-12);
    // direction is preserved
    assert_relative_eq!(dot_prod(&unit, &v), length(&v), epsilon = 1e-12);
}

#[test]
fn normalize_rejects_the_zero_vector() {
    let zero = Vector3::<f64>::zeros();
    assert_eq!(normalize(&zero).err(), Some(linex::LinexError::ZeroLength));
}

#[test]
fn cross_product_basis_vectors() {
    let x = vec3(1.0, 0.0, 0.0);
    let y = vec3(0.0, 1.0, 0.0);
    assert_eq!(cross_prod(&x, &y).eval(), vec3(0.0, 0.0, 1.0));
    assert_eq!(cross_prod(&y, &x).eval(), vec3(0.0, 0.0, -1.0));
}

#[test]
fn cross_product_is_orthogonal_with_sine_magnitude() {
    let mut rng = rand::thread_rng();
    let a = Vector3::<f64>::from_fn(|_| rng.r#gen::<f64>() - 0.5);
    let b = Vector3::<f64>::from_fn(|_| rng.r#gen::<f64>() - 0.5);
    let c = cross_prod(&a, &b).eval();

    assert_abs_diff_eq!(dot_prod(&c, &a), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dot_prod(&c, &b), 0.0, epsilon = 1e-12);

    let cos = dot_prod(&a, &b) / (length(&a) * length(&b));
    let sin = (1.0 - cos * cos).sqrt();
    assert_relative_eq!(length(&c), length(&a) * length(&b) * sin, epsilon = 1e-9);
}

#[test]
fn trace_sums_the_diagonal() {
    let m = SMatrix::from_rows([[1.0, 9.0, 9.0], [9.0, 2.0, 9.0], [9.0, 9.0, 3.0]]);
    assert_eq!(trace(&m), 6.0);
    assert_eq!(trace(&identity_matrix::<f64, 5>()), 5.0);
    assert_eq!(trace(&zero_matrix::<f64, 4, 4>()), 0.0);
}

#[test]
fn determinant_2x2_and_3x3() {
    let m = SMatrix::from_rows([[3.0, 8.0], [4.0, 6.0]]);
    assert_eq!(m.determinant(), -14.0);

    let m = SMatrix::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    assert_abs_diff_eq!(m.determinant(), -306.0, epsilon = 1e-12);
}

#[test]
fn inverse_round_trips_to_identity() {
    let mut rng = rand::thread_rng();

    // shift the diagonal to keep the matrix comfortably invertible
    let m = SMatrix::<f64, 2, 2>::from_fn(|i, j| {
        rng.r#gen::<f64>() + if i == j { 3.0 } else { 0.0 }
    });
    let product = (&m.inverse() * &m).eval();
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-10);
        }
    }

    let m = SMatrix::<f64, 3, 3>::from_fn(|i, j| {
        rng.r#gen::<f64>() + if i == j { 3.0 } else { 0.0 }
    });
    let product = (&m * &m.inverse()).eval();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-10);
        }
    }
}
