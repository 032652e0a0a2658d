//! Tests for the lazy expression engine: vector/matrix arithmetic laws,
//! chained evaluation, mixed static/dynamic operands, and shape errors.

use approx::assert_abs_diff_eq;
use linex::{DMatrix, DVector, SMatrix, SVector, Vector3, vec3};
use rand::Rng;

#[test]
fn vector3_addition_concrete() {
    let sum = (&vec3(1.0, 2.0, 3.0) + &vec3(1.0, 2.0, 3.0)).eval();
    assert_eq!(sum, vec3(2.0, 4.0, 6.0));
}

#[test]
fn vector3_chained_sum_single_pass() {
    let a = vec3(1.0, 2.0, 3.0);
    let b = vec3(1.0, 2.0, 3.0);
    let c = vec3(2.0, 4.0, 6.0);
    let sum = (&a + &b + &c).eval();
    assert_eq!(sum, vec3(4.0, 8.0, 12.0));
}

#[test]
fn addition_commutes_and_associates() {
    let mut rng = rand::thread_rng();
    let a = SVector::<f64, 4>::from_fn(|_| rng.r#gen());
    let b = SVector::<f64, 4>::from_fn(|_| rng.r#gen());
    let c = SVector::<f64, 4>::from_fn(|_| rng.r#gen());

    let ab = (&a + &b).eval();
    let ba = (&b + &a).eval();
    let left = (&ab + &c).eval();
    let bc = (&b + &c).eval();
    let right = (&a + &bc).eval();
    for i in 0..4 {
        assert_abs_diff_eq!(ab[i], ba[i], epsilon = 1e-12);
        assert_abs_diff_eq!(left[i], right[i], epsilon = 1e-12);
    }
}

#[test]
fn scalar_distributes_over_addition() {
    let mut rng = rand::thread_rng();
    let a = Vector3::<f64>::from_fn(|_| rng.r#gen());
    let b = Vector3::<f64>::from_fn(|_| rng.r#gen());
    let s = 2.5;

    let left = ((&a + &b) * s).eval();
    let right = (&a * s + (&b * s)).eval();
    for i in 0..3 {
        assert_abs_diff_eq!(left[i], right[i], epsilon = 1e-12);
    }
}

#[test]
fn scalar_on_the_left_commutes() {
    let v = vec3(1.0, 2.0, 3.0);
    assert_eq!((2.0_f64 * &v).eval(), (&v * 2.0).eval());
    assert_eq!((&v / 2.0).eval(), vec3(0.5, 1.0, 1.5));
}

#[test]
fn mixed_operands_adopt_the_static_extent() {
    let s = vec3(1.0, 2.0, 3.0);
    let d = DVector::from_vec(vec![10.0, 20.0, 30.0]);

    // the result is statically sized either way around
    let sum: SVector<f64, 3> = (&s + &d).eval();
    assert_eq!(sum, vec3(11.0, 22.0, 33.0));
    let sum: SVector<f64, 3> = (&d - &s).eval();
    assert_eq!(sum, vec3(9.0, 18.0, 27.0));
}

#[test]
#[should_panic(expected = "dimension mismatch: 2 vs 3")]
fn dynamic_length_mismatch_panics_at_construction() {
    let a = DVector::<f64>::zeros(2);
    let b = DVector::<f64>::zeros(3);
    let _ = &a + &b;
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn static_dynamic_mismatch_panics_at_construction() {
    let s = vec3(1.0, 2.0, 3.0);
    let d = DVector::<f64>::zeros(4);
    let _ = &s + &d;
}

#[test]
fn vector_compound_assignment() {
    let mut v = vec3(1.0, 2.0, 3.0);
    v += &vec3(1.0, 1.0, 1.0);
    assert_eq!(v, vec3(2.0, 3.0, 4.0));
    v -= &vec3(2.0, 2.0, 2.0);
    assert_eq!(v, vec3(0.0, 1.0, 2.0));
    v += &vec3(1.0, 0.0, 0.0) + &vec3(0.0, 0.0, 1.0);
    assert_eq!(v, vec3(1.0, 1.0, 3.0));
}

#[test]
fn matrix_pointwise_ops_match_manual_loops() {
    let mut rng = rand::thread_rng();
    let a = SMatrix::<f64, 3, 4>::from_fn(|_, _| rng.r#gen());
    let b = SMatrix::<f64, 3, 4>::from_fn(|_, _| rng.r#gen());

    let sum = (&a + &b).eval();
    let diff = (&a - &b).eval();
    for i in 0..3 {
        for j in 0..4 {
            assert_abs_diff_eq!(sum[(i, j)], a[(i, j)] + b[(i, j)], epsilon = 1e-12);
            assert_abs_diff_eq!(diff[(i, j)], a[(i, j)] - b[(i, j)], epsilon = 1e-12);
        }
    }
}

#[test]
fn matrix_product_contracts_the_inner_extent() {
    let a = SMatrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = SMatrix::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
    let product: SMatrix<f64, 2, 2> = (&a * &b).eval();
    assert_eq!(product, SMatrix::from_rows([[58.0, 64.0], [139.0, 154.0]]));
}

#[test]
fn dynamic_matrix_product() {
    let a = DMatrix::from_row_vecs(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let id = DMatrix::<f64>::identity(2);
    let product = (&a * &id).eval();
    assert_eq!(product, a);
}

#[test]
#[should_panic(expected = "dimension mismatch")]
fn dynamic_matrix_inner_extent_mismatch_panics() {
    let a = DMatrix::<f64>::zeros(2, 3);
    let b = DMatrix::<f64>::zeros(4, 2);
    let _ = &a * &b;
}

#[test]
fn matrix_vector_products_match_manual_loops() {
    let mut rng = rand::thread_rng();
    let m = SMatrix::<f64, 4, 3>::from_fn(|_, _| rng.r#gen());
    let v = Vector3::<f64>::from_fn(|_| rng.r#gen());

    let mv = (&m * &v).eval();
    assert_eq!(mv.len(), 4);
    for i in 0..4 {
        let expected = (0..3).map(|j| m[(i, j)] * v[j]).sum::<f64>();
        assert_abs_diff_eq!(mv[i], expected, epsilon = 1e-12);
    }

    let w = SVector::<f64, 4>::from_fn(|_| rng.r#gen());
    let wm = (&w * &m).eval();
    assert_eq!(wm.len(), 3);
    for j in 0..3 {
        let expected = (0..4).map(|i| w[i] * m[(i, j)]).sum::<f64>();
        assert_abs_diff_eq!(wm[j], expected, epsilon = 1e-12);
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = rand::thread_rng();
    let m = SMatrix::<f64, 2, 5>::from_fn(|_, _| rng.r#gen());
    let back = m.transpose().transpose().eval();
    assert_eq!(back, m);

    let t = m.transpose().eval();
    for i in 0..2 {
        for j in 0..5 {
            assert_eq!(t[(j, i)], m[(i, j)]);
        }
    }
}

#[test]
fn matrix_compound_assignment() {
    let mut m = SMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    m += &SMatrix::from_rows([[1.0, 1.0], [1.0, 1.0]]);
    assert_eq!(m, SMatrix::from_rows([[2.0, 3.0], [4.0, 5.0]]));
    m -= &SMatrix::from_rows([[2.0, 3.0], [4.0, 5.0]]);
    assert_eq!(m, SMatrix::<f64, 2, 2>::zeros());

    let mut m = SMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    m *= 2.0;
    assert_eq!(m, SMatrix::from_rows([[2.0, 4.0], [6.0, 8.0]]));
    m /= 2.0;
    m *= &SMatrix::from_rows([[0.0, 1.0], [1.0, 0.0]]);
    assert_eq!(m, SMatrix::from_rows([[2.0, 1.0], [4.0, 3.0]]));
}

#[test]
fn ragged_dynamic_rows_error_at_construction() {
    let err = DMatrix::from_row_vecs(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
    assert_eq!(err, linex::LinexError::ShapeMismatch { left: 3, right: 2 });
}

#[test]
fn expressions_evaluate_lazily_per_element() {
    // reading one element of a chain must agree with full materialization
    use linex::VectorExpr;
    let a = vec3(1.0, 2.0, 3.0);
    let b = vec3(10.0, 20.0, 30.0);
    let chain = &a + &b;
    assert_eq!(VectorExpr::eval(&chain, 1), 22.0);
    assert_eq!(chain.eval(), vec3(11.0, 22.0, 33.0));
}
