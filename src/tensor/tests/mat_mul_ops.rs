use approx::assert_abs_diff_eq;

use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_mat_mul() {
    let a = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    let b = Tensor::new(&[7., 8., 9., 10., 11., 12.], &[3, 2]);
    let c = a.mat_mul(&b).unwrap();
    assert_eq!(c.shape(), &[2, 2]);
    assert_eq!(c.to_vec(), vec![58., 64., 139., 154.]);
}

#[test]
fn test_mat_mul_shape_errors() {
    let a = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(
        a.mat_mul(&a),
        Err(TensorError::MatMulShape {
            lhs: vec![2, 3],
            rhs: vec![2, 3],
        })
    );
    let v = Tensor::new(&[1., 2., 3.], &[3]);
    assert_eq!(
        a.mat_mul(&v),
        Err(TensorError::RankMismatch {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn test_elementwise_helpers() {
    let a = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let bias = Tensor::new(&[10., 20.], &[2]);
    assert_eq!(a.add_row_vector(&bias).to_vec(), vec![11., 22., 13., 24.]);
    assert_eq!(a.sum_rows().to_vec(), vec![4., 6.]);
    assert_abs_diff_eq!(a.sum(), 10.0);
    assert_eq!((&a / 2.0).to_vec(), vec![0.5, 1.0, 1.5, 2.0]);
    assert_eq!((&a * 2.0).to_vec(), vec![2., 4., 6., 8.]);
    assert_eq!((&a - &a).to_vec(), vec![0.; 4]);
    assert_eq!(a.map(|x| x * x).to_vec(), vec![1., 4., 9., 16.]);
}

#[test]
fn test_softmax_rows() {
    let logits = Tensor::new(&[1.0, 2.0, 3.0, 1000.0, 1000.0, 1000.0], &[2, 3]);
    let p = logits.softmax_rows().unwrap();
    assert_eq!(p.shape(), &[2, 3]);
    // 每行和为 1，大数值也不会溢出
    assert_abs_diff_eq!(p[[0, 0]] + p[[0, 1]] + p[[0, 2]], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p[[1, 0]], 1.0 / 3.0, epsilon = 1e-6);
    assert!(p[[0, 2]] > p[[0, 1]] && p[[0, 1]] > p[[0, 0]]);
    assert_abs_diff_eq!(p[[0, 2]], 0.665_240_9, epsilon = 1e-5);

    let v = Tensor::new(&[1.0, 2.0], &[2]);
    assert!(v.softmax_rows().is_err());
}

#[test]
fn test_elementwise_mul() {
    let a = Tensor::new(&[1., 2., 3., 4.], &[2, 2]);
    let b = Tensor::new(&[0., 1., 0., 2.], &[2, 2]);
    assert_eq!((&a * &b).to_vec(), vec![0., 2., 0., 8.]);
}
