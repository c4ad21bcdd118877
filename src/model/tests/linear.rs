use approx::assert_abs_diff_eq;

use crate::harness::{ModelCollaborator, reshape, run_experiment};
use crate::model::{LinearClassifier, LinearClassifierConfig, ModelError};
use crate::tensor::Tensor;

/// 两类可线性分离的 1x2x2 小图：类别 0 亮在前半，类别 1 亮在后半
fn separable(n_per_class: usize) -> (Tensor, Vec<usize>) {
    let mut pixels = Vec::new();
    let mut labels = Vec::new();
    for i in 0..n_per_class * 2 {
        let class = i % 2;
        let (a, b) = if class == 0 { (255.0, 0.0) } else { (0.0, 255.0) };
        pixels.extend_from_slice(&[a, a, b, b]);
        labels.push(class);
    }
    let flat = Tensor::new(&pixels, &[n_per_class * 2, 4]);
    (reshape(flat, 1, 2, 2).unwrap(), labels)
}

fn tiny_classifier() -> LinearClassifier {
    LinearClassifier::new(LinearClassifierConfig {
        input_size: 4,
        num_classes: 2,
        learning_rate: 0.5,
        batch_size: 8,
        ..Default::default()
    })
}

#[test]
fn test_learns_separable_data() {
    let (train_x, train_y) = separable(20);
    let (test_x, test_y) = separable(5);
    let acc = run_experiment(&tiny_classifier(), &train_x, &train_y, &test_x, &test_y, 20).unwrap();
    assert_abs_diff_eq!(acc, 1.0);
}

#[test]
fn test_forward_shape_and_input_untouched() {
    let classifier = tiny_classifier();
    let (x, _) = separable(3);
    let before = x.clone();
    let model = classifier.construct_model().unwrap();
    let scores = classifier.forward(&model, &x).unwrap();
    assert_eq!(scores.shape(), &[6, 2]);
    assert_eq!(x, before);
}

#[test]
fn test_construct_model_is_seeded() {
    let classifier = tiny_classifier();
    let a = classifier.construct_model().unwrap();
    let b = classifier.construct_model().unwrap();
    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.weights().shape(), &[2, 4]);
    assert_eq!(a.bias().to_vec(), vec![0.0, 0.0]);
}

#[test]
fn test_training_is_deterministic() {
    let classifier = tiny_classifier();
    let (x, y) = separable(6);
    let dataset = classifier.construct_dataset(&x, &y).unwrap();

    let mut m1 = classifier.construct_model().unwrap();
    let mut m2 = classifier.construct_model().unwrap();
    classifier.train(&mut m1, &dataset, 3).unwrap();
    classifier.train(&mut m2, &dataset, 3).unwrap();
    assert_eq!(m1.weights(), m2.weights());
    assert_eq!(m1.bias(), m2.bias());
}

#[test]
fn test_construct_dataset_errors() {
    let classifier = tiny_classifier();
    let (x, _) = separable(2);

    assert!(matches!(
        classifier.construct_dataset(&x, &[0, 1, 0]),
        Err(ModelError::ShapeMismatch { .. })
    ));
    assert_eq!(
        classifier.construct_dataset(&x, &[0, 1, 5, 0]).unwrap_err(),
        ModelError::LabelOutOfRange {
            label: 5,
            num_classes: 2
        }
    );

    let wrong_geometry = Tensor::zeros(&[4, 3, 2, 2]);
    assert!(matches!(
        classifier.construct_dataset(&wrong_geometry, &[0, 1, 0, 1]),
        Err(ModelError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_train_rejects_zero_epochs() {
    let classifier = tiny_classifier();
    let (x, y) = separable(2);
    let dataset = classifier.construct_dataset(&x, &y).unwrap();
    let mut model = classifier.construct_model().unwrap();
    assert!(matches!(
        classifier.train(&mut model, &dataset, 0),
        Err(ModelError::InvalidArgument(_))
    ));
}

#[test]
fn test_train_reports_divergence() {
    let classifier = LinearClassifier::new(LinearClassifierConfig {
        input_size: 4,
        num_classes: 2,
        learning_rate: f32::INFINITY,
        batch_size: 4,
        ..Default::default()
    });
    let (x, y) = separable(4);
    let dataset = classifier.construct_dataset(&x, &y).unwrap();
    let mut model = classifier.construct_model().unwrap();
    assert!(matches!(
        classifier.train(&mut model, &dataset, 3),
        Err(ModelError::NonFiniteLoss { .. })
    ));
}
