// =========================================================================
// FALSIFY-KNNB: k-nearest-neighbors / naive Bayes classification contract
//
// Each test states one property the classifier must never violate and
// reports "FALSIFIED" with the offending values when it does.
//
// References:
//   - Cover & Hart (1967) "Nearest Neighbor Pattern Classification"
//   - Zhang (2004) "The Optimality of Naive Bayes"
// =========================================================================

use super::*;
use crate::primitives::Point;

fn clusters_2d() -> Space<usize> {
    Space::with_points(
        2,
        [0_usize, 1],
        vec![
            Point::labeled(vec![0.0, 0.0], 0),
            Point::labeled(vec![0.5, 0.5], 0),
            Point::labeled(vec![1.0, 0.0], 0),
            Point::labeled(vec![5.0, 5.0], 1),
            Point::labeled(vec![5.5, 5.5], 1),
            Point::labeled(vec![6.0, 5.0], 1),
        ],
    )
    .expect("valid")
}

/// FALSIFY-KNNB-001: Predictions belong to the known label set
#[test]
fn falsify_knnb_001_predictions_in_label_set() {
    let space = clusters_2d();
    let classifier = KnnBayesClassifier::new(&space);

    for point in space.points() {
        let label = classifier.classify(point, 3).expect("classify");
        assert!(
            label.is_some_and(|l| space.classes().contains(l)),
            "FALSIFIED KNNB-001: {label:?} not in {:?}",
            space.classes()
        );
    }
}

/// FALSIFY-KNNB-002: Well-separated clusters are classified correctly
#[test]
fn falsify_knnb_002_separable_data() {
    let space = clusters_2d();
    let classifier = KnnBayesClassifier::new(&space);

    for point in space.points() {
        let expected = point.label();
        let got = classifier.classify(point, 3).expect("classify");
        assert_eq!(
            got, expected,
            "FALSIFIED KNNB-002: {:?} classified as {got:?}",
            point.dimensions()
        );
    }
}

/// FALSIFY-KNNB-003: Deterministic predictions
#[test]
fn falsify_knnb_003_deterministic() {
    let space = clusters_2d();
    let classifier = KnnBayesClassifier::new(&space);

    let q = [2.0, 2.5];
    let first = classifier.classify(&q, 4).expect("classify 1");
    let second = classifier.classify(&q, 4).expect("classify 2");
    assert_eq!(first, second, "FALSIFIED KNNB-003: predictions differ on same input");
}

/// FALSIFY-KNNB-004: Classification never reorders the training set
#[test]
fn falsify_knnb_004_space_untouched() {
    let space = clusters_2d();
    let snapshot = space.clone();
    let classifier = KnnBayesClassifier::new(&space);

    let _ = classifier.classify(&[5.2, 5.1], 6).expect("classify");
    assert_eq!(space, snapshot, "FALSIFIED KNNB-004: space changed by classify");
}

/// FALSIFY-KNNB-005: A class absent from the neighborhood is never chosen
#[test]
fn falsify_knnb_005_absent_class_never_wins() {
    let space = clusters_2d();
    let classifier = KnnBayesClassifier::new(&space);

    let posterior = classifier.explain(&[0.2, 0.2], 3).expect("explain");
    assert_eq!(posterior.stats().counts[1], 0);
    assert_ne!(
        posterior.class_index(),
        Some(1),
        "FALSIFIED KNNB-005: class with prior 0 won"
    );
}

/// FALSIFY-KNNB-006: Neighborhood size is min(k, n)
#[test]
fn falsify_knnb_006_neighborhood_size() {
    let space = clusters_2d();
    let classifier = KnnBayesClassifier::new(&space);

    for k in [1, 3, 6, 7, 1000] {
        let posterior = classifier.explain(&[3.0, 3.0], k).expect("explain");
        assert_eq!(
            posterior.k_used(),
            k.min(space.len()),
            "FALSIFIED KNNB-006: k={k} used {} neighbors",
            posterior.k_used()
        );
    }
}
