//! Integration tests for the randomness tests and the suite runner.

use approx::assert_relative_eq;
use prng_core::traits::{DigitSequenceGenerator, RandomnessTest};
use prng_core::types::{TestDetails, TestOptions, TestStatus};
use prng_models::catalog::AlgorithmCatalog;
use prng_models::generators::{MidSquare, MidSquareParams};
use prng_models::randomness::{
    select_bins, MeanTest, TestKind, TestSuite, UniformityChiSquareTest, VarianceTest,
};
use proptest::prelude::*;

#[test]
fn test_bin_selection_fixtures() {
    let hundred: Vec<f64> = (0..100).map(|i| (i as f64 + 0.5) / 100.0).collect();
    let result = UniformityChiSquareTest::new()
        .run(&hundred, 0.05, &TestOptions::default())
        .unwrap();
    assert_eq!(result.table().unwrap().len(), 10);
    assert!(result.warnings().is_empty());

    let twenty: Vec<f64> = (0..20).map(|i| (i as f64 + 0.5) / 20.0).collect();
    let result = UniformityChiSquareTest::new()
        .run(&twenty, 0.05, &TestOptions::with_bins(10))
        .unwrap();
    assert_eq!(result.table().unwrap().len(), 4);
    assert_eq!(result.status(), TestStatus::Warning);
    assert!(result.warnings()[0].contains("reduced to m=4"));
    assert_eq!(select_bins(20, Some(10)).bins, 4);
}

#[test]
fn test_status_tracks_warnings_for_every_test() {
    let catalog = AlgorithmCatalog::standard();
    let samples: [&[f64]; 4] = [&[], &[0.5], &[0.0, 1.0, 0.4], &[0.25; 30]];
    for name in catalog.test_names() {
        let test = catalog.create_test(name).unwrap();
        for sample in samples {
            let result = test.run(sample, 0.05, &TestOptions::default()).unwrap();
            assert_eq!(
                result.status() == TestStatus::Warning,
                !result.warnings().is_empty(),
                "{} on {:?}",
                name,
                sample
            );
        }
    }
}

#[test]
fn test_mid_square_sequence_through_suite() {
    let (sequence, _) = MidSquare::new()
        .generate(500, &MidSquareParams::new(675_248))
        .unwrap();
    let report = TestSuite::from_kinds(&TestKind::ALL)
        .run_parallel(&sequence, 0.05, &TestOptions::default())
        .unwrap();

    assert_eq!(report.results.len(), 3);
    for result in &report.results {
        assert_eq!(result.n(), 500);
        assert!(!result.conclusion().is_empty());
    }
}

#[test]
fn test_results_serialise_to_json() {
    let values: Vec<f64> = (0..30).map(|i| (i as f64 + 0.5) / 30.0).collect();
    let result = UniformityChiSquareTest::new()
        .run(&values, 0.05, &TestOptions::default())
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["test"], "uniformity-chi2");
    assert_eq!(json["kind"], "uniformity");
    assert_eq!(json["m"], 5);
    assert_eq!(json["table"].as_array().unwrap().len(), 5);
    assert_eq!(json["status"], "ok");
    assert!(json.get("warnings").is_none());
}

#[test]
fn test_nan_statistics_serialise_as_null() {
    let result = VarianceTest::new()
        .run(&[0.4], 0.05, &TestOptions::default())
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert!(json["q"].is_null());
    assert!(json["p_value"].is_null());
    assert_eq!(json["status"], "warning");
}

fn unit_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1.0, 2..300)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_mean_of_constant_half_is_exactly_zero(n in 1usize..500, alpha in 0.0001f64..0.9999) {
        let values = vec![0.5; n];
        let result = MeanTest::new().run(&values, alpha, &TestOptions::default()).unwrap();
        prop_assert_eq!(result.statistic(), 0.0);
        prop_assert!(result.accept());
    }

    #[test]
    fn test_variance_is_permutation_invariant(
        values in unit_values(),
        rotation in 0usize..300
    ) {
        let mut permuted = values.clone();
        permuted.reverse();
        let k = rotation % permuted.len();
        permuted.rotate_left(k);

        let test = VarianceTest::new();
        let a = test.run(&values, 0.05, &TestOptions::default()).unwrap();
        let b = test.run(&permuted, 0.05, &TestOptions::default()).unwrap();

        assert_relative_eq!(a.statistic(), b.statistic(), max_relative = 1e-9);
        prop_assert_eq!(a.critical_values(), b.critical_values());
    }

    #[test]
    fn test_uniformity_is_permutation_invariant(
        values in unit_values(),
        rotation in 0usize..300,
        bins in prop::option::of(1usize..40)
    ) {
        let mut permuted = values.clone();
        permuted.rotate_left(rotation % values.len());
        permuted.reverse();

        let options = TestOptions { bins };
        let test = UniformityChiSquareTest::new();
        let a = test.run(&values, 0.05, &options).unwrap();
        let b = test.run(&permuted, 0.05, &options).unwrap();

        prop_assert_eq!(a.table(), b.table());
        prop_assert_eq!(a.statistic(), b.statistic());
        prop_assert_eq!(a.accept(), b.accept());
    }

    #[test]
    fn test_uniformity_counts_every_in_range_value(values in unit_values(), bins in 2usize..25) {
        let result = UniformityChiSquareTest::new()
            .run(&values, 0.05, &TestOptions::with_bins(bins))
            .unwrap();
        let counted: usize = result.table().unwrap().iter().map(|r| r.observed).sum();
        prop_assert_eq!(counted, values.len());
        if let TestDetails::Uniformity { m, df, .. } = result.details() {
            prop_assert_eq!(*df, m - 1);
        }
    }
}
