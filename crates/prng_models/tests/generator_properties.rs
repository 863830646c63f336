//! Integration tests for the digit-extraction generators.
//!
//! Covers the regression fixture, determinism, the output range and the
//! shape of traces, through both the concrete types and the catalog.

use prng_core::traits::DigitSequenceGenerator;
use prng_core::types::{ConfigError, StepOperation};
use prng_models::catalog::AlgorithmCatalog;
use prng_models::generators::{
    digit_count, ConstantMultiplier, ConstantMultiplierParams, DigitGenerator, GeneratorKind,
    GeneratorParams, MidSquare, MidSquareParams, MiddleProduct, MiddleProductParams,
};
use proptest::prelude::*;

#[test]
fn test_mid_square_regression_triple() {
    let catalog = AlgorithmCatalog::standard();
    let generator = catalog.create_generator("mid-square").unwrap();
    let params = GeneratorParams::MidSquare(MidSquareParams::new(1234));

    let (sequence, trace) = generator.generate(1, &params).unwrap();
    let step = &trace.steps()[0];

    assert_eq!(step.operation, StepOperation::Square { x: "1234".into() });
    assert_eq!(step.product.trim_start_matches('0'), "1522756");
    assert_eq!(step.product, "01522756");
    assert_eq!(step.extracted, "5227");
    assert_eq!(sequence[0], 0.5227);
}

#[test]
fn test_middle_product_mismatch_raises_before_computing() {
    let params = GeneratorParams::from_inputs(GeneratorKind::MiddleProduct, Some(1234), Some(56), None)
        .unwrap();
    let result = DigitGenerator::middle_product().generate(1_000_000, &params);
    assert_eq!(
        result,
        Err(ConfigError::DigitMismatch {
            first: 4,
            second: 2
        })
    );
}

#[test]
fn test_zero_length_rejected_by_every_generator() {
    let catalog = AlgorithmCatalog::standard();
    for entry in catalog.generators() {
        let kind: GeneratorKind = entry.name.parse().unwrap();
        let caps = entry.capabilities;
        let params = GeneratorParams::from_inputs(
            kind,
            Some(1234),
            (caps.required_seeds == 2).then_some(5678),
            caps.requires_constant.then_some(5167),
        )
        .unwrap();
        assert_eq!(
            (entry.factory)().generate(0, &params),
            Err(ConfigError::ZeroLength)
        );
    }
}

#[test]
fn test_trace_is_one_to_one_with_sequence() {
    let params = MiddleProductParams::new(4321, 8765);
    let (sequence, trace) = MiddleProduct::new().generate(200, &params).unwrap();

    assert_eq!(sequence.len(), 200);
    assert_eq!(trace.len(), 200);
    for (j, (step, value)) in trace.iter().zip(sequence.iter()).enumerate() {
        assert_eq!(step.step, j);
        assert_eq!(step.label, j + 2);
        assert_eq!(step.value, *value);
        assert_eq!(step.extracted.len(), 4);
    }
}

#[test]
fn test_trace_renders_one_line_per_step() {
    let (_, trace) = ConstantMultiplier::new()
        .generate(3, &ConstantMultiplierParams::new(9876, 5167))
        .unwrap();
    let text = trace.to_string();

    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Y0=(5167)*(9876)=51029292   X1=0292   r1=0.0292\n"));
}

fn seed_strategy() -> impl Strategy<Value = i64> {
    // 4 to 9 digits, either sign
    (1_000i64..1_000_000_000).prop_flat_map(|s| prop_oneof![Just(s), Just(-s)])
}

fn same_width_pair() -> impl Strategy<Value = (i64, i64)> {
    (4u32..=9).prop_flat_map(|d| {
        let low = 10i64.pow(d - 1);
        let high = 10i64.pow(d);
        (low..high, low..high)
    })
}

fn check_outputs(trace_values: &[(String, f64)], width: usize) {
    let scale = 10f64.powi(width as i32);
    for (digits, value) in trace_values {
        assert_eq!(digits.len(), width);
        assert!((0.0..1.0).contains(value), "value {} outside [0, 1)", value);
        let state: u64 = digits.parse().unwrap();
        assert_eq!((value * scale).round() as u64, state);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_mid_square_range_and_precision(seed in seed_strategy(), n in 1usize..200) {
        let (sequence, trace) = MidSquare::new().generate(n, &MidSquareParams::new(seed)).unwrap();
        prop_assert_eq!(sequence.len(), n);
        let pairs: Vec<(String, f64)> =
            trace.iter().map(|s| (s.extracted.clone(), s.value)).collect();
        check_outputs(&pairs, digit_count(seed));
    }

    #[test]
    fn test_constant_multiplier_range_and_precision(
        seed in any::<i32>(),
        constant in seed_strategy(),
        n in 1usize..200
    ) {
        let params = ConstantMultiplierParams::new(i64::from(seed), constant);
        let (_, trace) = ConstantMultiplier::new().generate(n, &params).unwrap();
        let pairs: Vec<(String, f64)> =
            trace.iter().map(|s| (s.extracted.clone(), s.value)).collect();
        check_outputs(&pairs, digit_count(constant));
    }

    #[test]
    fn test_middle_product_range_and_precision((a, b) in same_width_pair(), n in 1usize..200) {
        let (_, trace) = MiddleProduct::new().generate(n, &MiddleProductParams::new(a, b)).unwrap();
        let pairs: Vec<(String, f64)> =
            trace.iter().map(|s| (s.extracted.clone(), s.value)).collect();
        check_outputs(&pairs, digit_count(a));
    }

    #[test]
    fn test_generation_is_deterministic(seed in seed_strategy(), constant in seed_strategy()) {
        let catalog = AlgorithmCatalog::standard();
        let params = GeneratorParams::from_inputs(
            GeneratorKind::ConstantMultiplier,
            Some(seed),
            None,
            Some(constant),
        )
        .unwrap();

        let first = catalog.create_generator("constant-multiplier").unwrap().generate(64, &params).unwrap();
        let second = catalog.create_generator("constant-multiplier").unwrap().generate(64, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_short_inputs_always_rejected(seed in -999i64..=999) {
        let result = MidSquare::new().generate(10, &MidSquareParams::new(seed));
        let rejected = matches!(result, Err(ConfigError::TooFewDigits { .. }));
        prop_assert!(rejected);
    }
}
