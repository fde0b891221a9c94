//! Flattened Decision Tree Inference

use crate::risk::RiskLevel;

// Temperature band edges in °C, exported verbatim from the trained tree.
// Stored as f32 so ports keep the same boundary behavior.
const BAND_WARM: f32 = 26.7;
const BAND_HOT: f32 = 30.0;
const BAND_VERY_HOT: f32 = 35.0;
const BAND_SEVERE: f32 = 40.0;

/// Classify ambient conditions into a heat-risk level.
///
/// Pure and total: every `f32` pair, finite or not, maps to exactly one
/// level. Comparisons are strict `<` and evaluated top to bottom; with a
/// NaN input every comparison is false, so a NaN temperature falls through
/// to the hottest band. The branch structure must not be reordered or
/// simplified, as the exported tree's boundary values depend on it.
pub fn classify(temperature: f32, humidity: f32) -> RiskLevel {
    if temperature < BAND_WARM {
        return RiskLevel::Safe;
    }

    if temperature < BAND_HOT {
        if humidity < 60.0 {
            return RiskLevel::Safe;
        }
        return RiskLevel::Caution;
    }

    if temperature < BAND_VERY_HOT {
        if humidity < 35.0 {
            return RiskLevel::Safe;
        }
        if humidity < 65.0 {
            return RiskLevel::Caution;
        }
        return RiskLevel::Danger;
    }

    if temperature < BAND_SEVERE {
        if humidity < 25.0 {
            return RiskLevel::Caution;
        }
        if humidity < 55.0 {
            return RiskLevel::Danger;
        }
        return RiskLevel::Extreme;
    }

    if humidity < 20.0 {
        return RiskLevel::Danger;
    }
    RiskLevel::Extreme
}

/// Classify and return the legacy integer encoding (0..=3).
pub fn classify_ordinal(temperature: f32, humidity: f32) -> u8 {
    classify(temperature, humidity).ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_scenarios() {
        // (temperature, humidity, expected ordinal)
        let cases = [
            (20.0, 50.0, 0), // below first band, humidity ignored
            (28.0, 70.0, 1),
            (28.0, 59.0, 0),
            (33.0, 70.0, 2),
            (37.0, 50.0, 2),
            (42.0, 10.0, 2),
            (42.0, 30.0, 3),
        ];
        for (t, h, expected) in cases {
            assert_eq!(classify_ordinal(t, h), expected, "classify({t}, {h})");
        }
    }

    #[test]
    fn test_boundary_uses_strict_less_than() {
        // 29.9 still sits in the t < 30 band with its 60% split; at exactly
        // 30.0 the 30..35 band applies, where the splits are 35/65.
        assert_eq!(classify(29.9, 59.0), RiskLevel::Safe);
        assert_eq!(classify(29.9, 60.0), RiskLevel::Caution);
        assert_eq!(classify(30.0, 34.0), RiskLevel::Safe);
        assert_eq!(classify(30.0, 59.0), RiskLevel::Caution);
    }

    #[test]
    fn test_band_edges_belong_to_upper_band() {
        // Just under each edge vs. exactly on it, humidity chosen so the
        // bands disagree.
        assert_eq!(classify(26.6, 70.0), RiskLevel::Safe);
        assert_eq!(classify(26.7, 70.0), RiskLevel::Caution);

        assert_eq!(classify(29.9, 67.0), RiskLevel::Caution);
        assert_eq!(classify(30.0, 67.0), RiskLevel::Danger);

        assert_eq!(classify(34.9, 30.0), RiskLevel::Safe);
        assert_eq!(classify(35.0, 30.0), RiskLevel::Danger);

        assert_eq!(classify(39.9, 10.0), RiskLevel::Caution);
        assert_eq!(classify(40.0, 10.0), RiskLevel::Danger);
    }

    #[test]
    fn test_humidity_splits_within_bands() {
        assert_eq!(classify(33.0, 34.9), RiskLevel::Safe);
        assert_eq!(classify(33.0, 35.0), RiskLevel::Caution);
        assert_eq!(classify(33.0, 64.9), RiskLevel::Caution);
        assert_eq!(classify(33.0, 65.0), RiskLevel::Danger);

        assert_eq!(classify(37.0, 24.9), RiskLevel::Caution);
        assert_eq!(classify(37.0, 25.0), RiskLevel::Danger);
        assert_eq!(classify(37.0, 54.9), RiskLevel::Danger);
        assert_eq!(classify(37.0, 55.0), RiskLevel::Extreme);

        assert_eq!(classify(45.0, 19.9), RiskLevel::Danger);
        assert_eq!(classify(45.0, 20.0), RiskLevel::Extreme);
    }

    #[test]
    fn test_humidity_ignored_below_first_band() {
        assert_eq!(classify(20.0, f32::NAN), RiskLevel::Safe);
        assert_eq!(classify(-10.0, 100.0), RiskLevel::Safe);
        assert_eq!(classify(25.0, 0.0), RiskLevel::Safe);
    }

    #[test]
    fn test_nan_temperature_falls_to_hottest_band() {
        // NaN fails every `<`, landing in the t >= 40 branch.
        assert_eq!(classify(f32::NAN, 10.0), RiskLevel::Danger);
        assert_eq!(classify(f32::NAN, 50.0), RiskLevel::Extreme);
        assert_eq!(classify(f32::NAN, f32::NAN), RiskLevel::Extreme);
    }

    #[test]
    fn test_infinite_inputs() {
        assert_eq!(classify(f32::NEG_INFINITY, 90.0), RiskLevel::Safe);
        assert_eq!(classify(f32::INFINITY, 0.0), RiskLevel::Danger);
        assert_eq!(classify(f32::INFINITY, 90.0), RiskLevel::Extreme);
        assert_eq!(classify(28.0, f32::INFINITY), RiskLevel::Caution);
    }

    proptest! {
        #[test]
        fn prop_total_over_finite_inputs(t in -100.0f32..100.0, h in -50.0f32..150.0) {
            let ordinal = classify_ordinal(t, h);
            prop_assert!(ordinal <= 3);
        }

        #[test]
        fn prop_idempotent(t in -100.0f32..100.0, h in -50.0f32..150.0) {
            prop_assert_eq!(classify(t, h), classify(t, h));
        }

        #[test]
        fn prop_risk_nondecreasing_in_temperature(
            t1 in -100.0f32..100.0,
            t2 in -100.0f32..100.0,
            h in 0.0f32..100.0,
        ) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            prop_assert!(classify(lo, h) <= classify(hi, h));
        }

        #[test]
        fn prop_risk_nondecreasing_in_humidity(
            t in -100.0f32..100.0,
            h1 in 0.0f32..100.0,
            h2 in 0.0f32..100.0,
        ) {
            let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
            prop_assert!(classify(t, lo) <= classify(t, hi));
        }
    }
}
