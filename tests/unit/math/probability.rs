//! Tests for the normal CDF and Gaussian mutual-information identities

#[cfg(test)]
mod tests {
    use mutinfo::math::probability::{
        correlation_from_mutual_information, mutual_information_from_correlation,
        standard_normal_cdf,
    };

    // Tests reference values of the standard normal CDF
    // Verified by swapping erfc for a truncated series
    #[test]
    fn test_standard_normal_cdf_reference_values() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < f64::EPSILON);
        assert!((standard_normal_cdf(1.96) - 0.975_002_104_851_779_5).abs() < 1e-14);
        assert!((standard_normal_cdf(-1.0) - 0.158_655_253_931_457_07).abs() < 1e-14);
    }

    // Tests the lower tail keeps relative precision instead of rounding to zero
    // Verified by computing 1 - Φ(-x) instead of the erfc form
    #[test]
    fn test_standard_normal_cdf_lower_tail() {
        let tail = standard_normal_cdf(-30.0);
        assert!(tail > 0.0);
        let expected = 4.906_713_927_148_764e-198;
        assert!(
            ((tail - expected) / expected).abs() < 1e-9,
            "Φ(-30) = {tail:e}, expected {expected:e}"
        );

        assert!(standard_normal_cdf(-37.5) > 0.0);
    }

    // Tests Φ(x) + Φ(-x) = 1
    // Verified by dropping the sign flip inside the CDF
    #[test]
    fn test_standard_normal_cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 2.5, 4.0, 6.0] {
            let sum = standard_normal_cdf(x) + standard_normal_cdf(-x);
            assert!((sum - 1.0).abs() < 1e-15, "Symmetry broken at {x}: {sum}");
        }
    }

    // Tests NaN input propagates
    #[test]
    fn test_standard_normal_cdf_nan() {
        assert!(standard_normal_cdf(f64::NAN).is_nan());
        assert!((standard_normal_cdf(f64::INFINITY) - 1.0).abs() < f64::EPSILON);
        assert!(standard_normal_cdf(f64::NEG_INFINITY).abs() < f64::EPSILON);
    }

    // Tests mutual information of a correlated Gaussian pair
    // Verified by dropping the 1/2 factor
    #[test]
    fn test_mutual_information_from_correlation() {
        assert!(mutual_information_from_correlation(0.0).abs() < f64::EPSILON);
        assert!((mutual_information_from_correlation(0.6) - 0.223_143_551_314_209_74).abs() < 1e-14);
        assert!(mutual_information_from_correlation(1.0).is_infinite());
    }

    // Tests correlation recovered from mutual information
    // Verified by returning rho squared
    #[test]
    fn test_correlation_round_trip() {
        for &rho in &[0.0, 0.1, 0.5, 0.9, 0.999] {
            let mi = mutual_information_from_correlation(rho);
            let recovered = correlation_from_mutual_information(mi);
            assert!(
                (recovered - rho).abs() < 1e-9,
                "rho {rho} recovered as {recovered}"
            );
        }
        assert!(correlation_from_mutual_information(0.0).abs() < f64::EPSILON);
    }
}
