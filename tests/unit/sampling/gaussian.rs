//! Tests for the correlated normal source

#[cfg(test)]
mod tests {
    use mutinfo::SynthesisError;
    use mutinfo::math::probability::mutual_information_from_correlation;
    use mutinfo::sampling::{CorrelatedNormal, GaussianSource};
    use ndarray::ArrayView1;

    fn correlation(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        let n = a.len() as f64;
        let mean_a = a.sum() / n;
        let mean_b = b.sum() / n;
        let cov = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| (x - mean_a) * (y - mean_b))
            .sum::<f64>()
            / n;
        let var_a = a.mapv(|x| (x - mean_a).powi(2)).sum() / n;
        let var_b = b.mapv(|y| (y - mean_b).powi(2)).sum() / n;
        cov / (var_a * var_b).sqrt()
    }

    // Tests invalid construction parameters are rejected
    // Verified by accepting zero dimensions
    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            CorrelatedNormal::new(0, 1.0, 1),
            Err(SynthesisError::InvalidParameter { parameter: "dim", .. })
        ));
        for &mi in &[-0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                CorrelatedNormal::new(2, mi, 1),
                Err(SynthesisError::InvalidParameter {
                    parameter: "mutual_information",
                    ..
                })
            ));
        }
    }

    // Tests mutual information is split evenly across components
    // Verified by assigning the total to every component
    #[test]
    fn test_correlation_from_total_mutual_information() {
        let per_component = mutual_information_from_correlation(0.6);
        let source = CorrelatedNormal::new(4, 4.0 * per_component, 0).unwrap();
        assert!((source.correlation() - 0.6).abs() < 1e-12);
        assert!((source.mutual_information() - 4.0 * per_component).abs() < 1e-12);
        assert_eq!(source.dim(), 4);

        let independent = CorrelatedNormal::new(3, 0.0, 0).unwrap();
        assert!(independent.correlation().abs() < f64::EPSILON);
    }

    // Tests sample shapes follow the requested size
    #[test]
    fn test_sample_shapes() {
        let mut source = CorrelatedNormal::new(4, 1.0, 3).unwrap();
        let (x, y) = source.sample(17).unwrap();
        assert_eq!(x.dim(), (17, 4));
        assert_eq!(y.dim(), (17, 4));

        let (x_empty, y_empty) = source.sample(0).unwrap();
        assert_eq!(x_empty.dim(), (0, 4));
        assert_eq!(y_empty.dim(), (0, 4));
    }

    // Tests identical seeds give identical batches
    // Verified by seeding from entropy
    #[test]
    fn test_seeded_determinism() {
        let mut first = CorrelatedNormal::new(2, 0.5, 99).unwrap();
        let mut second = CorrelatedNormal::new(2, 0.5, 99).unwrap();
        assert_eq!(first.sample(50).unwrap(), second.sample(50).unwrap());

        let mut other = CorrelatedNormal::new(2, 0.5, 100).unwrap();
        let mut reference = CorrelatedNormal::new(2, 0.5, 99).unwrap();
        assert_ne!(other.sample(50).unwrap().0, reference.sample(50).unwrap().0);
    }

    // Tests empirical moments match unit variance and the designed correlation
    // Verified by omitting the noise scale on Y
    #[test]
    fn test_empirical_correlation_structure() {
        let per_component = mutual_information_from_correlation(0.8);
        let mut source = CorrelatedNormal::new(2, 2.0 * per_component, 2024).unwrap();
        let (x, y) = source.sample(20_000).unwrap();

        for column in 0..2 {
            let rho = correlation(x.column(column), y.column(column));
            assert!((rho - 0.8).abs() < 0.02, "Paired correlation {rho}");

            let variance = y.column(column).mapv(|v| v * v).mean().unwrap_or(0.0);
            assert!((variance - 1.0).abs() < 0.05, "Y variance {variance}");
        }

        let cross = correlation(x.column(0), y.column(1));
        assert!(cross.abs() < 0.03, "Cross-component correlation {cross}");
        let within = correlation(x.column(0), x.column(1));
        assert!(within.abs() < 0.03, "Within-X correlation {within}");
    }
}
