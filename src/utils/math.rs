/// Variance floor applied before evaluating a Gaussian density, so a
/// degenerate (zero-variance) component stays finite.
const MIN_VARIANCE: f64 = 1e-12;

/// Logistic function mapping a raw linear score into (0, 1).
pub fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + libm::exp(-score))
}

/// Natural log of the Gaussian density with the given mean and variance,
/// evaluated at `value`.
pub fn ln_gaussian_pdf(value: f64, mean: f64, variance: f64) -> f64 {
    let v = variance.max(MIN_VARIANCE);
    let diff = value - mean;
    -0.5 * (libm::log(2.0 * std::f64::consts::PI * v) + diff * diff / v)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn sigmoid_is_half_at_zero() {
        assert!(approx_eq(sigmoid(0.0), 0.5, EPS));
    }

    #[test]
    fn sigmoid_is_symmetric_around_half() {
        for x in [0.1, 1.0, 3.5, 10.0] {
            assert!(approx_eq(sigmoid(x) + sigmoid(-x), 1.0, 1e-9));
        }
    }

    #[test]
    fn sigmoid_saturates_toward_zero_and_one() {
        assert!(sigmoid(40.0) > 1.0 - 1e-12);
        assert!(sigmoid(-40.0) < 1e-12);
    }

    #[test]
    fn ln_gaussian_pdf_peaks_at_the_mean() {
        let at_mean = ln_gaussian_pdf(2.0, 2.0, 1.0);
        let off1 = ln_gaussian_pdf(3.0, 2.0, 1.0);
        let off2 = ln_gaussian_pdf(5.0, 2.0, 1.0);
        assert!(at_mean > off1);
        assert!(off1 > off2);
    }

    #[test]
    fn ln_gaussian_pdf_matches_standard_normal_at_zero() {
        // ln(1 / sqrt(2*pi)) for the standard normal at its mean.
        let want = -0.5 * (2.0 * std::f64::consts::PI).ln();
        assert!(approx_eq(ln_gaussian_pdf(0.0, 0.0, 1.0), want, 1e-9));
    }

    #[test]
    fn zero_variance_stays_finite() {
        let v = ln_gaussian_pdf(1.0, 1.0, 0.0);
        assert!(v.is_finite());
    }
}
