//! Compound-interest factor functions
//!
//! Standard engineering-economy factors used to move sums between a present
//! value and an equivalent uniform periodic payment. All factors take the
//! periodic interest rate as a fraction (0.05 = 5%) and the number of
//! periods as a whole count.

/// Capital recovery factor (A/P): converts a present sum into an equivalent
/// uniform payment over `periods` periods at rate `rate`.
///
/// A zero rate degenerates to straight-line amortization (1/n), which also
/// avoids the 0/0 in the compound formula.
///
/// For `rate > 0` the factor always exceeds `rate` itself, since it recovers
/// principal on top of interest.
pub fn capital_recovery_factor(rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return 1.0 / periods as f64;
    }
    let growth = (1.0 + rate).powi(periods as i32);
    (rate * growth) / (growth - 1.0)
}

/// Uniform-series present value factor (P/A): converts a uniform periodic
/// payment into its present value. Inverse view of the capital recovery
/// factor; returns `periods` at zero rate.
pub fn present_value_factor(rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return periods as f64;
    }
    let growth = (1.0 + rate).powi(periods as i32);
    (growth - 1.0) / (rate * growth)
}

/// Single-payment present value factor (P/F): discounts a lump sum received
/// `periods` periods in the future back to present value.
pub fn single_payment_pv_factor(rate: f64, periods: u32) -> f64 {
    (1.0 + rate).powi(-(periods as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crf_zero_rate_is_straight_line() {
        for n in [1u32, 2, 8, 30, 100] {
            assert_relative_eq!(capital_recovery_factor(0.0, n), 1.0 / n as f64);
        }
    }

    #[test]
    fn test_crf_worked_example() {
        // 5% over 8 years, the classroom exercise values
        let crf = capital_recovery_factor(0.05, 8);
        assert_relative_eq!(crf, 0.154722, epsilon = 1e-6);
    }

    #[test]
    fn test_crf_exceeds_rate() {
        for &rate in &[0.001, 0.05, 0.12, 0.5] {
            for n in [1u32, 5, 40] {
                assert!(
                    capital_recovery_factor(rate, n) > rate,
                    "crf({}, {}) should exceed the rate",
                    rate,
                    n
                );
            }
        }
    }

    #[test]
    fn test_crf_single_period() {
        // One period: the whole principal plus one period of interest
        assert_relative_eq!(capital_recovery_factor(0.08, 1), 1.08, epsilon = 1e-12);
    }

    #[test]
    fn test_pv_factor_inverts_crf() {
        let crf = capital_recovery_factor(0.07, 12);
        let pvf = present_value_factor(0.07, 12);
        assert_relative_eq!(crf * pvf, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pv_factor_zero_rate() {
        assert_relative_eq!(present_value_factor(0.0, 10), 10.0);
    }

    #[test]
    fn test_single_payment_discount() {
        // $1 in 8 years at 5% is worth 1/1.05^8 today
        let v = single_payment_pv_factor(0.05, 8);
        assert_relative_eq!(v, 1.0 / 1.05_f64.powi(8), epsilon = 1e-12);
        assert_relative_eq!(single_payment_pv_factor(0.0, 8), 1.0);
    }

    #[test]
    fn test_sinking_fund_identity() {
        // A/P times P/F equals the sinking fund factor A/F = i / ((1+i)^n - 1)
        let rate = 0.05;
        let n = 8;
        let af = capital_recovery_factor(rate, n) * single_payment_pv_factor(rate, n);
        let expected = rate / ((1.0 + rate).powi(n as i32) - 1.0);
        assert_relative_eq!(af, expected, epsilon = 1e-12);
    }
}
