/// Outcome of a hide operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HideReport {
    /// carrier units (pixel bytes or blocks) whose signal had to be altered
    pub changes: usize,
    /// carrier units the codec could have used
    pub carrier_units: usize,
    /// sum of squared sample differences between carrier and result
    pub squared_error: u64,
    /// samples the squared error was measured over
    pub samples: usize,
}

impl HideReport {
    /// Sum of squared differences of two equally long sample runs.
    ///
    /// Covers every sample, including the raw length field of a bitmap which
    /// can move by far more than one level.
    pub fn sum_squared_error(before: &[u8], after: &[u8]) -> u64 {
        before
            .iter()
            .zip(after)
            .map(|(&a, &b)| {
                let d = u64::from(a.abs_diff(b));
                d * d
            })
            .sum()
    }

    pub fn mean_squared_error(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.squared_error as f64 / self.samples as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_squared_error_of_an_empty_carrier_is_zero() {
        assert_eq!(HideReport::default().mean_squared_error(), 0.0);
    }

    #[test]
    fn mean_squared_error_averages_over_all_samples() {
        let report = HideReport {
            changes: 9,
            carrier_units: 36,
            squared_error: 18,
            samples: 36,
        };
        assert_eq!(report.mean_squared_error(), 0.5);
    }

    #[test]
    fn sum_squared_error_weights_large_moves() {
        assert_eq!(HideReport::sum_squared_error(&[0, 10, 7], &[0, 11, 7]), 1);
        assert_eq!(HideReport::sum_squared_error(&[0, 0, 0, 2], &[0, 0, 0, 255]), 253 * 253);
        assert_eq!(HideReport::sum_squared_error(&[], &[]), 0);
    }
}
