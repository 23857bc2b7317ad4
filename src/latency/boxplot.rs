use super::stats::{quantile_sorted, sorted_copy};

const WHISKER_IQR: f64 = 1.5;

/// Box-and-whisker geometry for one group, Tukey style.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub name: String,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest observation within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Highest observation within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    pub fn from_values(name: &str, values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        let sorted = sorted_copy(&finite);

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let low_fence = q1 - WHISKER_IQR * iqr;
        let high_fence = q3 + WHISKER_IQR * iqr;

        let lower_whisker = sorted
            .iter()
            .copied()
            .find(|v| *v >= low_fence)
            .unwrap_or(q1);
        let upper_whisker = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_fence)
            .unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();

        Some(Self {
            name: name.to_string(),
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    /// Smallest and largest plotted value, outliers included.
    pub fn extent(&self) -> (f64, f64) {
        let low = self
            .outliers
            .iter()
            .copied()
            .fold(self.lower_whisker, f64::min);
        let high = self
            .outliers
            .iter()
            .copied()
            .fold(self.upper_whisker, f64::max);
        (low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_outliers_from_whiskers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let summary = BoxSummary::from_values("LockCache", &values).unwrap();

        assert_eq!(summary.q1, 2.25);
        assert_eq!(summary.median, 3.5);
        assert_eq!(summary.q3, 4.75);
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 5.0);
        assert_eq!(summary.outliers, vec![100.0]);
        assert_eq!(summary.extent(), (1.0, 100.0));
    }

    #[test]
    fn single_observation_collapses_box() {
        let summary = BoxSummary::from_values("LocalLRU", &[50.0]).unwrap();
        assert_eq!(summary.q1, 50.0);
        assert_eq!(summary.lower_whisker, 50.0);
        assert_eq!(summary.upper_whisker, 50.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn empty_group_has_no_box() {
        assert!(BoxSummary::from_values("LocalLRU", &[]).is_none());
    }
}
