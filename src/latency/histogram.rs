/// Equal-width frequency counts for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub name: String,
    /// `counts.len() + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin the finite `values` into `bins` buckets spanning their own range.
    ///
    /// The last bucket is closed on the right. A degenerate range is widened
    /// to `[v - 0.5, v + 0.5]`. Returns `None` when no finite value remains.
    pub fn from_values(name: &str, values: &[f64], bins: usize) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return None;
        }

        let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for value in finite {
            let idx = (((value - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Some(Self {
            name: name.to_string(),
            edges,
            counts,
        })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn range(&self) -> (f64, f64) {
        (
            self.edges.first().copied().unwrap_or(0.0),
            self.edges.last().copied().unwrap_or(0.0),
        )
    }
}
