//! Loading, grouping and summarising cache-latency benchmark output.

pub mod boxplot;
pub mod dataset;
pub mod histogram;
pub mod stats;
pub mod summary;

pub use boxplot::BoxSummary;
pub use dataset::{LatencyDataset, LatencyGroup, CATEGORY_COLUMN, LATENCY_COLUMN};
pub use histogram::Histogram;
pub use stats::Describe;
pub use summary::{render_summary, SUMMARY_BANNER};
