//! Stratified selection of representative items from clustered data.
//!
//! Down-sampling stage for feature-selection pipelines: given the output of
//! a clustering step (one label per item, the item feature matrix and,
//! optionally, one center per cluster) pick up to `k` items from every
//! cluster.
//!
//! With centers, the picks sit at evenly spaced ranks of distance-to-center,
//! covering each cluster from its core to its rim. Without centers, the
//! picks are drawn at random.
//!
//! ```ignore
//! use stratified_select::{ClusteringData, PipelineStage, SelectKFromClusters};
//!
//! let data = ClusteringData::new(labels, features).with_centers(centers);
//! let result = SelectKFromClusters::new()
//!     .with_k(3)
//!     .with_seed(42)
//!     .transform(data)?;
//! for advisory in &result.advisories {
//!     println!("{}", advisory);
//! }
//! ```

pub mod builder;
pub mod distance;
pub mod errors;
pub mod input;
pub mod output;
pub mod rank;
pub mod selector;

pub use builder::{ConfigValue, SelectKFromClusters};
pub use errors::{SelectResult, SelectionError};
pub use input::{ClusteringData, ClusteringResult, Label};
pub use output::{Advisory, SelectionOutput, SelectionResult};
pub use selector::PipelineStage;

#[cfg(test)]
mod tests;
