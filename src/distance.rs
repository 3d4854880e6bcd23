//! Distances between feature rows and cluster centers.
//!
//! Members of a cluster are addressed by their row index in the full
//! feature matrix, so no sub-matrix is materialised: each row is read
//! through a smartcore row view and compared against the center.

use log::trace;
use smartcore::linalg::basic::arrays::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;

pub fn euclidean_dist(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Euclidean distance of one matrix row to `center`, without copying the row.
pub fn row_distance(features: &DenseMatrix<f64>, row: usize, center: &[f64]) -> f64 {
    features
        .get_row(row)
        .iterator(0)
        .zip(center)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Distance-to-center for every member of a cluster.
///
/// Output position `j` holds the distance of row `members[j]`.
pub fn distances_to_center(
    features: &DenseMatrix<f64>,
    members: &[usize],
    center: &[f64],
) -> Vec<f64> {
    let dists: Vec<f64> = members
        .iter()
        .map(|&row| row_distance(features, row, center))
        .collect();
    trace!(
        "Computed {} distances to center (dim {})",
        dists.len(),
        center.len()
    );
    dists
}

/// Copy a row of the matrix into an owned vector.
pub fn row_to_vec(features: &DenseMatrix<f64>, row: usize) -> Vec<f64> {
    features.get_row(row).iterator(0).copied().collect()
}

