//! Output contract of the selection stage.

use std::fmt;

use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::distance::row_to_vec;
use crate::errors::SelectResult;

/// Non-fatal conditions raised during a selection. The selection still
/// completes; callers decide whether the condition matters to them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    /// No centers were provided, members were drawn at random.
    MissingCenters,
    /// Duplicates were kept because `allow_duplicate` is set.
    DuplicateSelection { count: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MissingCenters => write!(
                f,
                "Centroid location is not provided, so random selection from each cluster will be performed"
            ),
            Advisory::DuplicateSelection { count } => {
                write!(f, "There are {} duplicated selections", count)
            }
        }
    }
}

/// Result of a selection: the untouched feature matrix and the chosen rows.
#[derive(Clone, Debug)]
pub struct SelectionResult {
    pub features: DenseMatrix<f64>,
    /// Row indices into `features`, grouped by ascending cluster label.
    pub selected_indexes: Vec<usize>,
    pub advisories: Vec<Advisory>,
}

impl SelectionResult {
    pub fn len(&self) -> usize {
        self.selected_indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_indexes.is_empty()
    }

    pub fn has_advisory(&self, advisory: &Advisory) -> bool {
        self.advisories.contains(advisory)
    }

    /// Number of duplicated selections kept in the output, zero when
    /// duplicates were collapsed or none occurred.
    pub fn duplicate_count(&self) -> usize {
        self.advisories
            .iter()
            .find_map(|a| match a {
                Advisory::DuplicateSelection { count } => Some(*count),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Feature rows of the selected items, in selection order.
    pub fn selected_rows(&self) -> Vec<Vec<f64>> {
        self.selected_indexes
            .iter()
            .map(|&i| row_to_vec(&self.features, i))
            .collect()
    }

    /// Mapping-shaped form handed to downstream stages.
    pub fn to_output(&self) -> SelectionOutput {
        let (nrows, _) = self.features.shape();
        SelectionOutput {
            features: (0..nrows).map(|i| row_to_vec(&self.features, i)).collect(),
            selected_indexes: self.selected_indexes.clone(),
        }
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nrows, ncols) = self.features.shape();
        write!(
            f,
            "SelectionResult(selected={}, items={}, features={}, advisories={})",
            self.selected_indexes.len(),
            nrows,
            ncols,
            self.advisories.len()
        )
    }
}

/// Serialized output record with the keys downstream stages expect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionOutput {
    #[serde(rename = "PCAfeatures")]
    pub features: Vec<Vec<f64>>,
    pub selected_indexes: Vec<usize>,
}

impl SelectionOutput {
    pub fn to_json(&self) -> SelectResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
