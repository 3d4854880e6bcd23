//! Input contract of the selection stage.
//!
//! The upstream clustering step hands over a mapping-shaped record with the
//! keys `labels`, `PCAfeatures` and optionally `label_centers`.
//! [`ClusteringData`] mirrors that record with optional fields so it can be
//! deserialized as-is; [`ClusteringResult`] is the validated form the
//! selector works on. Validation happens once, at the boundary.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::errors::{SelectResult, SelectionError};

/// Cluster label. Labels are hashed for center lookup and ordered so that
/// clusters are always visited in the same sequence.
pub trait Label: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Debug + Send + Sync> Label for T {}

/// Raw output of a clustering step, as received.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusteringData<L: Eq + Hash> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<L>>,
    #[serde(rename = "PCAfeatures", skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_centers: Option<HashMap<L, Vec<f64>>>,
}

impl<L: Label> ClusteringData<L> {
    pub fn new(labels: Vec<L>, features: Vec<Vec<f64>>) -> Self {
        Self {
            labels: Some(labels),
            features: Some(features),
            label_centers: None,
        }
    }

    pub fn with_centers(mut self, centers: HashMap<L, Vec<f64>>) -> Self {
        self.label_centers = Some(centers);
        self
    }
}

impl<L> ClusteringData<L>
where
    L: Label + for<'de> Deserialize<'de>,
{
    /// Parse the record from its JSON form.
    pub fn from_json(json: &str) -> SelectResult<Self> {
        let data: Self = serde_json::from_str(json)?;
        Ok(data)
    }
}

/// Validated clustering output: `labels[i]` is the cluster of feature row `i`.
#[derive(Clone, Debug)]
pub struct ClusteringResult<L: Label> {
    pub(crate) labels: Vec<L>,
    pub(crate) features: DenseMatrix<f64>,
    pub(crate) centers: Option<HashMap<L, Vec<f64>>>,
}

impl<L: Label> ClusteringResult<L> {
    /// Validate labels against the feature matrix and, when given, the
    /// centers against the labels.
    ///
    /// An empty centers map is treated as no centers at all. A non-empty map
    /// must hold a center of width `D` for every label in `labels`.
    pub fn new(
        labels: Vec<L>,
        features: DenseMatrix<f64>,
        centers: Option<HashMap<L, Vec<f64>>>,
    ) -> SelectResult<Self> {
        let (nrows, ncols) = features.shape();
        if labels.len() != nrows {
            return Err(SelectionError::ShapeMismatch(format!(
                "{} labels for {} feature rows",
                labels.len(),
                nrows
            )));
        }

        let centers = centers.filter(|c| !c.is_empty());
        if let Some(centers) = centers.as_ref() {
            validate_centers(&labels, centers, ncols)?;
        }

        debug!(
            "Validated clustering result: N={}, D={}, centers={}",
            nrows,
            ncols,
            centers.is_some()
        );

        Ok(Self {
            labels,
            features,
            centers,
        })
    }

    /// Build from row-major feature vectors.
    pub fn from_rows(
        labels: Vec<L>,
        rows: Vec<Vec<f64>>,
        centers: Option<HashMap<L, Vec<f64>>>,
    ) -> SelectResult<Self> {
        let features = rows_to_matrix(&rows)?;
        Self::new(labels, features, centers)
    }

    pub fn nitems(&self) -> usize {
        self.labels.len()
    }

    pub fn nfeatures(&self) -> usize {
        self.features.shape().1
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn features(&self) -> &DenseMatrix<f64> {
        &self.features
    }

    pub fn centers(&self) -> Option<&HashMap<L, Vec<f64>>> {
        self.centers.as_ref()
    }

    pub fn has_centers(&self) -> bool {
        self.centers.is_some()
    }

    pub fn center(&self, label: &L) -> Option<&[f64]> {
        self.centers
            .as_ref()
            .and_then(|c| c.get(label))
            .map(|v| v.as_slice())
    }

    /// Row indices grouped by label, labels in ascending order and row
    /// indices ascending within each group.
    pub fn members_by_label(&self) -> BTreeMap<L, Vec<usize>> {
        let mut groups: BTreeMap<L, Vec<usize>> = BTreeMap::new();
        for (i, label) in self.labels.iter().enumerate() {
            groups.entry(label.clone()).or_default().push(i);
        }
        trace!("Grouped {} items into {} clusters", self.nitems(), groups.len());
        groups
    }

    pub fn n_clusters(&self) -> usize {
        self.members_by_label().len()
    }

    pub fn into_features(self) -> DenseMatrix<f64> {
        self.features
    }
}

impl<L: Label> TryFrom<ClusteringData<L>> for ClusteringResult<L> {
    type Error = SelectionError;

    fn try_from(data: ClusteringData<L>) -> Result<Self, Self::Error> {
        let missing: Vec<&str> = [
            ("labels", data.labels.is_none()),
            ("PCAfeatures", data.features.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(key, _)| key)
        .collect();

        match (data.labels, data.features) {
            (Some(labels), Some(rows)) => Self::from_rows(labels, rows, data.label_centers),
            _ => Err(SelectionError::MissingField(format!(
                "clustering output must provide label and feature information, absent: {}",
                missing.join(", ")
            ))),
        }
    }
}

fn validate_centers<L: Label>(
    labels: &[L],
    centers: &HashMap<L, Vec<f64>>,
    ncols: usize,
) -> SelectResult<()> {
    let mut checked: Vec<&L> = labels.iter().collect();
    checked.sort();
    checked.dedup();

    for label in checked {
        let center = centers.get(label).ok_or_else(|| {
            SelectionError::MissingCenter(format!("label {:?} has no center", label))
        })?;
        if center.len() != ncols {
            return Err(SelectionError::ShapeMismatch(format!(
                "center of label {:?} has {} dimensions, features have {}",
                label,
                center.len(),
                ncols
            )));
        }
    }
    Ok(())
}

/// Build a `DenseMatrix` from row-major vectors, rejecting ragged input.
///
/// No rows gives a `0 x 0` matrix and zero-width rows a `N x 0` matrix; both
/// are valid input.
pub(crate) fn rows_to_matrix(rows: &[Vec<f64>]) -> SelectResult<DenseMatrix<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map(|r| r.len()).unwrap_or(0);

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(SelectionError::ShapeMismatch(format!(
            "feature row {} has {} columns, expected {}",
            i,
            row.len(),
            ncols
        )));
    }

    let mut flat = Vec::<f64>::with_capacity(nrows * ncols);
    for row in rows {
        flat.extend_from_slice(row);
    }

    DenseMatrix::new(nrows, ncols, flat, false)
        .map_err(|e| SelectionError::ShapeMismatch(e.to_string()))
}
