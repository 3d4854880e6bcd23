//! Selection of `k` representative items per cluster.
//!
//! For every cluster label, in ascending label order:
//! - with centers: members are ranked by Euclidean distance to their
//!   cluster center and the members at `k` evenly spaced ranks are picked,
//!   so the picks span from the closest member to the farthest one;
//! - without centers: `k` members are drawn uniformly at random, with
//!   replacement.
//!
//! Per-cluster picks are concatenated and then either collapsed to distinct
//! indices (keeping the first occurrence) or, with `allow_duplicate`, kept
//! as they are and reported through an [`Advisory`].
//!
//! Random draws use `ChaCha8Rng` seeded per cluster from the base seed and
//! the cluster's position in label order, so sequential and parallel
//! processing produce the same output for a given seed.

use std::collections::HashSet;

use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::builder::SelectKFromClusters;
use crate::distance::distances_to_center;
use crate::errors::{SelectResult, SelectionError};
use crate::input::{ClusteringData, ClusteringResult, Label};
use crate::output::{Advisory, SelectionResult};
use crate::rank::{linspace_ranks, select_at_ranks};

/// A stage of a feature-selection pipeline consuming clustering output.
pub trait PipelineStage<L: Label> {
    type Output;

    /// Stateless stages return themselves unchanged.
    fn fit(self, data: &ClusteringData<L>) -> Self
    where
        Self: Sized;

    /// Validate the raw clustering output and run the stage on it.
    fn transform(&self, data: ClusteringData<L>) -> SelectResult<Self::Output>;

    fn fit_transform(self, data: ClusteringData<L>) -> SelectResult<Self::Output>
    where
        Self: Sized,
    {
        let stage = self.fit(&data);
        stage.transform(data)
    }
}

impl<L: Label> PipelineStage<L> for SelectKFromClusters {
    type Output = SelectionResult;

    fn fit(self, data: &ClusteringData<L>) -> Self {
        trace!(
            "fit is a no-op for {} (labels present: {})",
            self,
            data.labels.is_some()
        );
        self
    }

    fn transform(&self, data: ClusteringData<L>) -> SelectResult<SelectionResult> {
        let input = ClusteringResult::try_from(data)?;
        let (selected_indexes, advisories) = self.selected_indexes(&input)?;
        Ok(SelectionResult {
            features: input.into_features(),
            selected_indexes,
            advisories,
        })
    }
}

impl SelectKFromClusters {
    /// Run the selection on a validated clustering result.
    ///
    /// The returned `features` is a copy of the input matrix; use
    /// [`PipelineStage::transform`] to move the matrix through instead.
    pub fn select<L: Label>(&self, input: &ClusteringResult<L>) -> SelectResult<SelectionResult> {
        let (selected_indexes, advisories) = self.selected_indexes(input)?;
        Ok(SelectionResult {
            features: input.features().clone(),
            selected_indexes,
            advisories,
        })
    }

    fn selected_indexes<L: Label>(
        &self,
        input: &ClusteringResult<L>,
    ) -> SelectResult<(Vec<usize>, Vec<Advisory>)> {
        if self.k == 0 {
            return Err(SelectionError::InvalidConfig(
                "k must be a positive number of items per cluster".to_string(),
            ));
        }

        info!(
            "Selecting k={} items per cluster from N={} items",
            self.k,
            input.nitems()
        );

        let mut advisories = Vec::new();
        if !input.has_centers() {
            let advisory = Advisory::MissingCenters;
            warn!("{}", advisory);
            advisories.push(advisory);
        }

        let groups: Vec<(L, Vec<usize>)> = input.members_by_label().into_iter().collect();
        let base_seed = self.seed.unwrap_or_else(rand::random);
        debug!(
            "Processing {} clusters (parallel={}, base seed={})",
            groups.len(),
            self.parallel,
            base_seed
        );

        let pick = |(pos, (label, members)): (usize, &(L, Vec<usize>))| {
            self.select_from_cluster(input, label, members, base_seed.wrapping_add(pos as u64))
        };
        let per_cluster: Vec<Vec<usize>> = if self.parallel {
            groups
                .par_iter()
                .enumerate()
                .map(pick)
                .collect::<SelectResult<_>>()?
        } else {
            groups
                .iter()
                .enumerate()
                .map(pick)
                .collect::<SelectResult<_>>()?
        };

        let mut selected: Vec<usize> = per_cluster.into_iter().flatten().collect();

        let n_duplicate = selected.len() - selected.iter().collect::<HashSet<_>>().len();
        if n_duplicate > 0 {
            if self.allow_duplicate {
                let advisory = Advisory::DuplicateSelection { count: n_duplicate };
                warn!("{}", advisory);
                advisories.push(advisory);
            } else {
                // keep-first
                let mut seen = HashSet::with_capacity(selected.len());
                selected.retain(|i| seen.insert(*i));
                debug!("Collapsed {} duplicated selections", n_duplicate);
            }
        }

        info!("Finally selected {} configurations.", selected.len());
        Ok((selected, advisories))
    }

    /// Picks for one cluster, as row indices into the full feature matrix.
    fn select_from_cluster<L: Label>(
        &self,
        input: &ClusteringResult<L>,
        label: &L,
        members: &[usize],
        seed: u64,
    ) -> SelectResult<Vec<usize>> {
        let n = members.len();

        let picks: Vec<usize> = if input.has_centers() {
            let center = input.center(label).ok_or_else(|| {
                SelectionError::MissingCenter(format!("label {:?} has no center", label))
            })?;
            let dists = distances_to_center(input.features(), members, center);
            let ranks = linspace_ranks(n, self.k);
            select_at_ranks(&dists, &ranks)
                .into_iter()
                .map(|pos| members[pos])
                .collect()
        } else {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..self.k).map(|_| members[rng.gen_range(0..n)]).collect()
        };

        trace!("Cluster {:?}: n={}, picked {:?}", label, n, picks);
        Ok(picks)
    }
}
